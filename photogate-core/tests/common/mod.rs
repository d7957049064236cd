//! Host simulation harness for the speedometer controller
//!
//! Virtual time only moves when a test advances it. Alarms that come due
//! fire in order through `SharedInputs::on_alarm_fired`, exactly as the
//! firmware alarm tasks do, and the controller is polled until it settles
//! after every fire.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use photogate_core::alarm::{AlarmRole, TimerId};
use photogate_core::config::SpeedometerConfig;
use photogate_core::controller::{Speedometer, Transition};
use photogate_core::input::{Sensor, SharedInputs};
use photogate_core::speed::SpeedUnit;
use photogate_core::state::State;
use photogate_core::traits::{
    AlarmTimer, Clock, SettingsStore, SpeedDisplay, StoreError, TimerError,
};

/// Shared virtual time and armed alarms
#[derive(Default)]
pub struct Sim {
    /// Virtual time; the clock reports the low 32 bits
    pub now_us: u64,
    /// Armed alarms as (role, id, due time)
    pub armed: Vec<(AlarmRole, TimerId, u64)>,
    /// Every schedule request as (role, duration)
    pub scheduled: Vec<(AlarmRole, u32)>,
    /// Reject every schedule request
    pub exhausted: bool,
    next_id: u32,
}

pub struct SimTimer(pub Rc<RefCell<Sim>>);

impl AlarmTimer for SimTimer {
    fn schedule_once(&mut self, role: AlarmRole, duration_ms: u32) -> Result<TimerId, TimerError> {
        let mut sim = self.0.borrow_mut();
        if sim.exhausted {
            return Err(TimerError::Exhausted);
        }
        sim.next_id += 1;
        let id = TimerId(sim.next_id);
        let due = sim.now_us + u64::from(duration_ms) * 1000;
        sim.armed.push((role, id, due));
        sim.scheduled.push((role, duration_ms));
        Ok(id)
    }

    fn cancel(&mut self, _role: AlarmRole, id: TimerId) {
        self.0.borrow_mut().armed.retain(|(_, armed_id, _)| *armed_id != id);
    }
}

pub struct SimClock(pub Rc<RefCell<Sim>>);

impl Clock for SimClock {
    fn now_us(&self) -> u32 {
        self.0.borrow().now_us as u32
    }
}

/// What the display was asked to show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Init,
    Clear,
    Speed { speed_m_s: f64, unit: SpeedUnit },
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub frames: Vec<Frame>,
}

impl RecordingDisplay {
    pub fn last(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    /// Number of speed frames rendered so far
    pub fn renders(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| matches!(f, Frame::Speed { .. }))
            .count()
    }
}

impl SpeedDisplay for RecordingDisplay {
    fn init(&mut self) {
        self.frames.push(Frame::Init);
    }

    fn clear(&mut self) {
        self.frames.push(Frame::Clear);
    }

    fn render(&mut self, speed_m_s: f64, unit: SpeedUnit) {
        self.frames.push(Frame::Speed { speed_m_s, unit });
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub stored: Option<SpeedUnit>,
    pub saves: Vec<SpeedUnit>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn holding(unit: SpeedUnit) -> Self {
        Self {
            stored: Some(unit),
            ..Self::default()
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&mut self) -> Option<SpeedUnit> {
        self.stored
    }

    fn save(&mut self, unit: SpeedUnit) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        self.stored = Some(unit);
        self.saves.push(unit);
        Ok(())
    }
}

pub type TestSpeedometer =
    Speedometer<'static, SimTimer, SimClock, RecordingDisplay, MemoryStore>;

/// A started speedometer on virtual time
pub struct Rig {
    pub sim: Rc<RefCell<Sim>>,
    pub inputs: &'static SharedInputs,
    pub meter: TestSpeedometer,
    pub transitions: Vec<Transition>,
}

impl Rig {
    /// Default configuration, empty store, clock at 1 s
    pub fn new() -> Self {
        Self::with(SpeedometerConfig::default(), MemoryStore::default(), 1_000_000)
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self::with(SpeedometerConfig::default(), store, 1_000_000)
    }

    pub fn starting_at(now_us: u64) -> Self {
        Self::with(SpeedometerConfig::default(), MemoryStore::default(), now_us)
    }

    pub fn with(config: SpeedometerConfig, store: MemoryStore, now_us: u64) -> Self {
        let sim = Rc::new(RefCell::new(Sim {
            now_us,
            ..Sim::default()
        }));
        let inputs: &'static SharedInputs = Box::leak(Box::new(SharedInputs::new()));
        let mut meter = Speedometer::new(
            config,
            inputs,
            SimTimer(sim.clone()),
            SimClock(sim.clone()),
            RecordingDisplay::default(),
            store,
        );
        meter.start();

        let mut rig = Self {
            sim,
            inputs,
            meter,
            transitions: Vec::new(),
        };
        rig.settle();
        rig
    }

    pub fn now_us(&self) -> u64 {
        self.sim.borrow().now_us
    }

    pub fn state(&self) -> State {
        self.meter.state()
    }

    pub fn display(&self) -> &RecordingDisplay {
        self.meter.display()
    }

    pub fn store(&self) -> &MemoryStore {
        self.meter.store()
    }

    /// Poll until the controller stops transitioning
    pub fn settle(&mut self) {
        for _ in 0..32 {
            match self.meter.poll() {
                Some(transition) => self.transitions.push(transition),
                None => return,
            }
        }
        panic!("controller did not settle: {:?}", self.transitions);
    }

    /// Move virtual time forward, firing due alarms in order
    pub fn advance_us(&mut self, us: u64) {
        let target = self.now_us() + us;
        loop {
            let next = {
                let mut sim = self.sim.borrow_mut();
                let due = sim
                    .armed
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, _, due))| *due <= target)
                    .min_by_key(|(_, (_, _, due))| *due)
                    .map(|(index, _)| index);
                due.map(|index| {
                    let (role, _, due) = sim.armed.remove(index);
                    sim.now_us = due;
                    role
                })
            };

            match next {
                Some(role) => {
                    self.inputs.on_alarm_fired(role);
                    self.settle();
                }
                None => break,
            }
        }
        self.sim.borrow_mut().now_us = target;
        self.settle();
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.advance_us(ms * 1000);
    }

    /// Break a beam now and let the controller react
    pub fn trigger(&mut self, sensor: Sensor) -> bool {
        let now = self.now_us() as u32;
        let recorded = self.inputs.capture.on_sensor_edge(sensor, now);
        self.settle();
        recorded
    }

    /// Press the unit button now and let the controller react
    pub fn press(&mut self) -> bool {
        let recorded = self.inputs.capture.on_button_edge();
        self.settle();
        recorded
    }

    /// Run one full A-then-B pass `elapsed_us` apart
    pub fn pass(&mut self, elapsed_us: u64) {
        self.trigger(Sensor::A);
        self.advance_us(elapsed_us);
        self.trigger(Sensor::B);
    }

    /// Take a reading and wait out the sensor lockout
    pub fn show_reading(&mut self, elapsed_us: u64) {
        self.pass(elapsed_us);
        self.advance_ms(u64::from(self.meter.config().sensor_reset_ms));
        assert_eq!(self.state(), State::DisplaySpeedSensorReset);
    }

    pub fn is_armed(&self, role: AlarmRole) -> bool {
        self.sim.borrow().armed.iter().any(|(r, _, _)| *r == role)
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
