//! Speedometer controller
//!
//! Owns the state machine and everything only the poll loop touches:
//! the alarm service, the display and settings sinks, and the measurement
//! context. Interrupt context only ever writes [`SharedInputs`].
//!
//! Each [`Speedometer::poll`] performs at most one state transition:
//!
//! 1. Service the debounce and unit-change alarms
//! 2. Run the current state's handler, which samples inputs and may
//!    produce an [`Event`]
//! 3. Feed the event through [`State::transition`]
//! 4. Run the entry actions of the new state

pub mod measurement;

pub use measurement::MeasurementContext;

use crate::alarm::{AlarmRole, AlarmService};
use crate::config::SpeedometerConfig;
use crate::input::{Sensor, SharedInputs};
use crate::speed::{SpeedUnit, VelocityCalculator};
use crate::state::{Event, State};
use crate::traits::{AlarmTimer, Clock, SettingsStore, SpeedDisplay, StoreError, TimerError};

/// A state change produced by one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: State,
    pub to: State,
    pub event: Event,
}

/// Break-beam speedometer
pub struct Speedometer<'a, T: AlarmTimer, C: Clock, D: SpeedDisplay, S: SettingsStore> {
    config: SpeedometerConfig,
    inputs: &'a SharedInputs,
    alarms: AlarmService<'a, T>,
    clock: C,
    display: D,
    store: S,
    velocity: VelocityCalculator,
    state: State,
    previous_state: State,
    measurement: MeasurementContext,
    /// Clock value of the last accepted unit button press, held only
    /// until its debounce alarm fires
    last_press_us: Option<u32>,
    /// Unit last loaded from or written to the store
    saved_unit: Option<SpeedUnit>,
    timer_error: Option<TimerError>,
    store_error: Option<StoreError>,
}

impl<'a, T, C, D, S> Speedometer<'a, T, C, D, S>
where
    T: AlarmTimer,
    C: Clock,
    D: SpeedDisplay,
    S: SettingsStore,
{
    pub fn new(
        config: SpeedometerConfig,
        inputs: &'a SharedInputs,
        timer: T,
        clock: C,
        display: D,
        store: S,
    ) -> Self {
        Self {
            velocity: VelocityCalculator::new(config.spacing_mm),
            config,
            inputs,
            alarms: AlarmService::new(timer, &inputs.alarms),
            clock,
            display,
            store,
            state: State::On,
            previous_state: State::On,
            measurement: MeasurementContext::default(),
            last_press_us: None,
            saved_unit: None,
            timer_error: None,
            store_error: None,
        }
    }

    /// Initialise the display, restore the saved unit and enter ON
    pub fn start(&mut self) {
        self.display.init();

        self.saved_unit = self.store.load();
        self.measurement.units.set(self.saved_unit.unwrap_or_default());

        // A restart must not inherit alarms from the previous run
        self.alarms.cancel_all();
        self.last_press_us = None;

        self.state = State::On;
        self.previous_state = State::On;
        self.enter(State::On);
    }

    /// Sample inputs and advance the state machine by at most one step
    pub fn poll(&mut self) -> Option<Transition> {
        self.service_debounce();
        self.service_unit_change();

        let event = match self.state {
            State::On => self.poll_on(),
            State::Timing1 | State::Timing2 => self.poll_timing(),
            State::CalculateSpeed => Some(self.poll_calculate()),
            State::DisplaySpeed => self.poll_display_speed(),
            State::DisplaySpeedSensorReset => self.poll_sensor_reset(),
            State::LowPower | State::WakeUp => None,
        }?;

        let from = self.state;
        let to = from.transition(event);
        self.state = to;
        self.enter(to);

        Some(Transition { from, to, event })
    }

    // Accessors

    pub fn state(&self) -> State {
        self.state
    }

    /// State the current or last timing attempt started from
    pub fn previous_state(&self) -> State {
        self.previous_state
    }

    pub fn current_speed(&self) -> f64 {
        self.measurement.current_speed_m_s
    }

    pub fn unit(&self) -> SpeedUnit {
        self.measurement.unit()
    }

    pub fn measurement(&self) -> &MeasurementContext {
        &self.measurement
    }

    pub fn config(&self) -> &SpeedometerConfig {
        &self.config
    }

    pub fn alarms(&self) -> &AlarmService<'a, T> {
        &self.alarms
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the last alarm scheduling failure, if any
    pub fn take_timer_error(&mut self) -> Option<TimerError> {
        self.timer_error.take()
    }

    /// Take the last settings save failure, if any
    pub fn take_store_error(&mut self) -> Option<StoreError> {
        self.store_error.take()
    }

    // State handlers

    fn poll_on(&mut self) -> Option<Event> {
        if self.inputs.capture.take_button() {
            // The edge locked the button out; release it after the debounce
            self.last_press_us = Some(self.clock.now_us());
            self.arm(AlarmRole::ButtonDebounce);
            return Some(Event::ButtonPressed);
        }
        self.begin_timing()
    }

    fn poll_timing(&mut self) -> Option<Event> {
        let awaited = self.state.awaited_sensor()?;

        if let Some(timestamp) = self.inputs.capture.take_sensor(awaited) {
            self.measurement.end_time_us = timestamp;
            return Some(Event::PartnerTriggered(awaited));
        }

        if self.alarms.take_fired(AlarmRole::SensorTimeout) {
            return Some(Event::SensorTimeout {
                resume: self.previous_state,
            });
        }

        None
    }

    fn poll_calculate(&mut self) -> Event {
        match self.velocity.speed_m_per_s(self.measurement.elapsed_us()) {
            Ok(speed) => {
                self.measurement.current_speed_m_s = speed;
                self.display.render(speed, self.measurement.unit());
                Event::MeasurementReady
            }
            Err(_) => Event::MeasurementDiscarded,
        }
    }

    fn poll_display_speed(&mut self) -> Option<Event> {
        if self.alarms.take_fired(AlarmRole::SensorReset) {
            return Some(Event::SensorResetElapsed);
        }
        None
    }

    fn poll_sensor_reset(&mut self) -> Option<Event> {
        if let Some(event) = self.begin_timing() {
            return Some(event);
        }

        if self.inputs.capture.take_button() {
            if let Some(event) = self.change_unit() {
                return Some(event);
            }
        }

        if self.alarms.take_fired(AlarmRole::DisplayTimeout) {
            return Some(Event::DisplayTimeout);
        }

        None
    }

    /// Start a timing attempt if either beam has been broken
    ///
    /// With both beams pending, the earlier one starts the attempt and the
    /// later one stays pending to complete it.
    fn begin_timing(&mut self) -> Option<Event> {
        let inputs = self.inputs;
        let capture = &inputs.capture;
        let first = match (capture.peek_sensor(Sensor::A), capture.peek_sensor(Sensor::B)) {
            (Some(a), Some(b)) => {
                if (b.wrapping_sub(a) as i32) < 0 {
                    Sensor::B
                } else {
                    Sensor::A
                }
            }
            (Some(_), None) => Sensor::A,
            (None, Some(_)) => Sensor::B,
            (None, None) => return None,
        };

        let timestamp = capture.take_sensor(first)?;
        self.measurement.start_time_us = timestamp;
        self.previous_state = self.state;
        Some(Event::SensorTriggered(first))
    }

    /// Unit button handling while a reading is shown
    fn change_unit(&mut self) -> Option<Event> {
        let now = self.clock.now_us();
        // The stamp is dropped once the debounce alarm fires, so the
        // wrapping difference never spans a full 2^32 us clock period
        let accepted = match self.last_press_us {
            Some(last) => now.wrapping_sub(last) >= self.config.debounce_us(),
            None => true,
        };

        if !accepted {
            // Press consumed; keep the lockout recoverable
            self.arm(AlarmRole::ButtonDebounce);
            return None;
        }

        self.last_press_us = Some(now);
        self.inputs.capture.disable_button();
        self.arm(AlarmRole::UnitChangeTimeout);
        self.arm(AlarmRole::ButtonDebounce);

        let unit = self.measurement.units.advance();
        self.display.render(self.measurement.current_speed_m_s, unit);
        Some(Event::UnitChanged)
    }

    /// Forget the last press once its debounce window has elapsed
    fn service_debounce(&mut self) {
        if self.alarms.take_fired(AlarmRole::ButtonDebounce) {
            self.last_press_us = None;
        }
    }

    /// Persist the unit once it has been left alone long enough
    fn service_unit_change(&mut self) {
        if !self.alarms.take_fired(AlarmRole::UnitChangeTimeout) {
            return;
        }

        let unit = self.measurement.unit();
        if self.saved_unit == Some(unit) {
            return;
        }

        match self.store.save(unit) {
            Ok(()) => self.saved_unit = Some(unit),
            Err(e) => self.store_error = Some(e),
        }
    }

    // Entry actions

    fn enter(&mut self, state: State) {
        let inputs = self.inputs;
        let capture = &inputs.capture;
        match state {
            State::On => {
                self.alarms.cancel(AlarmRole::SensorTimeout);
                self.alarms.cancel(AlarmRole::SensorReset);
                self.alarms.cancel(AlarmRole::DisplayTimeout);
                capture.enable_button();
                capture.enable_sensors();
                self.display.clear();
            }
            State::Timing1 | State::Timing2 => {
                self.alarms.cancel(AlarmRole::DisplayTimeout);
                self.arm(AlarmRole::SensorTimeout);
            }
            State::CalculateSpeed => {
                // Beams are likely still blocked; lock them out until reset
                capture.disable_sensors();
                self.alarms.cancel(AlarmRole::SensorTimeout);
                self.arm(AlarmRole::SensorReset);
            }
            State::DisplaySpeedSensorReset => {
                capture.enable_sensors();
                self.alarms.cancel(AlarmRole::SensorTimeout);
                self.alarms.cancel(AlarmRole::SensorReset);
                self.arm(AlarmRole::DisplayTimeout);
            }
            State::DisplaySpeed | State::LowPower | State::WakeUp => {}
        }
    }

    fn arm(&mut self, role: AlarmRole) {
        let duration_ms = self.config.duration_ms(role);
        if let Err(e) = self.alarms.schedule(role, duration_ms) {
            self.timer_error = Some(e);
        }
    }
}
