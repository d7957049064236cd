//! Edge capture for the two break-beam sensors and the unit button
//!
//! Each sensor is a single-producer/single-consumer slot: the edge handler
//! stores the timestamp, then publishes the triggered flag with release
//! ordering. The poll loop reads the flag with acquire ordering before the
//! timestamp, so a set flag always comes with its own timestamp.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Break-beam sensor channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sensor {
    /// First sensor (GPIO27 on the reference board)
    A,
    /// Second sensor (GPIO26 on the reference board)
    B,
}

impl Sensor {
    const fn index(self) -> usize {
        match self {
            Sensor::A => 0,
            Sensor::B => 1,
        }
    }
}

struct SensorSlot {
    triggered: AtomicBool,
    timestamp_us: AtomicU32,
}

impl SensorSlot {
    const fn new() -> Self {
        Self {
            triggered: AtomicBool::new(false),
            timestamp_us: AtomicU32::new(0),
        }
    }

    fn record(&self, now_us: u32) {
        self.timestamp_us.store(now_us, Ordering::Relaxed);
        self.triggered.store(true, Ordering::Release);
    }

    fn peek(&self) -> Option<u32> {
        if self.triggered.load(Ordering::Acquire) {
            Some(self.timestamp_us.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    fn take(&self) -> Option<u32> {
        if self.triggered.swap(false, Ordering::AcqRel) {
            Some(self.timestamp_us.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    fn clear(&self) {
        self.triggered.store(false, Ordering::Release);
    }
}

/// Captured edges and their interrupt gates
pub struct EdgeCapture {
    sensors: [SensorSlot; 2],
    sensors_enabled: AtomicBool,
    button_pressed: AtomicBool,
    button_enabled: AtomicBool,
}

impl Default for EdgeCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeCapture {
    /// Create a capture block with every gate open and nothing recorded
    pub const fn new() -> Self {
        Self {
            sensors: [SensorSlot::new(), SensorSlot::new()],
            sensors_enabled: AtomicBool::new(true),
            button_pressed: AtomicBool::new(false),
            button_enabled: AtomicBool::new(true),
        }
    }

    // Interrupt side

    /// Record a qualifying sensor edge at `now_us`
    ///
    /// Ignored while the sensor pair is disabled. Returns whether the edge
    /// was recorded.
    pub fn on_sensor_edge(&self, sensor: Sensor, now_us: u32) -> bool {
        if !self.sensors_enabled.load(Ordering::Acquire) {
            return false;
        }
        self.sensors[sensor.index()].record(now_us);
        true
    }

    /// Record a button press
    ///
    /// The button gate closes itself on every accepted press and stays
    /// closed until [`EdgeCapture::enable_button`]. Returns whether the
    /// press was recorded.
    pub fn on_button_edge(&self) -> bool {
        if !self.button_enabled.swap(false, Ordering::AcqRel) {
            return false;
        }
        self.button_pressed.store(true, Ordering::Release);
        true
    }

    // Poll loop side

    /// Open both sensor gates and drop any recorded trigger
    pub fn enable_sensors(&self) {
        self.clear_sensors();
        self.sensors_enabled.store(true, Ordering::Release);
    }

    /// Close both sensor gates and drop any recorded trigger
    pub fn disable_sensors(&self) {
        self.sensors_enabled.store(false, Ordering::Release);
        self.clear_sensors();
    }

    /// Check whether the sensor pair is accepting edges
    pub fn sensors_enabled(&self) -> bool {
        self.sensors_enabled.load(Ordering::Acquire)
    }

    /// Timestamp of a pending trigger, without consuming it
    pub fn peek_sensor(&self, sensor: Sensor) -> Option<u32> {
        self.sensors[sensor.index()].peek()
    }

    /// Consume a pending trigger, returning its timestamp
    pub fn take_sensor(&self, sensor: Sensor) -> Option<u32> {
        self.sensors[sensor.index()].take()
    }

    /// Open the button gate and drop any recorded press
    pub fn enable_button(&self) {
        self.button_pressed.store(false, Ordering::Release);
        self.button_enabled.store(true, Ordering::Release);
    }

    /// Close the button gate and drop any recorded press
    pub fn disable_button(&self) {
        self.button_enabled.store(false, Ordering::Release);
        self.button_pressed.store(false, Ordering::Release);
    }

    /// Check whether the button is accepting edges
    pub fn button_enabled(&self) -> bool {
        self.button_enabled.load(Ordering::Acquire)
    }

    /// Consume a pending button press
    pub fn take_button(&self) -> bool {
        self.button_pressed.swap(false, Ordering::AcqRel)
    }

    fn clear_sensors(&self) {
        for slot in &self.sensors {
            slot.clear();
        }
    }
}
