//! Sensor indicator LEDs
//!
//! Each beam has an LED that follows the receiver's output level, so the
//! beams can be aligned without looking at the screen.

use embedded_hal::digital::OutputPin;

/// LED that mirrors one sensor input
pub struct SensorIndicator<P> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> SensorIndicator<P> {
    /// Create an indicator, initially off
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, lit: false })
    }

    /// Follow the sensor level; only touches the pin on change
    pub fn mirror(&mut self, level_high: bool) -> Result<(), P::Error> {
        if level_high == self.lit {
            return Ok(());
        }
        self.pin.set_state(level_high.into())?;
        self.lit = level_high;
        Ok(())
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
