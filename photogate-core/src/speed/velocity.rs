//! Elapsed time to speed

/// Velocity calculation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedError {
    /// Both sensors reported the same timestamp
    ZeroElapsed,
}

/// Converts the time between the two beams into a speed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VelocityCalculator {
    spacing_mm: u32,
}

impl VelocityCalculator {
    /// Create a calculator for beams `spacing_mm` apart
    pub const fn new(spacing_mm: u32) -> Self {
        Self { spacing_mm }
    }

    /// Beam spacing in millimeters
    pub const fn spacing_mm(&self) -> u32 {
        self.spacing_mm
    }

    /// Speed in m/s for a beam-to-beam time of `elapsed_us`
    ///
    /// mm/us and m/ms are the same ratio, so the result is
    /// `spacing_mm * 1000 / elapsed_us`.
    pub fn speed_m_per_s(&self, elapsed_us: u32) -> Result<f64, SpeedError> {
        if elapsed_us == 0 {
            return Err(SpeedError::ZeroElapsed);
        }
        Ok(self.spacing_mm as f64 * 1000.0 / elapsed_us as f64)
    }
}
