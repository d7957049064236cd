//! Speed display trait

use crate::speed::SpeedUnit;

/// Trait for the speed readout
///
/// The controller only hands over the canonical speed and the selected
/// unit. Conversion, number formatting, layout and refresh are the
/// implementation's business.
pub trait SpeedDisplay {
    /// Prepare the display for use
    fn init(&mut self);

    /// Blank the screen
    fn clear(&mut self);

    /// Show `speed_m_s` converted to `unit`
    fn render(&mut self, speed_m_s: f64, unit: SpeedUnit);
}
