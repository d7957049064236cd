//! OLED display driver and speed readout

pub mod readout;
pub mod ssd1306;

pub use readout::SpeedReadout;
pub use ssd1306::Ssd1306;
