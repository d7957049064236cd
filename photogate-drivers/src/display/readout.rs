//! Speed readout layout
//!
//! ```text
//!  3.200  speed
//!         (mph)
//! ```
//!
//! Large value on the left, the title and the unit label in a small font
//! to its right. Precision drops as the value grows so it always fits.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use photogate_core::speed::SpeedUnit;

/// Formatted value capacity
pub const VALUE_LEN: usize = 24;

/// Left margin of the value
const VALUE_X: i32 = 5;
const VALUE_Y: i32 = 12;
const TITLE_Y: i32 = 8;
const LABEL_Y: i32 = 20;
/// Space between the value and the title column
const GAP: i32 = 6;

/// A speed ready to draw, converted into its display unit
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedReadout {
    value: String<VALUE_LEN>,
    unit: SpeedUnit,
}

impl SpeedReadout {
    /// Lay out `speed_m_s` in `unit`
    pub fn new(speed_m_s: f64, unit: SpeedUnit) -> Self {
        Self {
            value: format_value(unit.convert(speed_m_s)),
            unit,
        }
    }

    /// Value text as drawn
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    /// Left edge of the title and unit label column
    pub fn label_x(&self) -> i32 {
        let char_width = FONT_10X20.character_size.width as i32;
        VALUE_X + self.value.len() as i32 * char_width + GAP
    }
}

impl Drawable for SpeedReadout {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let large = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let label_x = self.label_x();

        Text::with_baseline(self.value(), Point::new(VALUE_X, VALUE_Y), large, Baseline::Top)
            .draw(target)?;
        Text::with_baseline("speed", Point::new(label_x, TITLE_Y), small, Baseline::Top)
            .draw(target)?;

        let mut label: String<8> = String::new();
        let _ = write!(label, "({})", self.unit.label());
        Text::with_baseline(&label, Point::new(label_x + 1, LABEL_Y), small, Baseline::Top)
            .draw(target)?;

        Ok(())
    }
}

/// Format a converted speed
///
/// Below 10: three decimals. Below 10000: two decimals. Otherwise the
/// integer part only.
pub fn format_value(value: f64) -> String<VALUE_LEN> {
    let mut text = String::new();
    let _ = if !value.is_finite() {
        text.push_str("---").map_err(|_| core::fmt::Error)
    } else if value < 10.0 {
        write!(text, "{:.3}", value)
    } else if value < 10_000.0 {
        write!(text, "{:.2}", value)
    } else {
        write!(text, "{}", value as u64)
    };
    text
}
