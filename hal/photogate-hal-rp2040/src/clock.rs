//! Monotonic clock on the embassy time driver

use embassy_time::Instant;
use photogate_core::traits::Clock;

/// Microsecond clock
///
/// Reports the low 32 bits of the time driver's microsecond count, so it
/// wraps roughly every 71.6 minutes. Callers use wrapping arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_us(&self) -> u32 {
        Instant::now().as_micros() as u32
    }
}
