//! Inter-task communication
//!
//! Statics shared between Embassy tasks. The input block and alarm slots
//! are written from the edge and alarm tasks and read by the poll loop;
//! the signals carry work out of the poll loop so it never waits on I2C or
//! flash.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use photogate_core::input::SharedInputs;
use photogate_core::speed::SpeedUnit;
use photogate_hal_rp2040::alarm::AlarmSlots;

/// Edge timestamps, enable flags and alarm fired flags
pub static INPUTS: SharedInputs = SharedInputs::new();

/// Arm/cancel commands, one slot per alarm role
pub static ALARM_SLOTS: AlarmSlots = AlarmSlots::new();

/// What the screen should show
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenCommand {
    /// Blank the panel
    Clear,
    /// Draw a reading
    Speed { speed_m_s: f64, unit: SpeedUnit },
}

/// Latest screen contents (updated by the poll loop)
pub static SCREEN: Signal<CriticalSectionRawMutex, ScreenCommand> = Signal::new();

/// Unit to persist (updated by the poll loop)
pub static SETTINGS_SAVE: Signal<CriticalSectionRawMutex, SpeedUnit> = Signal::new();
