//! Persistent settings trait

use crate::speed::SpeedUnit;

/// Errors from the settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// The write could not be queued or performed
    Unavailable,
}

/// Trait for persisting the selected display unit
///
/// Saving is best effort. Implementations must tolerate the same unit
/// being saved repeatedly.
pub trait SettingsStore {
    /// Load the last saved unit, if any
    fn load(&mut self) -> Option<SpeedUnit>;

    /// Save the selected unit
    fn save(&mut self, unit: SpeedUnit) -> Result<(), StoreError>;
}
