//! Persisted user settings
//!
//! The selected display unit survives power cycles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::speed::SpeedUnit;

/// Magic number to identify valid settings data
pub const SETTINGS_MAGIC: u32 = 0x50475354; // "PGST"

/// Current settings data version
pub const SETTINGS_VERSION: u8 = 1;

/// Settings record stored in flash
///
/// This struct is serialized to flash using postcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitSettings {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Selected unit, as [`SpeedUnit::index`]
    pub unit_index: u8,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self::new(SpeedUnit::default())
    }
}

impl UnitSettings {
    /// Create a record for `unit`
    pub const fn new(unit: SpeedUnit) -> Self {
        Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            unit_index: unit.index(),
        }
    }

    /// Check if the record header is valid
    pub const fn is_valid(&self) -> bool {
        self.magic == SETTINGS_MAGIC && self.version == SETTINGS_VERSION
    }

    /// Stored unit, or `None` if the record or index is invalid
    pub const fn unit(&self) -> Option<SpeedUnit> {
        if !self.is_valid() {
            return None;
        }
        SpeedUnit::from_index(self.unit_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_valid() {
        let settings = UnitSettings::new(SpeedUnit::FeetPerSecond);
        assert!(settings.is_valid());
        assert_eq!(settings.unit(), Some(SpeedUnit::FeetPerSecond));
    }

    #[test]
    fn test_bad_magic_rejected() {
        let settings = UnitSettings {
            magic: 0xFFFF_FFFF,
            ..UnitSettings::default()
        };
        assert!(!settings.is_valid());
        assert_eq!(settings.unit(), None);
    }

    #[test]
    fn test_future_version_rejected() {
        let settings = UnitSettings {
            version: SETTINGS_VERSION + 1,
            ..UnitSettings::default()
        };
        assert_eq!(settings.unit(), None);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let settings = UnitSettings {
            unit_index: 6,
            ..UnitSettings::default()
        };
        assert!(settings.is_valid());
        assert_eq!(settings.unit(), None);
    }
}
