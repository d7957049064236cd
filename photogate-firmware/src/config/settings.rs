//! Unit settings persistence
//!
//! Loads and saves the selected display unit to flash storage.

use defmt::*;

use photogate_core::config::UnitSettings;
use photogate_core::speed::SpeedUnit;
use photogate_hal_rp2040::flash::{FlashError, Rp2040FlashStorage, StorageKey};
use photogate_hal_rp2040::FlashStorageTrait;

/// Maximum serialized settings size
const MAX_SETTINGS_SIZE: usize = 32;

/// Settings persistence errors
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Flash operation failed
    Flash(FlashError),
    /// Deserialization failed
    Deserialize,
    /// Serialization failed
    Serialize,
    /// Invalid magic, version or unit index
    InvalidFormat,
}

impl From<FlashError> for SettingsError {
    fn from(e: FlashError) -> Self {
        SettingsError::Flash(e)
    }
}

/// Load the saved unit from flash
///
/// Returns `None` if nothing is stored or the record is unusable.
pub async fn load_unit(storage: &mut Rp2040FlashStorage<'_>) -> Option<SpeedUnit> {
    match load_unit_inner(storage).await {
        Ok(unit) => {
            info!("Loaded unit {} from flash", unit.label());
            Some(unit)
        }
        Err(SettingsError::Flash(FlashError::NotFound)) => {
            debug!("No unit settings in flash, using default");
            None
        }
        Err(e) => {
            warn!("Failed to load unit settings: {:?}, using default", e);
            None
        }
    }
}

async fn load_unit_inner(storage: &mut Rp2040FlashStorage<'_>) -> Result<SpeedUnit, SettingsError> {
    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let len = storage.read(StorageKey::UnitSettings, &mut buffer).await?;

    let settings: UnitSettings =
        postcard::from_bytes(&buffer[..len]).map_err(|_| SettingsError::Deserialize)?;

    if !settings.is_valid() {
        return Err(SettingsError::InvalidFormat);
    }
    settings.unit().ok_or(SettingsError::InvalidFormat)
}

/// Save the selected unit to flash
pub async fn save_unit(
    storage: &mut Rp2040FlashStorage<'_>,
    unit: SpeedUnit,
) -> Result<(), SettingsError> {
    let settings = UnitSettings::new(unit);

    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let bytes =
        postcard::to_slice(&settings, &mut buffer).map_err(|_| SettingsError::Serialize)?;

    debug!("Saving {} bytes of unit settings to flash", bytes.len());
    storage.write(StorageKey::UnitSettings, bytes).await?;

    info!("Saved unit {} to flash", unit.label());
    Ok(())
}
