//! Signal-backed [`SpeedDisplay`] and [`SettingsStore`]

use photogate_core::speed::SpeedUnit;
use photogate_core::traits::{SettingsStore, SpeedDisplay, StoreError};

use crate::channels::{ScreenCommand, SCREEN, SETTINGS_SAVE};

/// Forwards screen updates to the display task
///
/// The panel is initialised by the display task itself, so `init` only
/// makes sure the first frame is blank.
pub struct SignalDisplay;

impl SpeedDisplay for SignalDisplay {
    fn init(&mut self) {
        SCREEN.signal(ScreenCommand::Clear);
    }

    fn clear(&mut self) {
        SCREEN.signal(ScreenCommand::Clear);
    }

    fn render(&mut self, speed_m_s: f64, unit: SpeedUnit) {
        SCREEN.signal(ScreenCommand::Speed { speed_m_s, unit });
    }
}

/// Hands unit saves to the settings task
///
/// Flash is read once at boot, before the controller exists; `load`
/// returns that result.
pub struct SignalSettingsStore {
    loaded: Option<SpeedUnit>,
}

impl SignalSettingsStore {
    pub fn new(loaded: Option<SpeedUnit>) -> Self {
        Self { loaded }
    }
}

impl SettingsStore for SignalSettingsStore {
    fn load(&mut self) -> Option<SpeedUnit> {
        self.loaded
    }

    fn save(&mut self, unit: SpeedUnit) -> Result<(), StoreError> {
        // A pending unsaved unit is superseded; only the latest matters
        SETTINGS_SAVE.signal(unit);
        Ok(())
    }
}
