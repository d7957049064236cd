//! Settings persistence task
//!
//! Owns the flash storage and writes the selected unit when the
//! controller asks for it. Flash writes stall the bus for milliseconds,
//! so they stay out of the poll loop.

use defmt::*;

use photogate_hal_rp2040::flash::Rp2040FlashStorage;

use crate::channels::SETTINGS_SAVE;
use crate::config::save_unit;

#[embassy_executor::task]
pub async fn settings_task(mut storage: Rp2040FlashStorage<'static>) {
    info!("Settings task started");

    loop {
        let unit = SETTINGS_SAVE.wait().await;

        if let Err(e) = save_unit(&mut storage, unit).await {
            warn!("Failed to save unit settings: {:?}", e);
        }
    }
}
