//! Unit button task

use defmt::*;
use embassy_rp::gpio::Input;

use crate::channels::INPUTS;

/// Records falling edges of the unit button
///
/// The edge locks the button out until the controller's debounce alarm
/// releases it, so bounces are dropped here.
#[embassy_executor::task]
pub async fn button_task(mut input: Input<'static>) {
    info!("Button task started");

    loop {
        input.wait_for_falling_edge().await;
        if INPUTS.capture.on_button_edge() {
            trace!("Button pressed");
        }
    }
}
