//! One-shot alarm tasks
//!
//! One instance per alarm role, spawned at boot. Each waits on its
//! command slot and reports expiries to the input block.

use defmt::*;

use photogate_hal_rp2040::alarm::AlarmRunner;

use crate::channels::INPUTS;

#[embassy_executor::task(pool_size = 5)]
pub async fn alarm_task(mut runner: AlarmRunner) {
    debug!("Alarm task for {} started", runner.role());

    loop {
        let id = runner.next_fire().await;
        trace!("Alarm {} fired (id {})", runner.role(), id.0);
        INPUTS.on_alarm_fired(runner.role());
    }
}
