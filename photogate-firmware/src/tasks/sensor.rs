//! Break-beam sensor task
//!
//! One instance per beam. Mirrors the receiver output onto the beam's
//! indicator LED and records rising edges.

use defmt::*;
use embassy_rp::gpio::{Input, Output};

use photogate_core::input::Sensor;
use photogate_core::traits::Clock;
use photogate_drivers::indicator::SensorIndicator;
use photogate_hal_rp2040::clock::EmbassyClock;

use crate::channels::INPUTS;

#[embassy_executor::task(pool_size = 2)]
pub async fn sensor_task(
    sensor: Sensor,
    mut input: Input<'static>,
    mut led: SensorIndicator<Output<'static>>,
) {
    info!("Sensor {} task started", sensor);

    let clock = EmbassyClock;
    let _ = led.mirror(input.is_high());

    loop {
        input.wait_for_any_edge().await;
        let now = clock.now_us();
        let high = input.is_high();

        let _ = led.mirror(high);

        if high && INPUTS.capture.on_sensor_edge(sensor, now) {
            trace!("Sensor {} edge at {}us", sensor, now);
        }
    }
}
