//! Photogate - Break-Beam Speedometer Firmware
//!
//! Main firmware binary for RP2040 boards with two IR break-beam sensors,
//! a 128x64 SSD1306 OLED on I2C0 and a unit button.
//!
//! Wiring (Pico GPIO):
//!
//! | Function        | Pin    |
//! |-----------------|--------|
//! | Sensor A        | GPIO27 |
//! | Sensor B        | GPIO26 |
//! | Sensor A LED    | GPIO21 |
//! | Sensor B LED    | GPIO28 |
//! | Unit button     | GPIO22 |
//! | OLED SDA / SCL  | GPIO4 / GPIO5 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use photogate_core::alarm::AlarmRole;
use photogate_core::input::Sensor;
use photogate_drivers::indicator::SensorIndicator;
use photogate_hal_rp2040::alarm::AlarmRunner;
use photogate_hal_rp2040::flash::Rp2040FlashStorage;

use crate::channels::ALARM_SLOTS;
use crate::config::{load_config, load_unit};

mod channels;
mod config;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Photogate firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Read the saved unit before the controller starts; the storage then
    // moves to the settings task for writes
    let mut storage = Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0);
    let saved_unit = load_unit(&mut storage).await;

    // Break-beam receivers drive the line themselves
    let sensor_a = Input::new(p.PIN_27, Pull::None);
    let sensor_b = Input::new(p.PIN_26, Pull::None);
    let led_a = SensorIndicator::new(Output::new(p.PIN_21, Level::Low)).unwrap();
    let led_b = SensorIndicator::new(Output::new(p.PIN_28, Level::Low)).unwrap();

    // Button pulls the line low
    let button = Input::new(p.PIN_22, Pull::Up);

    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    info!("GPIO and I2C initialized");

    // Spawn tasks
    for role in AlarmRole::ALL {
        spawner
            .spawn(tasks::alarm_task(AlarmRunner::new(role, &ALARM_SLOTS)))
            .unwrap();
    }
    spawner
        .spawn(tasks::sensor_task(Sensor::A, sensor_a, led_a))
        .unwrap();
    spawner
        .spawn(tasks::sensor_task(Sensor::B, sensor_b, led_b))
        .unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::display_task(i2c)).unwrap();
    spawner.spawn(tasks::settings_task(storage)).unwrap();
    spawner
        .spawn(tasks::speedometer_task(config, saved_unit))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
