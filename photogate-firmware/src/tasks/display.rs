//! OLED display task
//!
//! Owns the I2C bus and the SSD1306. Redraws whenever the poll loop posts
//! new screen contents; intermediate updates are skipped if drawing falls
//! behind.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embedded_graphics::Drawable;

use photogate_drivers::display::{Ssd1306, SpeedReadout};

use crate::channels::{ScreenCommand, SCREEN};

#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C0, Async>) {
    info!("Display task started");

    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init().await {
        warn!("Display init failed: {:?}", e);
    }

    loop {
        let command = SCREEN.wait().await;
        trace!("Screen: {:?}", command);

        display.clear_buffer();
        if let ScreenCommand::Speed { speed_m_s, unit } = command {
            // The frame buffer cannot fail
            let _ = SpeedReadout::new(speed_m_s, unit).draw(&mut display);
        }

        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
