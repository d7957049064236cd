//! Speedometer poll loop
//!
//! Owns the controller. Every tick samples the shared inputs and performs
//! at most one state transition.

use defmt::*;
use embassy_time::{Duration, Ticker};

use photogate_core::config::SpeedometerConfig;
use photogate_core::controller::{Speedometer, Transition};
use photogate_core::speed::SpeedUnit;
use photogate_core::state::Event;
use photogate_hal_rp2040::alarm::SignalAlarmTimer;
use photogate_hal_rp2040::clock::EmbassyClock;

use crate::channels::{ALARM_SLOTS, INPUTS};
use crate::display::{SignalDisplay, SignalSettingsStore};

/// Poll interval in microseconds
pub const POLL_INTERVAL_US: u64 = 500;

#[embassy_executor::task]
pub async fn speedometer_task(config: SpeedometerConfig, saved_unit: Option<SpeedUnit>) {
    info!("Speedometer task started");

    let mut meter = Speedometer::new(
        config,
        &INPUTS,
        SignalAlarmTimer::new(&ALARM_SLOTS),
        EmbassyClock,
        SignalDisplay,
        SignalSettingsStore::new(saved_unit),
    );
    meter.start();
    info!("Showing speeds in {}", meter.unit().label());

    let mut ticker = Ticker::every(Duration::from_micros(POLL_INTERVAL_US));

    loop {
        ticker.next().await;

        // Drain every transition that is ready before sleeping again
        while let Some(transition) = meter.poll() {
            log_transition(&transition, meter.current_speed(), meter.unit().label());
        }

        if let Some(e) = meter.take_timer_error() {
            warn!("Alarm scheduling failed: {:?}", e);
        }
        if let Some(e) = meter.take_store_error() {
            warn!("Unit save failed: {:?}", e);
        }
    }
}

fn log_transition(transition: &Transition, speed_m_s: f64, unit: &str) {
    debug!(
        "{:?} -> {:?} on {:?}",
        transition.from, transition.to, transition.event
    );

    match transition.event {
        Event::MeasurementReady => info!("Measured {} m/s (showing {})", speed_m_s, unit),
        Event::MeasurementDiscarded => warn!("Zero elapsed time, measurement discarded"),
        Event::UnitChanged => info!("Unit changed to {}", unit),
        _ => {}
    }
}
