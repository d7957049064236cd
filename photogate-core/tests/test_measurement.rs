mod common;

use common::{assert_close, Frame, MemoryStore, Rig};
use photogate_core::alarm::AlarmRole;
use photogate_core::input::Sensor;
use photogate_core::speed::SpeedUnit;
use photogate_core::state::{Event, State};

#[test]
fn test_start_enters_on_with_blank_screen() {
    let rig = Rig::new();
    assert_eq!(rig.state(), State::On);
    assert_eq!(rig.display().frames, vec![Frame::Init, Frame::Clear]);
    assert_eq!(rig.meter.unit(), SpeedUnit::MetersPerSecond);
    assert!(rig.inputs.capture.sensors_enabled());
    assert!(rig.inputs.capture.button_enabled());
}

#[test]
fn test_a_then_b_reaches_display_speed() {
    let mut rig = Rig::new();

    rig.trigger(Sensor::A);
    assert_eq!(rig.state(), State::Timing1);
    assert_eq!(rig.meter.previous_state(), State::On);
    assert!(rig.is_armed(AlarmRole::SensorTimeout));

    rig.advance_us(10_000);
    rig.trigger(Sensor::B);

    assert_eq!(rig.state(), State::DisplaySpeed);
    assert_close(rig.meter.current_speed(), 3.2);
    match rig.display().last() {
        Some(Frame::Speed { speed_m_s, unit }) => {
            assert_close(speed_m_s, 3.2);
            assert_eq!(unit, SpeedUnit::MetersPerSecond);
        }
        other => panic!("unexpected frame {other:?}"),
    }
}

#[test]
fn test_b_then_a_gives_same_speed() {
    let mut rig = Rig::new();

    rig.trigger(Sensor::B);
    assert_eq!(rig.state(), State::Timing2);
    rig.advance_us(10_000);
    rig.trigger(Sensor::A);

    assert_eq!(rig.state(), State::DisplaySpeed);
    assert_close(rig.meter.current_speed(), 3.2);
}

#[test]
fn test_transition_sequence() {
    let mut rig = Rig::new();
    rig.pass(10_000);

    let steps: Vec<_> = rig.transitions.iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        steps,
        vec![
            (State::On, State::Timing1),
            (State::Timing1, State::CalculateSpeed),
            (State::CalculateSpeed, State::DisplaySpeed),
        ]
    );
    assert_eq!(rig.transitions[1].event, Event::PartnerTriggered(Sensor::B));
    assert_eq!(rig.transitions[2].event, Event::MeasurementReady);
}

#[test]
fn test_reading_in_mph() {
    let mut rig = Rig::with_store(MemoryStore::holding(SpeedUnit::MilesPerHour));
    assert_eq!(rig.meter.unit(), SpeedUnit::MilesPerHour);

    rig.pass(10_000);

    match rig.display().last() {
        Some(Frame::Speed { speed_m_s, unit }) => {
            assert_close(speed_m_s, 3.2);
            assert_eq!(unit, SpeedUnit::MilesPerHour);
            let shown = unit.convert(speed_m_s);
            assert!((shown - 7.158).abs() < 0.001, "shown {shown}");
        }
        other => panic!("unexpected frame {other:?}"),
    }
}

#[test]
fn test_sensors_locked_out_until_reset() {
    let mut rig = Rig::new();
    rig.pass(10_000);

    assert!(!rig.inputs.capture.sensors_enabled());
    assert!(!rig.trigger(Sensor::A));
    assert!(!rig.trigger(Sensor::B));
    assert_eq!(rig.state(), State::DisplaySpeed);

    rig.advance_ms(199);
    assert_eq!(rig.state(), State::DisplaySpeed);

    rig.advance_ms(1);
    assert_eq!(rig.state(), State::DisplaySpeedSensorReset);
    assert!(rig.inputs.capture.sensors_enabled());
    assert!(rig.is_armed(AlarmRole::DisplayTimeout));
}

#[test]
fn test_new_reading_from_display() {
    let mut rig = Rig::new();
    rig.show_reading(10_000);

    rig.trigger(Sensor::B);
    assert_eq!(rig.state(), State::Timing2);
    assert_eq!(rig.meter.previous_state(), State::DisplaySpeedSensorReset);
    assert!(!rig.is_armed(AlarmRole::DisplayTimeout));

    rig.advance_us(20_000);
    rig.trigger(Sensor::A);

    assert_eq!(rig.state(), State::DisplaySpeed);
    assert_close(rig.meter.current_speed(), 1.6);
    assert_eq!(rig.display().renders(), 2);
}

#[test]
fn test_both_beams_in_one_poll_use_earlier() {
    let mut rig = Rig::new();

    // Recorded out of order before the loop gets to look
    rig.inputs.capture.on_sensor_edge(Sensor::B, 1_000_500);
    rig.inputs.capture.on_sensor_edge(Sensor::A, 1_000_000);
    rig.settle();

    assert_eq!(rig.transitions[0].event, Event::SensorTriggered(Sensor::A));
    assert_eq!(rig.state(), State::DisplaySpeed);
    assert_close(rig.meter.current_speed(), 64.0);
}

#[test]
fn test_zero_elapsed_discarded() {
    let mut rig = Rig::new();
    rig.show_reading(10_000);
    let frames_before = rig.display().renders();

    rig.inputs.capture.on_sensor_edge(Sensor::A, 5_000_000);
    rig.inputs.capture.on_sensor_edge(Sensor::B, 5_000_000);
    rig.settle();

    assert_eq!(rig.state(), State::On);
    assert!(rig
        .transitions
        .iter()
        .any(|t| t.event == Event::MeasurementDiscarded));
    assert_eq!(rig.display().last(), Some(Frame::Clear));
    assert_eq!(rig.display().renders(), frames_before);
    assert_close(rig.meter.current_speed(), 3.2);
    assert!(!rig.is_armed(AlarmRole::SensorReset));
}

#[test]
fn test_measurement_across_counter_wrap() {
    let mut rig = Rig::starting_at(u64::from(u32::MAX) - 4_999);

    rig.pass(10_000);

    assert_eq!(rig.meter.measurement().elapsed_us(), 10_000);
    assert!(rig.meter.measurement().end_time_us < rig.meter.measurement().start_time_us);
    assert_close(rig.meter.current_speed(), 3.2);
}

#[test]
fn test_same_beam_twice_does_not_complete() {
    let mut rig = Rig::new();
    rig.trigger(Sensor::A);
    rig.advance_us(5_000);
    rig.trigger(Sensor::A);

    assert_eq!(rig.state(), State::Timing1);
    assert_eq!(rig.display().renders(), 0);
}
