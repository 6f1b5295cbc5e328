//! Loop precedence across the registered components.

use super::common::*;
use car_console::audio::Sound;
use car_console::components::Gear;
use car_console::{ComponentKind, REGISTRATION_ORDER};

#[test]
fn console_is_registered_in_documented_order() {
    let console = Console::new();
    assert_eq!(console.car.kinds(), REGISTRATION_ORDER.to_vec());
    assert_eq!(
        REGISTRATION_ORDER,
        [
            ComponentKind::Battery,
            ComponentKind::Engine,
            ComponentKind::TurnSignalLeft,
            ComponentKind::TurnSignalRight,
            ComponentKind::EmergencyLight,
            ComponentKind::Radio,
            ComponentKind::Horn,
        ]
    );
}

#[test]
fn idle_console_plays_silence() {
    let mut console = Console::new();
    let tick = console.step(1000.0);
    assert_eq!(tick.loop_track, Sound::Silence);
    assert!(tick.one_shots.is_empty());
}

#[test]
fn horn_beats_siren() {
    let mut console = Console::new();
    console.board.press(EMERGENCY_LIGHT);
    assert_eq!(console.step(1000.0).loop_track, Sound::Siren);
    assert!(console.led(RELAY));

    console.board.press(HORN);
    assert_eq!(console.step(1000.02).loop_track, Sound::Horn);

    console.board.release(HORN);
    assert_eq!(console.step(1000.04).loop_track, Sound::Siren);

    console.board.release(EMERGENCY_LIGHT);
    assert_eq!(console.step(1000.06).loop_track, Sound::Silence);
    assert!(!console.led(RELAY));

    let log = console.audio.0.lock();
    assert_eq!(
        log.loop_changes,
        vec![Sound::Siren, Sound::Horn, Sound::Siren, Sound::Silence]
    );
}

#[test]
fn siren_beats_engine() {
    let mut console = Console::new();
    console.board.press(STARTER);
    console.step(1000.0);
    console.board.release(STARTER);
    assert_eq!(console.step(1000.02).loop_track, Sound::EngineGear(Gear::Neutral));

    console.board.press(EMERGENCY_LIGHT);
    assert_eq!(console.step(1000.04).loop_track, Sound::Siren);
}

#[test]
fn playing_radio_mutes_siren_but_not_horn() {
    let mut console = Console::new();
    console.media.insert();
    console.board.press(EMERGENCY_LIGHT);

    let tick = console.step(1000.0);
    assert_eq!(tick.loop_track, Sound::Silence);
    assert_eq!(tick.one_shots, vec![Sound::MediaInject]);

    console.board.press(HORN);
    assert_eq!(console.step(1000.02).loop_track, Sound::Horn);
}
