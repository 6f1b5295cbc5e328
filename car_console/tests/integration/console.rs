//! End-to-end scenarios on the assembled console.

use super::common::*;
use car_console::audio::Sound;
use car_console::components::Gear;

fn gear(console: &Console, gear: Option<u16>) {
    for pin in [GEAR_1, GEAR_2, 6, 13, 19, 26] {
        console.board.set_pressed(pin, Some(pin) == gear);
    }
}

#[test]
fn battery_indicator_lights_on_first_tick() {
    let mut console = Console::new();
    assert!(!console.led(RUNNABLE_LED));
    console.step(1000.0);
    assert!(console.led(RUNNABLE_LED));
}

#[test]
fn emergency_button_blinks_both_signals_in_sync() {
    let mut console = Console::new();
    console.board.press(EMERGENCY);

    let tick = console.step(1000.0);
    assert!(console.led(TURN_LEFT_LED));
    assert!(console.led(TURN_RIGHT_LED));
    assert_eq!(tick.one_shots, vec![Sound::TurnSignal, Sound::TurnSignal]);

    assert!(console.step(1000.25).one_shots.is_empty());

    let tick = console.step(1000.5);
    assert!(!console.led(TURN_LEFT_LED));
    assert!(!console.led(TURN_RIGHT_LED));
    assert_eq!(tick.one_shots.len(), 2);
}

#[test]
fn lever_blinks_only_its_own_side() {
    let mut console = Console::new();
    console.board.press(TURN_LEFT);

    let tick = console.step(1000.0);
    assert!(console.led(TURN_LEFT_LED));
    assert!(!console.led(TURN_RIGHT_LED));
    assert_eq!(tick.one_shots, vec![Sound::TurnSignal]);
}

#[test]
fn drive_cycle_start_shift_and_stall() {
    let mut console = Console::new();

    console.board.press(STARTER);
    let tick = console.step(1000.0);
    assert_eq!(tick.one_shots, vec![Sound::EngineStart]);
    console.board.release(STARTER);

    let tick = console.step(1000.5);
    assert_eq!(tick.loop_track, Sound::EngineGear(Gear::Neutral));
    assert!(console.led(RUNNING_LED));

    gear(&console, Some(GEAR_1));
    let tick = console.step(1001.0);
    assert_eq!(tick.one_shots, vec![Sound::EngineShiftUp]);
    assert_eq!(tick.loop_track, Sound::EngineGear(Gear::One));

    gear(&console, None);
    console.step(1001.25);
    gear(&console, Some(GEAR_2));
    let tick = console.step(1001.5);
    assert_eq!(tick.one_shots, vec![Sound::EngineShiftUp]);
    assert_eq!(tick.loop_track, Sound::EngineGear(Gear::Two));

    // 2 -> 4 skips a gear.
    gear(&console, None);
    console.step(1001.75);
    gear(&console, Some(13));
    let tick = console.step(1002.0);
    assert_eq!(tick.one_shots, vec![Sound::EngineWrongGear]);
    assert_eq!(tick.loop_track, Sound::Silence);

    gear(&console, None);
    console.step(1002.5);
    assert!(!console.led(RUNNING_LED));

    let played = console.audio.0.lock().played.clone();
    assert_eq!(
        played,
        vec![
            Sound::EngineStart,
            Sound::EngineShiftUp,
            Sound::EngineShiftUp,
            Sound::EngineWrongGear
        ]
    );
}

#[test]
fn starter_stops_running_engine_after_delay() {
    let mut console = Console::new();
    console.board.press(STARTER);
    console.step(1000.0);
    console.step(1001.0);
    let tick = console.step(1002.5);
    assert_eq!(tick.one_shots, vec![Sound::EngineStop]);
    assert_eq!(tick.loop_track, Sound::Silence);
}

#[test]
fn radio_plays_inserted_media_and_forwards_keys() {
    let mut console = Console::new();
    console.media.insert();

    let tick = console.step(1000.0);
    assert_eq!(tick.one_shots, vec![Sound::MediaInject]);
    assert_eq!(console.media.0.lock().launches, 1);

    console.board.press(MUSIC_FORWARD);
    console.step(1000.0625);
    console.board.release(MUSIC_FORWARD);
    console.step(1000.125);
    assert_eq!(console.media.0.lock().written, vec!["", ">"]);

    console.media.eject();
    let tick = console.step(1000.25);
    assert_eq!(tick.one_shots, vec![Sound::MediaEject]);
    assert!(console.media.0.lock().running.is_empty());
}

#[test]
fn holding_play_lets_siren_through_radio() {
    let mut console = Console::new();
    console.media.insert();
    console.board.press(EMERGENCY_LIGHT);
    assert_eq!(console.step(1000.0).loop_track, Sound::Silence);

    console.board.press(MUSIC_PLAY);
    let mut t = 1000.0;
    for _ in 0..=128 {
        t += 1.0 / 64.0;
        console.step(t);
    }
    console.board.release(MUSIC_PLAY);
    console.step(t + 1.0 / 64.0);

    assert_eq!(console.step(t + 2.0 / 64.0).loop_track, Sound::Siren);
    assert!(!console.media.0.lock().written.iter().any(|w| w == " "));
}

#[test]
fn player_exit_restarts_playback() {
    let mut console = Console::new();
    console.media.insert();
    console.step(1000.0);

    console.media.0.lock().running.clear();
    let tick = console.step(1000.02);
    assert_eq!(tick.one_shots, vec![Sound::MediaInject]);
    assert_eq!(console.media.0.lock().launches, 2);
}
