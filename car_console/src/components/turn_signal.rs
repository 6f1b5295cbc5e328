//! Turn signal.
//!
//! Blinks at 1 Hz while its own lever or the shared emergency button is
//! held. The blink phase is derived from wall-clock time, so both signals
//! blink in sync without talking to each other. A "turn-signal" click is
//! requested on every phase edge while active.

use crate::audio::Sound;
use crate::component::{AudioRequest, Component, ComponentKind};
use car_common::hal::port::{InputHandle, OutputHandle};

/// One blinker.
pub struct TurnSignal {
    kind: ComponentKind,
    lever: InputHandle,
    emergency: InputHandle,
    led: OutputHandle,
    last_phase: bool,
    audio: AudioRequest,
}

impl TurnSignal {
    /// `kind` is [`ComponentKind::TurnSignalLeft`] or
    /// [`ComponentKind::TurnSignalRight`].
    pub fn new(kind: ComponentKind, lever: InputHandle, emergency: InputHandle, mut led: OutputHandle) -> Self {
        led.set(false);
        Self {
            kind,
            lever,
            emergency,
            led,
            last_phase: false,
            audio: AudioRequest::NONE,
        }
    }
}

/// `true` during the first half of every second.
fn blink_phase(now: f64) -> bool {
    ((now * 2.0).floor() as i64).rem_euclid(2) == 0
}

impl Component for TurnSignal {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn step(&mut self, now: f64) {
        self.audio.clear();
        let phase = blink_phase(now);
        let active = self.lever.is_pressed() || self.emergency.is_pressed();

        self.led.set(phase && active);
        if active && phase != self.last_phase {
            self.audio.one_shot = Some(Sound::TurnSignal);
        }
        self.last_phase = phase;
    }

    fn audio(&self) -> AudioRequest {
        self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::Rig;

    const LEVER: u16 = 2;
    const EMERGENCY: u16 = 17;
    const LED: u16 = 15;

    fn signal(rig: &mut Rig) -> TurnSignal {
        let lever = rig.input(LEVER);
        let emergency = rig.input(EMERGENCY);
        let led = rig.output(LED);
        TurnSignal::new(ComponentKind::TurnSignalLeft, lever, emergency, led)
    }

    #[test]
    fn two_second_hold_blinks_four_edges() {
        let mut rig = Rig::new();
        let mut ts = signal(&mut rig);

        ts.step(0.0);
        assert_eq!(ts.audio().one_shot, None);

        rig.board.press(LEVER);
        let mut clicks = Vec::new();
        let mut toggles = Vec::new();
        let mut led = rig.board.output(LED);
        for k in 1..=100u32 {
            let t = k as f64 / 50.0;
            ts.step(t);
            if ts.audio().one_shot == Some(Sound::TurnSignal) {
                clicks.push(k);
            }
            let now = rig.board.output(LED);
            if now != led && k > 1 {
                toggles.push(k);
            }
            led = now;
        }

        assert_eq!(clicks, vec![25, 50, 75, 100]);
        assert_eq!(toggles, vec![25, 50, 75, 100]);
    }

    #[test]
    fn emergency_button_activates() {
        let mut rig = Rig::new();
        let mut ts = signal(&mut rig);

        rig.board.press(EMERGENCY);
        ts.step(10.0);
        assert_eq!(rig.board.output(LED), Some(true));
        ts.step(10.5);
        assert_eq!(rig.board.output(LED), Some(false));
        assert_eq!(ts.audio().one_shot, Some(Sound::TurnSignal));
    }

    #[test]
    fn inactive_is_dark_and_silent() {
        let mut rig = Rig::new();
        let mut ts = signal(&mut rig);
        for k in 0..100u32 {
            ts.step(k as f64 / 50.0);
            assert_eq!(rig.board.output(LED), Some(false));
            assert_eq!(ts.audio(), AudioRequest::NONE);
        }
        assert_eq!(ts.kind(), ComponentKind::TurnSignalLeft);
    }
}
