use crate::audio::Sound;
use crate::component::{AudioRequest, Component, ComponentKind};
use car_common::hal::port::InputHandle;

/// Horn: the horn loop plays while the button is held.
pub struct Horn {
    button: InputHandle,
    audio: AudioRequest,
}

impl Horn {
    pub fn new(button: InputHandle) -> Self {
        Self {
            button,
            audio: AudioRequest::NONE,
        }
    }
}

impl Component for Horn {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Horn
    }

    fn step(&mut self, _now: f64) {
        self.audio.clear();
        if self.button.is_pressed() {
            self.audio.loop_track = Some(Sound::Horn);
        }
    }

    fn audio(&self) -> AudioRequest {
        self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::Rig;

    #[test]
    fn loop_follows_button() {
        let mut rig = Rig::new();
        let mut horn = Horn::new(rig.input(4));

        horn.step(0.0);
        assert_eq!(horn.audio().loop_track, None);

        rig.board.press(4);
        horn.step(0.02);
        assert_eq!(horn.audio().loop_track, Some(Sound::Horn));
        assert_eq!(horn.audio().one_shot, None);

        rig.board.release(4);
        horn.step(0.04);
        assert_eq!(horn.audio(), AudioRequest::NONE);
    }
}
