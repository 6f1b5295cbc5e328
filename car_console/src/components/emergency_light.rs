use crate::audio::Sound;
use crate::component::{AudioRequest, Component, ComponentKind};
use car_common::hal::port::{InputHandle, OutputHandle};

/// Rotating beacon: the relay mirrors the button, the siren loops while
/// it is held.
pub struct EmergencyLight {
    button: InputHandle,
    relay: OutputHandle,
    audio: AudioRequest,
}

impl EmergencyLight {
    pub fn new(button: InputHandle, mut relay: OutputHandle) -> Self {
        relay.set(false);
        Self {
            button,
            relay,
            audio: AudioRequest::NONE,
        }
    }
}

impl Component for EmergencyLight {
    fn kind(&self) -> ComponentKind {
        ComponentKind::EmergencyLight
    }

    fn step(&mut self, _now: f64) {
        self.audio.clear();
        let pressed = self.button.is_pressed();
        self.relay.set(pressed);
        if pressed {
            self.audio.loop_track = Some(Sound::Siren);
        }
    }

    fn audio(&self) -> AudioRequest {
        self.audio
    }
}
