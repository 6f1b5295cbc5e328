use super::{AudioOutput, Sound};
use tracing::debug;

/// Backend that only logs. Used with `--simulate` and in builds without
/// the `playback` feature.
#[derive(Debug)]
pub struct LogAudio {
    current_loop: Sound,
}

impl LogAudio {
    pub fn new() -> Self {
        Self {
            current_loop: Sound::Silence,
        }
    }

    /// Track most recently selected.
    pub fn current_loop(&self) -> Sound {
        self.current_loop
    }
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for LogAudio {
    fn play(&mut self, sound: Sound) {
        debug!("Playing sample {}", sound);
    }

    fn set_loop(&mut self, sound: Sound) {
        if sound != self.current_loop {
            debug!("Playing loop {}", sound);
            self.current_loop = sound;
        }
    }
}
