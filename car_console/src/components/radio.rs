//! Radio: plays the removable medium through an external player.
//!
//! Each tick the radio probes for the medium. When it appears the radio
//! remounts it and starts the player (a player that exits is restarted
//! the same way); when it disappears the player is stopped. Keyboard keys
//! are forwarded to the player while the medium is present.
//!
//! While playing, the radio silences the engine and siren loops. Holding
//! play for two seconds toggles that.

use crate::audio::Sound;
use crate::component::{AudioRequest, Component, ComponentKind};
use crate::keyboard::{RadioKey, RadioKeyboard};
use crate::media::MediaSubsystem;
use tracing::{debug, info, warn};

/// Radio over a media subsystem.
pub struct Radio<M: MediaSubsystem> {
    media: M,
    keyboard: RadioKeyboard,
    player: Option<M::Player>,
    silence_others: bool,
    audio: AudioRequest,
}

impl<M: MediaSubsystem> Radio<M> {
    pub fn new(media: M, keyboard: RadioKeyboard) -> Self {
        Self {
            media,
            keyboard,
            player: None,
            silence_others: true,
            audio: AudioRequest::NONE,
        }
    }

    /// `true` while a player is running.
    pub fn is_playing(&self) -> bool {
        self.player.is_some()
    }

    /// `true` while other loops are muted during playback.
    pub fn silences_others(&self) -> bool {
        self.silence_others
    }

    /// Stop the player and release the medium.
    fn stop(&mut self) {
        if let Some(player) = self.player.take() {
            self.media.terminate(player);
        }
        if !self.media.unmount() {
            debug!("Unmount failed");
        }
        self.audio.one_shot = Some(Sound::MediaEject);
    }

    /// Remount the medium and launch the player on it.
    fn start(&mut self) {
        self.stop();
        if self.media.mount() {
            let files = self.media.media_files();
            match self.media.launch(&files) {
                Ok(player) => {
                    info!("Playing {} media files", files.len());
                    self.player = Some(player);
                }
                Err(e) => warn!("Cannot start player: {}", e),
            }
        } else {
            warn!("Mounting media failed");
        }
        self.audio.one_shot = Some(Sound::MediaInject);
    }

    fn send(&mut self, key: RadioKey) {
        let Some(text) = key.player_text() else {
            return;
        };
        match self.player.as_mut() {
            Some(player) => {
                if let Err(e) = self.media.write(player, text) {
                    warn!("Failed to write {:?} to player: {}", text, e);
                }
            }
            None => debug!("No player for key {:?}", key),
        }
    }
}

impl<M: MediaSubsystem> Component for Radio<M> {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Radio
    }

    fn step(&mut self, now: f64) {
        self.audio.clear();

        if !self.media.probe() {
            if self.player.is_some() {
                info!("Media removed");
                self.stop();
            }
            return;
        }

        if let Some(player) = self.player.as_mut() {
            if self.media.has_exited(player) {
                debug!("Player exited");
                self.player = None;
            }
        }
        if self.player.is_none() {
            self.start();
        }

        if self.silence_others {
            self.audio.loop_track = Some(Sound::Silence);
        }

        match self.keyboard.poll(now) {
            Some(RadioKey::ToggleSilencing) => {
                self.silence_others = !self.silence_others;
                debug!("Silencing other loops: {}", self.silence_others);
            }
            Some(key) => self.send(key),
            None => {}
        }
    }

    fn audio(&self) -> AudioRequest {
        self.audio
    }
}
