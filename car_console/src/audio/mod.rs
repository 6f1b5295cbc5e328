//! Audio subsystem.
//!
//! Components only name sounds ([`Sound`]); a backend behind
//! [`AudioOutput`] renders them. The loop calls [`AudioOutput::play`] for
//! every one-shot of a tick and [`AudioOutput::set_loop`] once per tick
//! with the resolved continuous track.
//!
//! Backends:
//! - [`LogAudio`] - logs requests, always available
//! - `RodioAudio` - real playback, behind the `playback` feature

mod log;
#[cfg(feature = "playback")]
mod playback;
mod sound;

pub use self::log::LogAudio;
#[cfg(feature = "playback")]
pub use self::playback::RodioAudio;
pub use self::sound::Sound;

use std::path::PathBuf;
use thiserror::Error;

/// Sub-directory of the sounds root holding one-shot samples.
pub const SAMPLES_DIR: &str = "samples";

/// Sub-directory of the sounds root holding loop tracks (`<name>.wav`).
pub const LOOPS_DIR: &str = "loops";

/// Audio backend errors. All of them are startup errors.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A required asset file is missing.
    #[error("missing audio asset {0}")]
    MissingAsset(PathBuf),

    /// An asset exists but cannot be read or decoded.
    #[error("cannot load {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// The output device could not be opened.
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// Renders the sounds the simulation loop asks for.
pub trait AudioOutput {
    /// Play a one-shot sample, overlapping whatever is already playing.
    fn play(&mut self, sound: Sound);

    /// Select the continuous track. Called every tick; switching only
    /// happens when `sound` differs from the current track.
    fn set_loop(&mut self, sound: Sound);
}
