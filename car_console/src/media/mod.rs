//! Removable media and the external player.
//!
//! [`MediaSubsystem`] is the narrow contract the radio consumes. Every
//! operation is bounded by a short timeout and reports failure as a value;
//! nothing here may stall or abort a tick.
//!
//! - [`SystemMedia`] - mount(8), umount(8) and a player child process
//! - [`discovery`] - playable file lookup on the mounted medium

pub mod discovery;
mod system;

pub use system::{PlayerProcess, SystemMedia};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Media subsystem errors.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Local setup (mount directory) failed.
    #[error("cannot prepare {path}: {source}")]
    Setup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The player could not be started.
    #[error("cannot start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The player's control channel rejected a write.
    #[error("player control write failed: {0}")]
    Write(#[source] io::Error),

    /// The player has no control channel.
    #[error("player stdin is closed")]
    ChannelClosed,

    /// A system call on the player's pipes failed.
    #[error("system call failed: {0}")]
    Sys(#[from] nix::Error),
}

/// Operations the radio needs from the media side.
pub trait MediaSubsystem {
    /// Handle to a running player.
    type Player;

    /// `true` when the medium is plugged in.
    fn probe(&self) -> bool;

    /// Mount the medium read-only. `false` on failure or timeout.
    fn mount(&mut self) -> bool;

    /// Force-unmount the medium. `false` on failure or timeout.
    fn unmount(&mut self) -> bool;

    /// Playable files on the mounted medium, sorted.
    fn media_files(&self) -> Vec<PathBuf>;

    /// Start the player on `files`.
    fn launch(&mut self, files: &[PathBuf]) -> Result<Self::Player, MediaError>;

    /// `true` once the player process is gone.
    fn has_exited(&mut self, player: &mut Self::Player) -> bool;

    /// Send key text to the player's control channel without blocking.
    fn write(&mut self, player: &mut Self::Player, text: &str) -> Result<(), MediaError>;

    /// Stop the player and reap it.
    fn terminate(&mut self, player: Self::Player);
}
