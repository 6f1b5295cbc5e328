//! Startup errors of the console binary.

use crate::audio::AudioError;
use crate::media::MediaError;
use car_common::config::ConfigError;
use car_common::hal::driver::HalError;
use car_common::io::registry::IoConfigError;
use thiserror::Error;

/// Anything that keeps the console from entering its main loop.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The executable's directory could not be determined or entered.
    #[error("cannot enter install directory: {0}")]
    InstallDir(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid I/O table: {0}")]
    Io(#[from] IoConfigError),

    #[error(transparent)]
    Hal(#[from] HalError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error(transparent)]
    Audio(#[from] AudioError),
}
