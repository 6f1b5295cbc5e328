//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load the console's TOML
//! configuration. Every section is optional: omitted values fall back to
//! the reference installation constants in [`crate::consts`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use car_common::config::{ConfigError, ConsoleConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = ConsoleConfig::load_or_default(Some(Path::new("console.toml")))?;
//!     println!("Ticking at {} Hz", config.simulation.frequency_hz);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::consts::{
    DEFAULT_COMMAND_TIMEOUT_MS, DEFAULT_MEDIA_DEVICE, DEFAULT_MOUNT_DIR, DEFAULT_PLAYER,
    DEFAULT_SERVICE_NAME, DEFAULT_SIMULATION_FREQUENCY_HZ, DEFAULT_SOUNDS_DIR,
};
use crate::io::config::IoConfig;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl LogLevel {
    /// Raise verbosity by `steps` levels, saturating at [`LogLevel::Trace`].
    ///
    /// Used for the repeatable `-v` flag.
    pub fn raised(self, steps: u8) -> Self {
        let mut level = self;
        for _ in 0..steps {
            level = match level {
                Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
        }
        level
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

/// Common configuration fields.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "garage-console"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Instance identifier used in logs.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: default_service_name(),
        }
    }
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulation loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Target ticks per second.
    pub frequency_hz: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_SIMULATION_FREQUENCY_HZ,
        }
    }
}

/// Removable media and external player settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Block device probed for presence and mounted read-only.
    pub device: PathBuf,
    /// Local mount point.
    pub mount_dir: PathBuf,
    /// Player binary, fed key presses on stdin.
    pub player: PathBuf,
    /// Bound for mount/umount and for stopping the player [ms].
    pub command_timeout_ms: u64,
    /// Prefix mount/umount with `sudo`.
    pub use_sudo: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_MEDIA_DEVICE),
            mount_dir: PathBuf::from(DEFAULT_MOUNT_DIR),
            player: PathBuf::from(DEFAULT_PLAYER),
            command_timeout_ms: DEFAULT_COMMAND_TIMEOUT_MS,
            use_sudo: true,
        }
    }
}

impl MediaConfig {
    /// Command timeout as `Duration`.
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

/// Audio asset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Directory containing `samples/` and `loops/`.
    pub sounds_dir: PathBuf,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sounds_dir: PathBuf::from(DEFAULT_SOUNDS_DIR),
        }
    }
}

/// Complete console configuration.
///
/// # TOML Example
///
/// ```toml
/// [simulation]
/// frequency_hz = 50
///
/// [media]
/// mount_dir = "media"
/// use_sudo = false
///
/// [[io.points]]
/// role = "HornButton"
/// type = "input"
/// pin = 4
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Logging and naming.
    pub shared: SharedConfig,
    /// Loop pacing.
    pub simulation: SimulationConfig,
    /// Pin assignment.
    pub io: IoConfig,
    /// Removable media.
    pub media: MediaConfig,
    /// Audio assets.
    pub audio: AudioConfig,
}

impl ConsoleConfig {
    /// Load from `path` when given, otherwise use the defaults, then validate.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    ///
    /// Pin-level checks live in the I/O registry, which has the role tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.simulation.frequency_hz == 0 {
            return Err(ConfigError::ValidationError(
                "simulation.frequency_hz must be > 0".to_string(),
            ));
        }
        if self.media.command_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "media.command_timeout_ms must be > 0".to_string(),
            ));
        }
        if self.media.device.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "media.device cannot be empty".to_string(),
            ));
        }
        if self.media.player.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "media.player cannot be empty".to_string(),
            ));
        }
        if self.io.points.is_empty() {
            return Err(ConfigError::ValidationError(
                "io.points cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// Blanket-implemented for every `serde::de::DeserializeOwned` type.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_log_level_deserialization() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct TestWrapper {
            level: LogLevel,
        }

        for (text, level) in [
            ("trace", LogLevel::Trace),
            ("debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("warn", LogLevel::Warn),
            ("error", LogLevel::Error),
        ] {
            let parsed: TestWrapper = toml::from_str(&format!("level = \"{text}\"")).unwrap();
            assert_eq!(parsed.level, level);
        }
    }

    #[test]
    fn test_log_level_raised_saturates() {
        assert_eq!(LogLevel::Info.raised(0), LogLevel::Info);
        assert_eq!(LogLevel::Info.raised(1), LogLevel::Debug);
        assert_eq!(LogLevel::Info.raised(2), LogLevel::Trace);
        assert_eq!(LogLevel::Info.raised(9), LogLevel::Trace);
        assert_eq!(LogLevel::Error.raised(1), LogLevel::Warn);
    }

    #[test]
    fn test_shared_config_validation_empty_service_name() {
        let config = SharedConfig {
            log_level: LogLevel::Info,
            service_name: String::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_defaults_match_reference_installation() {
        let config = ConsoleConfig::default();
        assert_eq!(config.simulation.frequency_hz, 50);
        assert_eq!(config.media.mount_dir, PathBuf::from("media"));
        assert_eq!(config.media.command_timeout(), Duration::from_secs(1));
        assert_eq!(config.audio.sounds_dir, PathBuf::from("sounds"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = ConsoleConfig::load_or_default(None).unwrap();
        assert_eq!(config.shared.service_name, "car_console");
    }

    #[test]
    fn test_config_loader_file_not_found() {
        let result = ConsoleConfig::load(Path::new("/nonexistent/path/console.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound)));
    }

    #[test]
    fn test_config_loader_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        let result = ConsoleConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[shared]
log_level = "debug"

[simulation]
frequency_hz = 100

[media]
use_sudo = false
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = ConsoleConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.shared.log_level, LogLevel::Debug);
        assert_eq!(config.shared.service_name, "car_console");
        assert_eq!(config.simulation.frequency_hz, 100);
        assert!(!config.media.use_sudo);
        assert_eq!(config.media.player, PathBuf::from("/usr/bin/mplayer"));
        assert!(!config.io.points.is_empty());
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[simulation]\nfrequency_hz = 0\n").unwrap();
        file.flush().unwrap();

        let result = ConsoleConfig::load_or_default(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
