//! Prelude module for common re-exports.
//!
//! ```rust
//! use car_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, ConsoleConfig, LogLevel};

// ─── Digital ports ──────────────────────────────────────────────────
pub use crate::hal::driver::{GpioDriver, HalError};
pub use crate::hal::port::{DigitalInput, DigitalOutput, InputHandle, OutputHandle};

// ─── I/O ────────────────────────────────────────────────────────────
pub use crate::io::registry::IoRegistry;
pub use crate::io::role::{InputLogic, IoRole};
