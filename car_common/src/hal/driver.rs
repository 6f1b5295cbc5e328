//! GPIO driver trait and error types.
//!
//! This module defines:
//! - `GpioDriver` trait - Interface for pluggable GPIO backends
//! - `HalError` enum - Error types for port operations
//! - `DriverFactory` type alias - Factory function type

use super::port::{InputHandle, OutputHandle};
use crate::io::role::InputLogic;
use thiserror::Error;

/// Error types for HAL operations.
#[derive(Debug, Clone, Error)]
pub enum HalError {
    /// No driver registered under the requested name
    #[error("Unknown GPIO driver '{name}' (available: {available})")]
    DriverNotFound {
        /// Requested name.
        name: String,
        /// Registered names, comma separated.
        available: String,
    },

    /// A pin could not be claimed or configured
    #[error("Pin {pin} unavailable: {reason}")]
    PinUnavailable {
        /// BCM GPIO number.
        pin: u16,
        /// Underlying cause.
        reason: String,
    },

    /// A role has no binding in the I/O registry
    #[error("No pin bound to role {0}")]
    RoleUnbound(String),

    /// An output handle was requested twice
    #[error("Output for role {0} already taken")]
    OutputTaken(String),
}

/// Factory function type for creating driver instances.
pub type DriverFactory = fn() -> Box<dyn GpioDriver>;

/// Trait defining the interface for GPIO drivers.
///
/// # Lifecycle
///
/// 1. `open_input()` / `open_output()` - Called once per pin at startup
/// 2. Handles are then polled/driven from the simulation loop
///
/// Opening is allowed to block briefly (pin export); handle operations
/// are not.
pub trait GpioDriver: Send {
    /// Returns the driver's unique identifier (e.g., "sysfs", "simulation").
    fn name(&self) -> &'static str;

    /// Claim `pin` as an input interpreted with `logic`.
    fn open_input(&mut self, pin: u16, logic: InputLogic) -> Result<InputHandle, HalError>;

    /// Claim `pin` as an output, initially off.
    fn open_output(&mut self, pin: u16) -> Result<OutputHandle, HalError>;
}
