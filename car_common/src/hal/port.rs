//! Digital port traits.
//!
//! Components never touch hardware directly: they are constructed with
//! port handles and only call these traits. Inputs are shared (one
//! emergency button feeds both turn signals), outputs are exclusive.

use std::sync::Arc;

/// A boolean input, already interpreted as "pressed" or not.
pub trait DigitalInput: Send + Sync {
    /// Current state. Implementations must not block and must not fail;
    /// a read error reads as "not pressed".
    fn is_pressed(&self) -> bool;
}

/// A boolean output (LED, relay).
pub trait DigitalOutput: Send {
    /// Drive the output.
    fn set(&mut self, on: bool);
}

/// Shared input handle.
pub type InputHandle = Arc<dyn DigitalInput>;

/// Exclusive output handle.
pub type OutputHandle = Box<dyn DigitalOutput>;
