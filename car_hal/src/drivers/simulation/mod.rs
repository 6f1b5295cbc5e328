//! Simulation driver.
//!
//! Replaces the GPIO header with an in-memory board. Inputs hold the
//! logical "pressed" state directly, so the configured [`InputLogic`]
//! does not apply. Tests and the `--simulate` console drive the board
//! through a shared [`SimulatedBoard`] handle.
//!
//! [`InputLogic`]: car_common::io::role::InputLogic

mod board;
mod driver;

pub use board::SimulatedBoard;
pub use driver::{SimulationDriver, create_driver};
