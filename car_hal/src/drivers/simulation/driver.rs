//! `GpioDriver` implementation over a [`SimulatedBoard`].

use super::board::SimulatedBoard;
use car_common::hal::driver::{GpioDriver, HalError};
use car_common::hal::port::{DigitalInput, DigitalOutput, InputHandle, OutputHandle};
use car_common::io::role::InputLogic;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Driver whose pins live in memory.
pub struct SimulationDriver {
    board: SimulatedBoard,
    claimed_outputs: HashSet<u16>,
}

impl SimulationDriver {
    /// Driver on a fresh board.
    pub fn new() -> Self {
        Self::with_board(SimulatedBoard::new())
    }

    /// Driver on an existing board, so the caller keeps a handle to it.
    pub fn with_board(board: SimulatedBoard) -> Self {
        debug!("Simulation driver initialized");
        Self {
            board,
            claimed_outputs: HashSet::new(),
        }
    }

    /// Handle to the board behind this driver.
    pub fn board(&self) -> SimulatedBoard {
        self.board.clone()
    }
}

impl Default for SimulationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioDriver for SimulationDriver {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn open_input(&mut self, pin: u16, _logic: InputLogic) -> Result<InputHandle, HalError> {
        self.board.claim_input(pin);
        Ok(Arc::new(SimInput {
            pin,
            board: self.board.clone(),
        }))
    }

    fn open_output(&mut self, pin: u16) -> Result<OutputHandle, HalError> {
        if !self.claimed_outputs.insert(pin) {
            return Err(HalError::PinUnavailable {
                pin,
                reason: "output already claimed".to_string(),
            });
        }
        self.board.drive(pin, false);
        Ok(Box::new(SimOutput {
            pin,
            board: self.board.clone(),
        }))
    }
}

/// Factory for the driver registry.
pub fn create_driver() -> Box<dyn GpioDriver> {
    Box::new(SimulationDriver::new())
}

struct SimInput {
    pin: u16,
    board: SimulatedBoard,
}

impl DigitalInput for SimInput {
    fn is_pressed(&self) -> bool {
        self.board.is_pressed(self.pin)
    }
}

struct SimOutput {
    pin: u16,
    board: SimulatedBoard,
}

impl DigitalOutput for SimOutput {
    fn set(&mut self, on: bool) {
        self.board.drive(self.pin, on);
    }
}
