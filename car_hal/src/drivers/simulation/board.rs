//! Shared pin state of the simulated board.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct BoardState {
    /// Logical input state per pin, `true` = pressed.
    inputs: HashMap<u16, bool>,
    /// Last driven level per output pin.
    outputs: HashMap<u16, bool>,
}

/// Cloneable handle to the simulated pins.
///
/// Every clone observes the same state: the driver hands port handles to
/// the components while tests keep a clone to press buttons and inspect
/// LEDs.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBoard {
    state: Arc<Mutex<BoardState>>,
}

impl SimulatedBoard {
    /// Empty board, every input released and no output claimed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical state of an input pin.
    pub fn set_pressed(&self, pin: u16, pressed: bool) {
        let previous = self.state.lock().inputs.insert(pin, pressed);
        if previous != Some(pressed) {
            debug!("Simulated pin {} {}", pin, if pressed { "pressed" } else { "released" });
        }
    }

    /// Press the button on `pin`.
    pub fn press(&self, pin: u16) {
        self.set_pressed(pin, true);
    }

    /// Release the button on `pin`.
    pub fn release(&self, pin: u16) {
        self.set_pressed(pin, false);
    }

    /// Logical state of an input pin; unknown pins read released.
    pub fn is_pressed(&self, pin: u16) -> bool {
        self.state.lock().inputs.get(&pin).copied().unwrap_or(false)
    }

    /// Level last driven on an output pin, `None` if never claimed.
    pub fn output(&self, pin: u16) -> Option<bool> {
        self.state.lock().outputs.get(&pin).copied()
    }

    pub(super) fn claim_input(&self, pin: u16) {
        self.state.lock().inputs.entry(pin).or_insert(false);
    }

    pub(super) fn drive(&self, pin: u16, on: bool) {
        let previous = self.state.lock().outputs.insert(pin, on);
        if previous != Some(on) {
            trace!("Simulated output {} -> {}", pin, on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let board = SimulatedBoard::new();
        let other = board.clone();

        assert!(!other.is_pressed(4));
        board.press(4);
        assert!(other.is_pressed(4));
        other.release(4);
        assert!(!board.is_pressed(4));
    }

    #[test]
    fn outputs_unknown_until_driven() {
        let board = SimulatedBoard::new();
        assert_eq!(board.output(24), None);
        board.drive(24, true);
        assert_eq!(board.output(24), Some(true));
    }
}
