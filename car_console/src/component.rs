//! The component contract and the registration order.
//!
//! A component is a timed state machine advanced once per tick. Audio
//! requests live for exactly one tick: every component clears its
//! [`AudioRequest`] at the start of `step` before recomputing it.
//!
//! # Loop precedence
//!
//! Exactly one continuous track plays at a time. The loop walks the
//! components in [`REGISTRATION_ORDER`] and the *last* one that requests a
//! track wins; silence plays when none does. With the standard order the
//! horn overrides the radio, which overrides the emergency siren, which
//! overrides the engine.

use crate::audio::Sound;
use std::fmt;

/// Identity of a component, in the order the loop runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Battery,
    Engine,
    TurnSignalLeft,
    TurnSignalRight,
    EmergencyLight,
    Radio,
    Horn,
}

/// Order in which components are registered and stepped. Later entries
/// take precedence for the continuous loop.
pub const REGISTRATION_ORDER: [ComponentKind; 7] = [
    ComponentKind::Battery,
    ComponentKind::Engine,
    ComponentKind::TurnSignalLeft,
    ComponentKind::TurnSignalRight,
    ComponentKind::EmergencyLight,
    ComponentKind::Radio,
    ComponentKind::Horn,
];

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Sounds a component asks for during the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioRequest {
    /// Sample to play once.
    pub one_shot: Option<Sound>,
    /// Continuous track this component wants.
    pub loop_track: Option<Sound>,
}

impl AudioRequest {
    /// No request.
    pub const NONE: Self = Self {
        one_shot: None,
        loop_track: None,
    };

    /// Drop both requests.
    pub fn clear(&mut self) {
        *self = Self::NONE;
    }
}

/// A piece of the console advanced by the simulation loop.
pub trait Component {
    /// Which component this is.
    fn kind(&self) -> ComponentKind;

    /// Advance one tick. `now` is wall-clock seconds.
    ///
    /// Must be total: no input combination may panic or fail.
    fn step(&mut self, now: f64);

    /// Audio requested during the last `step`. Silent components keep
    /// the default.
    fn audio(&self) -> AudioRequest {
        AudioRequest::NONE
    }
}
