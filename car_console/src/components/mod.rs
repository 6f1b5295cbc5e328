//! Console components.
//!
//! - [`battery`] - ignition indicator
//! - [`engine`] - starter, gearbox and engine sounds
//! - [`turn_signal`] - blinkers (left and right share the emergency button)
//! - [`emergency_light`] - beacon relay and siren
//! - [`radio`] - removable media player
//! - [`horn`] - horn loop

pub mod battery;
pub mod emergency_light;
pub mod engine;
pub mod horn;
pub mod radio;
pub mod turn_signal;

pub use battery::Battery;
pub use emergency_light::EmergencyLight;
pub use engine::{Engine, Gear};
pub use horn::Horn;
pub use radio::Radio;
pub use turn_signal::TurnSignal;
