//! # Car Console
//!
//! Polls the console's buttons, drives its lamps and relays and layers
//! engine, siren, horn and radio audio, forever, at a fixed tick rate.
//!
//! # Module Structure
//!
//! - [`button`] - Click / long-press classification of one button
//! - [`keyboard`] - The radio's three-button keyboard
//! - [`component`] - Component contract and registration order
//! - [`components`] - Battery, engine, turn signals, emergency light, radio, horn
//! - [`car`] - Simulation loop, audio arbitration and pacing
//! - [`builder`] - Wires components to configured ports
//! - [`audio`] - Sound names and audio backends
//! - [`media`] - Removable media and the external player
//! - [`error`] - Startup errors
//!
//! # Tick
//!
//! ```text
//!  now ──► Battery ─► Engine ─► TurnSignal L ─► TurnSignal R ─► EmergencyLight ─► Radio ─► Horn
//!            │          │            │              │                │             │        │
//!            └──────────┴────────────┴──────────────┴────────────────┴─────────────┴────────┘
//!                                                 │
//!                          one-shots (in order) + last loop request
//!                                                 ▼
//!                                           AudioOutput
//! ```

pub mod audio;
pub mod builder;
pub mod button;
pub mod car;
pub mod component;
pub mod components;
pub mod error;
pub mod keyboard;
pub mod media;

pub use builder::build_car;
pub use car::{Car, CycleStats, TickAudio};
pub use component::{AudioRequest, Component, ComponentKind, REGISTRATION_ORDER};
pub use error::StartupError;
