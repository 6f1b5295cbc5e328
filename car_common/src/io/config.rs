//! I/O configuration structs.
//!
//! Deserialized from the `[io]` section of the console configuration.
//! When the section is omitted the reference board's wiring is used.

use serde::{Deserialize, Serialize};

use super::role::{InputLogic, IoPointType, IoRole};

// ─── IoPoint ────────────────────────────────────────────────────────

/// A single I/O point definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoPoint {
    /// Functional role.
    pub role: IoRole,

    /// Direction.
    #[serde(rename = "type")]
    pub io_type: IoPointType,

    /// BCM GPIO number.
    pub pin: u16,

    /// Input logic override. Default: `IoConfig::default_logic`.
    #[serde(default)]
    pub logic: Option<InputLogic>,
}

impl IoPoint {
    /// Input point with the section's default logic.
    pub const fn input(role: IoRole, pin: u16) -> Self {
        Self {
            role,
            io_type: IoPointType::Input,
            pin,
            logic: None,
        }
    }

    /// Output point.
    pub const fn output(role: IoRole, pin: u16) -> Self {
        Self {
            role,
            io_type: IoPointType::Output,
            pin,
            logic: None,
        }
    }
}

// ─── IoConfig ───────────────────────────────────────────────────────

/// Top-level `[io]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Logic applied to inputs that do not override it.
    pub default_logic: InputLogic,

    /// All wired points.
    pub points: Vec<IoPoint>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            default_logic: InputLogic::ActiveLow,
            points: reference_points(),
        }
    }
}

/// Wiring of the reference board.
pub fn reference_points() -> Vec<IoPoint> {
    vec![
        IoPoint::input(IoRole::TurnSignalLeftButton, 2),
        IoPoint::input(IoRole::TurnSignalRightButton, 3),
        IoPoint::input(IoRole::HornButton, 4),
        IoPoint::input(IoRole::EmergencyButton, 17),
        IoPoint::input(IoRole::EmergencyLightButton, 27),
        IoPoint::input(IoRole::StarterButton, 22),
        IoPoint::output(IoRole::EmergencyLightRelay, 14),
        IoPoint::output(IoRole::TurnSignalLeftLed, 15),
        IoPoint::output(IoRole::TurnSignalRightLed, 18),
        IoPoint::output(IoRole::EngineRunnableLed, 23),
        IoPoint::output(IoRole::EngineRunningLed, 24),
        IoPoint::input(IoRole::MusicBackButton, 10),
        IoPoint::input(IoRole::MusicPlayButton, 9),
        IoPoint::input(IoRole::MusicForwardButton, 11),
        IoPoint::input(IoRole::GearButton(1), 0),
        IoPoint::input(IoRole::GearButton(2), 5),
        IoPoint::input(IoRole::GearButton(3), 6),
        IoPoint::input(IoRole::GearButton(4), 13),
        IoPoint::input(IoRole::GearButton(5), 19),
        IoPoint::input(IoRole::GearButtonR, 26),
    ]
}
