//! I/O Role types.
//!
//! `IoRole` maps a string like `"GearButton3"` to a typed enum variant.
//! Components are wired by functional role rather than pin number, so a
//! rewired board only needs a new `[[io.points]]` table.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

// ─── IoPointType ────────────────────────────────────────────────────

/// I/O point direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IoPointType {
    Input,
    Output,
}

impl fmt::Display for IoPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

// ─── InputLogic ─────────────────────────────────────────────────────

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputLogic {
    /// Button pulls the line to ground against a pull-up.
    #[default]
    ActiveLow,
    /// Button drives the line high.
    ActiveHigh,
}

impl InputLogic {
    /// Interpret a raw pin level.
    #[inline]
    pub fn is_active(self, level_high: bool) -> bool {
        match self {
            Self::ActiveLow => !level_high,
            Self::ActiveHigh => level_high,
        }
    }
}

// ─── IoRole ─────────────────────────────────────────────────────────

/// Functional role of a console pin.
///
/// Forward gears carry their number (1-5); reverse has its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IoRole {
    // ── Buttons ─────────────────────
    TurnSignalLeftButton,
    TurnSignalRightButton,
    HornButton,
    EmergencyButton,
    EmergencyLightButton,
    StarterButton,
    MusicBackButton,
    MusicPlayButton,
    MusicForwardButton,
    GearButton(u8),
    GearButtonR,

    // ── Indicators / relays ─────────
    EmergencyLightRelay,
    TurnSignalLeftLed,
    TurnSignalRightLed,
    EngineRunnableLed,
    EngineRunningLed,
}

impl IoRole {
    /// Every role the console wires up, inputs first.
    pub const ALL: [IoRole; 20] = [
        Self::TurnSignalLeftButton,
        Self::TurnSignalRightButton,
        Self::HornButton,
        Self::EmergencyButton,
        Self::EmergencyLightButton,
        Self::StarterButton,
        Self::MusicBackButton,
        Self::MusicPlayButton,
        Self::MusicForwardButton,
        Self::GearButton(1),
        Self::GearButton(2),
        Self::GearButton(3),
        Self::GearButton(4),
        Self::GearButton(5),
        Self::GearButtonR,
        Self::EmergencyLightRelay,
        Self::TurnSignalLeftLed,
        Self::TurnSignalRightLed,
        Self::EngineRunnableLed,
        Self::EngineRunningLed,
    ];

    /// Direction this role must be wired as.
    pub fn expected_io_type(&self) -> IoPointType {
        match self {
            Self::EmergencyLightRelay
            | Self::TurnSignalLeftLed
            | Self::TurnSignalRightLed
            | Self::EngineRunnableLed
            | Self::EngineRunningLed => IoPointType::Output,
            _ => IoPointType::Input,
        }
    }
}

// ─── Role Parser ────────────────────────────────────────────────────

/// Split a role string into (prefix, optional trailing number).
///
/// `"GearButton3"` → `("GearButton", Some(3))`
/// `"HornButton"`  → `("HornButton", None)`
fn split_role_str(s: &str) -> (&str, Option<u8>) {
    let digit_start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);

    match digit_start {
        Some(i) if i > 0 => match s[i..].parse::<u8>() {
            Ok(n) => (&s[..i], Some(n)),
            Err(_) => (s, None),
        },
        _ => (s, None),
    }
}

impl FromStr for IoRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, number) = split_role_str(s);

        if let Some(n) = number {
            return match prefix {
                "GearButton" if (1..=5).contains(&n) => Ok(Self::GearButton(n)),
                _ => Err(format!("unknown role: {s:?}")),
            };
        }

        match prefix {
            "TurnSignalLeftButton" => Ok(Self::TurnSignalLeftButton),
            "TurnSignalRightButton" => Ok(Self::TurnSignalRightButton),
            "HornButton" => Ok(Self::HornButton),
            "EmergencyButton" => Ok(Self::EmergencyButton),
            "EmergencyLightButton" => Ok(Self::EmergencyLightButton),
            "StarterButton" => Ok(Self::StarterButton),
            "MusicBackButton" => Ok(Self::MusicBackButton),
            "MusicPlayButton" => Ok(Self::MusicPlayButton),
            "MusicForwardButton" => Ok(Self::MusicForwardButton),
            "GearButtonR" => Ok(Self::GearButtonR),
            "EmergencyLightRelay" => Ok(Self::EmergencyLightRelay),
            "TurnSignalLeftLed" => Ok(Self::TurnSignalLeftLed),
            "TurnSignalRightLed" => Ok(Self::TurnSignalRightLed),
            "EngineRunnableLed" => Ok(Self::EngineRunnableLed),
            "EngineRunningLed" => Ok(Self::EngineRunningLed),
            _ => Err(format!("unknown role: {s:?}")),
        }
    }
}

impl TryFrom<String> for IoRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IoRole> for String {
    fn from(role: IoRole) -> Self {
        role.to_string()
    }
}

impl fmt::Display for IoRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnSignalLeftButton => write!(f, "TurnSignalLeftButton"),
            Self::TurnSignalRightButton => write!(f, "TurnSignalRightButton"),
            Self::HornButton => write!(f, "HornButton"),
            Self::EmergencyButton => write!(f, "EmergencyButton"),
            Self::EmergencyLightButton => write!(f, "EmergencyLightButton"),
            Self::StarterButton => write!(f, "StarterButton"),
            Self::MusicBackButton => write!(f, "MusicBackButton"),
            Self::MusicPlayButton => write!(f, "MusicPlayButton"),
            Self::MusicForwardButton => write!(f, "MusicForwardButton"),
            Self::GearButton(n) => write!(f, "GearButton{n}"),
            Self::GearButtonR => write!(f, "GearButtonR"),
            Self::EmergencyLightRelay => write!(f, "EmergencyLightRelay"),
            Self::TurnSignalLeftLed => write!(f, "TurnSignalLeftLed"),
            Self::TurnSignalRightLed => write!(f, "TurnSignalRightLed"),
            Self::EngineRunnableLed => write!(f, "EngineRunnableLed"),
            Self::EngineRunningLed => write!(f, "EngineRunningLed"),
        }
    }
}
