//! Logical sound names.
//!
//! The textual form of a [`Sound`] is the asset file stem: one-shots live
//! in `samples/<name>.<ext>`, loops in `loops/<name>.wav`.

use crate::components::engine::Gear;
use std::fmt;

/// Every sound the console can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Horn,
    Siren,
    TurnSignal,
    EngineStart,
    EngineStop,
    EngineWrongGear,
    EngineShiftUp,
    EngineShiftDown,
    /// Engine running in the given gear (neutral included).
    EngineGear(Gear),
    MediaInject,
    MediaEject,
    /// Idle loop.
    Silence,
}

impl Sound {
    /// Sounds played as one-shot samples.
    pub const ONE_SHOTS: [Sound; 8] = [
        Sound::TurnSignal,
        Sound::EngineStart,
        Sound::EngineStop,
        Sound::EngineWrongGear,
        Sound::EngineShiftUp,
        Sound::EngineShiftDown,
        Sound::MediaInject,
        Sound::MediaEject,
    ];

    /// Sounds played as continuous loops.
    pub fn loops() -> impl Iterator<Item = Sound> {
        [Sound::Horn, Sound::Siren, Sound::Silence]
            .into_iter()
            .chain(Gear::ALL.into_iter().map(Sound::EngineGear))
    }

    /// `true` for loop tracks.
    pub fn is_loop(self) -> bool {
        matches!(
            self,
            Sound::Horn | Sound::Siren | Sound::Silence | Sound::EngineGear(_)
        )
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horn => write!(f, "horn"),
            Self::Siren => write!(f, "siren"),
            Self::TurnSignal => write!(f, "turn-signal"),
            Self::EngineStart => write!(f, "engine-start"),
            Self::EngineStop => write!(f, "engine-stop"),
            Self::EngineWrongGear => write!(f, "engine-wrong-gear"),
            Self::EngineShiftUp => write!(f, "engine-shift-up"),
            Self::EngineShiftDown => write!(f, "engine-shift-down"),
            Self::EngineGear(gear) => write!(f, "engine-gear-{gear}"),
            Self::MediaInject => write!(f, "media-inject"),
            Self::MediaEject => write!(f, "media-eject"),
            Self::Silence => write!(f, "silence"),
        }
    }
}
