//! Engine with starter and six-button gearbox.
//!
//! # States
//!
//! ```text
//!            starter, gear N, lockout over
//!   ┌─────┐ ─────────────────────────────► ┌─────────┐
//!   │ OFF │                                │ RUNNING │
//!   └─────┘ ◄───────────────────────────── └─────────┘
//!      ▲      starter held 2s (engine-stop)     │
//!      │      illegal shift (engine-wrong-gear) │
//!      └── starter in gear: grind, stay OFF     │
//! ```
//!
//! Every stop starts a 5 s lockout during which the starter is ignored and
//! the indicator is dark. After the lockout the indicator blinks, lit
//! during two of every three half-second slots, until the engine starts.
//!
//! # Shifting
//!
//! Gears are ordered 1 < 2 < 3 < 4 < 5 < R. Entering a gear more than 4 s
//! after the lever last came back to neutral is a fresh start and only
//! 1 or R are legal. Otherwise the new gear must be one step away from
//! the last engaged gear (shift up / shift down) or that same gear.
//! Anything else stalls the engine.

use crate::audio::Sound;
use crate::component::{AudioRequest, Component, ComponentKind};
use car_common::hal::port::{InputHandle, OutputHandle};
use std::fmt;
use tracing::debug;

/// Seconds after passing neutral during which a shift counts as relative
/// to the last engaged gear.
pub const FRESH_START_WINDOW: f64 = 4.0;

/// Seconds the starter must be held while running to stop the engine.
pub const STARTER_STOP_DELAY: f64 = 2.0;

/// Seconds after a stop during which the starter is ignored.
pub const RESTART_LOCKOUT: f64 = 5.0;

/// Gearbox position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gear {
    One,
    Two,
    Three,
    Four,
    Five,
    Reverse,
    Neutral,
}

impl Gear {
    /// Every position, neutral last.
    pub const ALL: [Gear; 7] = [
        Gear::One,
        Gear::Two,
        Gear::Three,
        Gear::Four,
        Gear::Five,
        Gear::Reverse,
        Gear::Neutral,
    ];

    /// Engaged gears in button scan order.
    pub const ENGAGED: [Gear; 6] = [
        Gear::One,
        Gear::Two,
        Gear::Three,
        Gear::Four,
        Gear::Five,
        Gear::Reverse,
    ];

    /// Position in the 1 < 2 < 3 < 4 < 5 < R order; `None` for neutral.
    pub fn rank(self) -> Option<i8> {
        match self {
            Gear::One => Some(1),
            Gear::Two => Some(2),
            Gear::Three => Some(3),
            Gear::Four => Some(4),
            Gear::Five => Some(5),
            Gear::Reverse => Some(6),
            Gear::Neutral => None,
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gear::One => "1",
            Gear::Two => "2",
            Gear::Three => "3",
            Gear::Four => "4",
            Gear::Five => "5",
            Gear::Reverse => "R",
            Gear::Neutral => "N",
        };
        f.write_str(s)
    }
}

/// Engine state machine.
pub struct Engine {
    starter: InputHandle,
    /// Gear buttons in [`Gear::ENGAGED`] order.
    gears: [InputHandle; 6],
    led: OutputHandle,

    running: bool,
    stop_time: f64,
    /// Start of the current starter press; restarted when the engine starts.
    starter_since: Option<f64>,
    last_gear: Gear,
    /// Last engaged (non-neutral) gear.
    last_engaged: Gear,
    to_neutral_time: f64,

    audio: AudioRequest,
}

impl Engine {
    /// `gears` are the buttons for 1, 2, 3, 4, 5 and R.
    pub fn new(starter: InputHandle, mut led: OutputHandle, gears: [InputHandle; 6]) -> Self {
        led.set(false);
        Self {
            starter,
            gears,
            led,
            running: false,
            stop_time: 0.0,
            starter_since: None,
            last_gear: Gear::Neutral,
            last_engaged: Gear::One,
            to_neutral_time: 0.0,
            audio: AudioRequest::NONE,
        }
    }

    /// `true` while running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// First pressed gear button; neutral when none is.
    fn read_gear(&self) -> Gear {
        Gear::ENGAGED
            .into_iter()
            .zip(&self.gears)
            .find(|(_, button)| button.is_pressed())
            .map_or(Gear::Neutral, |(gear, _)| gear)
    }

    fn start(&mut self, now: f64) {
        debug!("Engine started");
        self.starter_since = Some(now);
        self.running = true;
        self.audio.one_shot = Some(Sound::EngineStart);
    }

    fn stop(&mut self, now: f64, grind: bool) {
        debug!("Engine stopped{}", if grind { " (wrong gear)" } else { "" });
        self.stop_time = now;
        self.running = false;
        self.audio.clear();
        self.audio.one_shot = Some(if grind {
            Sound::EngineWrongGear
        } else {
            Sound::EngineStop
        });
    }

    /// React to the lever entering `gear` while running.
    fn shift(&mut self, now: f64, gear: Gear) {
        if self.to_neutral_time < now - FRESH_START_WINDOW {
            if matches!(gear, Gear::One | Gear::Reverse) {
                self.audio.one_shot = Some(Sound::EngineShiftUp);
            } else {
                self.stop(now, true);
            }
            return;
        }

        let step = match (gear.rank(), self.last_engaged.rank()) {
            (Some(new), Some(old)) => new - old,
            _ => 0,
        };
        match step {
            1 => self.audio.one_shot = Some(Sound::EngineShiftUp),
            -1 => self.audio.one_shot = Some(Sound::EngineShiftDown),
            0 => {}
            _ => self.stop(now, true),
        }
    }

    fn step_running(&mut self, now: f64, gear: Gear) {
        self.audio.loop_track = Some(Sound::EngineGear(gear));

        if gear != self.last_gear && gear != Gear::Neutral {
            self.shift(now, gear);
        }

        let held_long = self
            .starter_since
            .is_some_and(|since| now - since > STARTER_STOP_DELAY);
        if self.running && held_long {
            self.stop(now, false);
        }

        self.led.set(true);
    }

    fn step_off(&mut self, now: f64, gear: Gear) {
        if self.stop_time < now - RESTART_LOCKOUT {
            if self.starter.is_pressed() {
                if gear == Gear::Neutral {
                    self.start(now);
                } else {
                    self.stop(now, true);
                }
            }
            self.led.set(((now * 2.0).floor() as i64).rem_euclid(3) != 0);
        } else {
            self.led.set(false);
        }
    }
}

impl Component for Engine {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Engine
    }

    fn step(&mut self, now: f64) {
        self.audio.clear();
        let gear = self.read_gear();
        if self.starter.is_pressed() {
            self.starter_since.get_or_insert(now);
        } else {
            self.starter_since = None;
        }

        if self.running {
            self.step_running(now, gear);
        } else {
            self.step_off(now, gear);
        }

        if self.last_gear != Gear::Neutral && gear == Gear::Neutral {
            self.to_neutral_time = now;
        }
        self.last_gear = gear;
        if gear != Gear::Neutral {
            self.last_engaged = gear;
        }
    }

    fn audio(&self) -> AudioRequest {
        self.audio
    }
}
