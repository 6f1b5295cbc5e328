//! Shared test doubles and a fully wired console.

use car_common::io::config::IoConfig;
use car_common::io::registry::IoRegistry;
use car_console::audio::{AudioOutput, Sound};
use car_console::media::{MediaError, MediaSubsystem};
use car_console::{Car, TickAudio, build_car};
use car_hal::{HalCore, SimulatedBoard, SimulationDriver};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

// Reference wiring.
pub const TURN_LEFT: u16 = 2;
pub const HORN: u16 = 4;
pub const EMERGENCY: u16 = 17;
pub const EMERGENCY_LIGHT: u16 = 27;
pub const STARTER: u16 = 22;
pub const MUSIC_PLAY: u16 = 9;
pub const MUSIC_FORWARD: u16 = 11;
pub const GEAR_1: u16 = 0;
pub const GEAR_2: u16 = 5;

pub const RELAY: u16 = 14;
pub const TURN_LEFT_LED: u16 = 15;
pub const TURN_RIGHT_LED: u16 = 18;
pub const RUNNABLE_LED: u16 = 23;
pub const RUNNING_LED: u16 = 24;

#[derive(Debug, Default)]
pub struct MediaState {
    pub present: bool,
    pub mount_ok: bool,
    pub running: Vec<u32>,
    pub launches: u32,
    pub written: Vec<String>,
}

/// Media double whose state stays reachable after the car owns it.
#[derive(Clone, Default)]
pub struct FakeMedia(pub Arc<Mutex<MediaState>>);

impl FakeMedia {
    pub fn insert(&self) {
        let mut state = self.0.lock();
        state.present = true;
        state.mount_ok = true;
    }

    pub fn eject(&self) {
        self.0.lock().present = false;
    }
}

impl MediaSubsystem for FakeMedia {
    type Player = u32;

    fn probe(&self) -> bool {
        self.0.lock().present
    }

    fn mount(&mut self) -> bool {
        self.0.lock().mount_ok
    }

    fn unmount(&mut self) -> bool {
        true
    }

    fn media_files(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("media/track.ogg")]
    }

    fn launch(&mut self, _files: &[PathBuf]) -> Result<u32, MediaError> {
        let mut state = self.0.lock();
        state.launches += 1;
        let id = state.launches;
        state.running.push(id);
        Ok(id)
    }

    fn has_exited(&mut self, player: &mut u32) -> bool {
        !self.0.lock().running.contains(player)
    }

    fn write(&mut self, _player: &mut u32, text: &str) -> Result<(), MediaError> {
        self.0.lock().written.push(text.to_string());
        Ok(())
    }

    fn terminate(&mut self, player: u32) {
        self.0.lock().running.retain(|p| *p != player);
    }
}

#[derive(Debug, Default)]
pub struct AudioLog {
    pub played: Vec<Sound>,
    pub loop_changes: Vec<Sound>,
    current: Option<Sound>,
}

/// Audio double recording what the loop dispatched.
#[derive(Clone, Default)]
pub struct RecordingAudio(pub Arc<Mutex<AudioLog>>);

impl AudioOutput for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.0.lock().played.push(sound);
    }

    fn set_loop(&mut self, sound: Sound) {
        let mut log = self.0.lock();
        if log.current != Some(sound) {
            log.current = Some(sound);
            log.loop_changes.push(sound);
        }
    }
}

/// The complete console on a simulated board.
pub struct Console {
    pub car: Car,
    pub board: SimulatedBoard,
    pub media: FakeMedia,
    pub audio: RecordingAudio,
}

impl Console {
    pub fn new() -> Self {
        let driver = SimulationDriver::new();
        let board = driver.board();
        let registry = IoRegistry::from_config(&IoConfig::default()).unwrap();
        let mut hal = HalCore::new(registry, Box::new(driver));

        let media = FakeMedia::default();
        let audio = RecordingAudio::default();
        let car = build_car(&mut hal, media.clone(), Box::new(audio.clone()), 50).unwrap();
        Self {
            car,
            board,
            media,
            audio,
        }
    }

    pub fn step(&mut self, now: f64) -> TickAudio {
        self.car.step(now)
    }

    pub fn led(&self, pin: u16) -> bool {
        self.board.output(pin) == Some(true)
    }
}
