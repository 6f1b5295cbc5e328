//! rodio backend.
//!
//! One-shot samples are decoded once at startup and kept in memory; each
//! `play` mixes a fresh copy into the output. The loop track is streamed
//! from disk through its own sink, replaced whenever the track changes.

use super::{AudioError, AudioOutput, LOOPS_DIR, SAMPLES_DIR, Sound};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

type Sample = Buffered<Decoder<BufReader<File>>>;

/// Audio output on the default sound device.
pub struct RodioAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    samples: HashMap<String, Sample>,
    loops_dir: PathBuf,
    loop_sink: Option<Sink>,
    current_loop: Sound,
}

impl RodioAudio {
    /// Open the default device and load the assets under `sounds_dir`.
    ///
    /// # Errors
    /// Fails if the device cannot be opened, a sample cannot be decoded,
    /// or any one-shot or loop the console uses has no asset.
    pub fn new(sounds_dir: &Path) -> Result<Self, AudioError> {
        let samples = load_samples(&sounds_dir.join(SAMPLES_DIR))?;
        for sound in Sound::ONE_SHOTS {
            if !samples.contains_key(&sound.to_string()) {
                return Err(AudioError::MissingAsset(
                    sounds_dir.join(SAMPLES_DIR).join(sound.to_string()),
                ));
            }
        }

        let loops_dir = sounds_dir.join(LOOPS_DIR);
        for sound in Sound::loops() {
            let path = loop_path(&loops_dir, sound);
            if !path.is_file() {
                return Err(AudioError::MissingAsset(path));
            }
        }

        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;

        info!("Audio ready: {} samples loaded", samples.len());
        Ok(Self {
            _stream: stream,
            handle,
            samples,
            loops_dir,
            loop_sink: None,
            current_loop: Sound::Silence,
        })
    }

    fn start_loop(&mut self, sound: Sound) -> Result<(), String> {
        let path = loop_path(&self.loops_dir, sound);
        let file = File::open(&path).map_err(|e| format!("{}: {e}", path.display()))?;
        let source = Decoder::new_looped(BufReader::new(file))
            .map_err(|e| format!("{}: {e}", path.display()))?;
        let sink = Sink::try_new(&self.handle).map_err(|e| e.to_string())?;
        sink.append(source);
        // Dropping the previous sink stops the old track.
        self.loop_sink = Some(sink);
        Ok(())
    }
}

impl AudioOutput for RodioAudio {
    fn play(&mut self, sound: Sound) {
        debug!("Playing sample {}", sound);
        match self.samples.get(&sound.to_string()) {
            Some(sample) => {
                if let Err(e) = self.handle.play_raw(sample.clone().convert_samples::<f32>()) {
                    warn!("Cannot play sample {}: {}", sound, e);
                }
            }
            None => warn!("No sample loaded for {}", sound),
        }
    }

    fn set_loop(&mut self, sound: Sound) {
        if sound == self.current_loop {
            return;
        }
        debug!("Playing loop {}", sound);
        self.current_loop = sound;
        if let Err(e) = self.start_loop(sound) {
            warn!("Cannot start loop {}: {}", sound, e);
            self.loop_sink = None;
        }
    }
}

fn loop_path(loops_dir: &Path, sound: Sound) -> PathBuf {
    loops_dir.join(format!("{sound}.wav"))
}

/// Decode every file in `dir`, keyed by file stem.
fn load_samples(dir: &Path) -> Result<HashMap<String, Sample>, AudioError> {
    let entries = fs::read_dir(dir).map_err(|e| AudioError::Load {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut samples = HashMap::new();
    for entry in entries {
        let path = entry
            .map_err(|e| AudioError::Load {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })?
            .path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !path.is_file() {
            continue;
        }

        debug!("Loading sound '{}' ...", path.display());
        let load_err = |reason: String| AudioError::Load {
            path: path.clone(),
            reason,
        };
        let file = File::open(&path).map_err(|e| load_err(e.to_string()))?;
        let decoder = Decoder::new(BufReader::new(file)).map_err(|e| load_err(e.to_string()))?;
        samples.insert(stem.to_string(), decoder.buffered());
    }
    Ok(samples)
}
