//! The simulation loop.
//!
//! `Car` owns the components in registration order and an audio backend.
//! One tick steps every component, plays all requested one-shots in
//! registration order and selects the single continuous track: the last
//! component that asked for one wins, silence otherwise.
//!
//! Pacing is best effort: after each tick the loop sleeps for whatever is
//! left of the tick budget. Overruns are counted and logged, never caught
//! up.

use crate::audio::{AudioOutput, Sound};
use crate::component::{Component, ComponentKind};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, trace, warn};

/// Resolved audio of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickAudio {
    /// One-shots in registration order.
    pub one_shots: Vec<Sound>,
    /// The continuous track to play.
    pub loop_track: Sound,
}

/// Loop timing statistics.
#[derive(Debug, Default, Clone)]
pub struct CycleStats {
    /// Ticks executed.
    pub cycle_count: u64,
    /// Ticks whose body exceeded the budget.
    pub timing_violations: u64,
    /// Longest tick body [µs].
    pub max_cycle_time_us: u64,
    /// Sum of tick bodies, for the average [µs].
    pub total_cycle_time_us: u64,
}

impl CycleStats {
    /// Account one tick. Returns `true` when it overran `budget`.
    pub fn record(&mut self, elapsed: Duration, budget: Duration) -> bool {
        let us = elapsed.as_micros() as u64;
        self.cycle_count += 1;
        self.total_cycle_time_us += us;
        self.max_cycle_time_us = self.max_cycle_time_us.max(us);
        let overrun = elapsed > budget;
        if overrun {
            self.timing_violations += 1;
        }
        overrun
    }

    /// Mean tick body [µs].
    pub fn average_cycle_time_us(&self) -> u64 {
        self.total_cycle_time_us.checked_div(self.cycle_count).unwrap_or(0)
    }
}

/// The console.
pub struct Car {
    components: Vec<Box<dyn Component>>,
    audio: Box<dyn AudioOutput>,
    tick_budget: Duration,
    stats: CycleStats,
}

impl Car {
    /// Empty console ticking at `frequency_hz`.
    pub fn new(audio: Box<dyn AudioOutput>, frequency_hz: u32) -> Self {
        debug!("Initializing car at {} Hz", frequency_hz);
        Self {
            components: Vec::new(),
            audio,
            tick_budget: Duration::from_secs_f64(1.0 / f64::from(frequency_hz.max(1))),
            stats: CycleStats::default(),
        }
    }

    /// Append a component. Registration order is loop precedence.
    pub fn add(&mut self, component: Box<dyn Component>) {
        debug!("Registered {}", component.kind());
        self.components.push(component);
    }

    /// Registered components, in order.
    pub fn kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(|c| c.kind()).collect()
    }

    /// Target time between ticks.
    pub fn tick_budget(&self) -> Duration {
        self.tick_budget
    }

    /// Timing statistics of [`Car::run`].
    pub fn stats(&self) -> &CycleStats {
        &self.stats
    }

    /// Run one tick at wall-clock time `now` [s] and hand the result to
    /// the audio backend.
    pub fn step(&mut self, now: f64) -> TickAudio {
        let mut tick = TickAudio {
            one_shots: Vec::new(),
            loop_track: Sound::Silence,
        };
        let mut requested = None;

        for component in &mut self.components {
            component.step(now);
            let audio = component.audio();
            if let Some(sound) = audio.one_shot {
                tick.one_shots.push(sound);
            }
            if audio.loop_track.is_some() {
                requested = audio.loop_track;
            }
        }
        if let Some(sound) = requested {
            tick.loop_track = sound;
        }

        for sound in &tick.one_shots {
            self.audio.play(*sound);
        }
        self.audio.set_loop(tick.loop_track);

        trace!("Tick {:.3}: {:?}", now, tick);
        tick
    }

    /// Tick forever.
    pub fn run(&mut self) -> ! {
        info!(
            "Starting car main loop ({} components, tick budget {}us)",
            self.components.len(),
            self.tick_budget.as_micros()
        );

        loop {
            let cycle_start = Instant::now();
            self.step(wall_clock_seconds());

            let elapsed = cycle_start.elapsed();
            if self.stats.record(elapsed, self.tick_budget) {
                let n = self.stats.timing_violations;
                if n <= 10 || n % 1000 == 0 {
                    warn!(
                        "Timing violation #{}: tick took {}us (budget {}us)",
                        n,
                        elapsed.as_micros(),
                        self.tick_budget.as_micros()
                    );
                }
            }

            if self.stats.cycle_count % 1000 == 0 {
                debug!(
                    "Main loop: {} ticks, avg={}us, max={}us, violations={}",
                    self.stats.cycle_count,
                    self.stats.average_cycle_time_us(),
                    self.stats.max_cycle_time_us,
                    self.stats.timing_violations
                );
            }

            if let Some(remaining) = self.tick_budget.checked_sub(elapsed) {
                std::thread::sleep(remaining);
            }
        }
    }
}

/// Seconds since the UNIX epoch.
fn wall_clock_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64())
}
