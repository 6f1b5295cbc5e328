//! Press classification for a single button.
//!
//! A [`TwoStateButton`] turns a raw "pressed" level sampled every tick into
//! one of four outcomes:
//!
//! | situation                                             | result          |
//! |-------------------------------------------------------|-----------------|
//! | held, threshold not reached since last send           | `Some(pending)` |
//! | held, `long_interval` elapsed since last send         | `Some(long)`    |
//! | just released, press lasted at most `long_interval`   | `Some(short)`   |
//! | anything else                                         | `None`          |
//!
//! A press of exactly `long_interval` still counts as short on release,
//! even though it has already reported `long` once.
//!
//! The long value repeats every `long_interval` while the button stays
//! down. Callers must tell `None` apart from the pending value.

use car_common::hal::port::InputHandle;

/// Default hold time separating a click from a long press [s].
pub const DEFAULT_LONG_INTERVAL: f64 = 0.4;

/// Debounce classifier over one input.
pub struct TwoStateButton<T> {
    input: InputHandle,
    short: T,
    long: T,
    pending: T,
    long_interval: f64,

    last_pressed: bool,
    press_start: f64,
    last_send: f64,
}

impl<T: Copy> TwoStateButton<T> {
    /// Classifier with [`DEFAULT_LONG_INTERVAL`].
    pub fn new(input: InputHandle, short: T, long: T, pending: T) -> Self {
        Self::with_interval(input, short, long, pending, DEFAULT_LONG_INTERVAL)
    }

    /// Classifier with an explicit long-press threshold in seconds.
    pub fn with_interval(input: InputHandle, short: T, long: T, pending: T, long_interval: f64) -> Self {
        Self {
            input,
            short,
            long,
            pending,
            long_interval,
            last_pressed: false,
            press_start: 0.0,
            last_send: 0.0,
        }
    }

    /// Sample the input and classify it at time `now`.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        let pressed = self.input.is_pressed();
        self.classify(pressed, now)
    }

    /// Classify an already sampled level at time `now`.
    pub fn classify(&mut self, pressed: bool, now: f64) -> Option<T> {
        let mut result = None;
        if pressed {
            result = Some(self.pending);
            if !self.last_pressed {
                self.press_start = now;
                self.last_send = now;
            }
            if self.last_send <= now - self.long_interval {
                result = Some(self.long);
                self.last_send = now;
            }
        } else if self.last_pressed && self.press_start >= now - self.long_interval {
            result = Some(self.short);
        }

        self.last_pressed = pressed;
        result
    }

    /// Long-press threshold [s].
    pub fn long_interval(&self) -> f64 {
        self.long_interval
    }
}
