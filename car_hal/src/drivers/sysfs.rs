//! Linux sysfs GPIO driver.
//!
//! Pins are exported through `<root>/export` and then accessed through
//! `<root>/gpioN/{direction,value}`. The export node appears
//! asynchronously (udev fixes up permissions), so opening waits for it
//! with a bound. Pull-ups are not configurable through sysfs and must be
//! set up by the board's device tree.

use car_common::consts::SYSFS_GPIO_ROOT;
use car_common::hal::driver::{GpioDriver, HalError};
use car_common::hal::port::{DigitalInput, DigitalOutput, InputHandle, OutputHandle};
use car_common::io::role::InputLogic;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long to wait for an exported pin's nodes to appear.
const EXPORT_TIMEOUT: Duration = Duration::from_secs(1);

/// Poll interval while waiting for an export.
const EXPORT_POLL: Duration = Duration::from_millis(10);

/// Driver backed by `/sys/class/gpio`.
pub struct SysfsDriver {
    root: PathBuf,
}

impl SysfsDriver {
    /// Driver on the system sysfs root.
    pub fn new() -> Self {
        Self::with_root(SYSFS_GPIO_ROOT)
    }

    /// Driver on an alternative root (used by tests).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn pin_dir(&self, pin: u16) -> PathBuf {
        self.root.join(format!("gpio{pin}"))
    }

    /// Export `pin` if needed and return its directory.
    fn export(&self, pin: u16) -> Result<PathBuf, HalError> {
        let dir = self.pin_dir(pin);
        if dir.join("value").exists() {
            return Ok(dir);
        }

        debug!("Exporting GPIO {}", pin);
        fs::write(self.root.join("export"), pin.to_string()).map_err(|e| {
            HalError::PinUnavailable {
                pin,
                reason: format!("export failed: {e}"),
            }
        })?;

        let deadline = Instant::now() + EXPORT_TIMEOUT;
        while !dir.join("direction").exists() {
            if Instant::now() >= deadline {
                return Err(HalError::PinUnavailable {
                    pin,
                    reason: format!("{} did not appear after export", dir.display()),
                });
            }
            std::thread::sleep(EXPORT_POLL);
        }
        Ok(dir)
    }

    fn set_direction(dir: &Path, pin: u16, direction: &str) -> Result<(), HalError> {
        fs::write(dir.join("direction"), direction).map_err(|e| HalError::PinUnavailable {
            pin,
            reason: format!("setting direction '{direction}' failed: {e}"),
        })
    }
}

impl Default for SysfsDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioDriver for SysfsDriver {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn open_input(&mut self, pin: u16, logic: InputLogic) -> Result<InputHandle, HalError> {
        let dir = self.export(pin)?;
        Self::set_direction(&dir, pin, "in")?;
        debug!("GPIO {} opened as input ({:?})", pin, logic);
        Ok(Arc::new(SysfsInput {
            pin,
            value_path: dir.join("value"),
            logic,
            read_failed: AtomicBool::new(false),
        }))
    }

    fn open_output(&mut self, pin: u16) -> Result<OutputHandle, HalError> {
        let dir = self.export(pin)?;
        // "low" selects output and drives it low in one step.
        Self::set_direction(&dir, pin, "low")?;
        debug!("GPIO {} opened as output", pin);
        Ok(Box::new(SysfsOutput {
            pin,
            value_path: dir.join("value"),
            last: Some(false),
            write_failed: false,
        }))
    }
}

/// Factory for the driver registry.
pub fn create_driver() -> Box<dyn GpioDriver> {
    Box::new(SysfsDriver::new())
}

struct SysfsInput {
    pin: u16,
    value_path: PathBuf,
    logic: InputLogic,
    read_failed: AtomicBool,
}

impl DigitalInput for SysfsInput {
    fn is_pressed(&self) -> bool {
        match fs::read_to_string(&self.value_path) {
            Ok(raw) => self.logic.is_active(raw.trim() == "1"),
            Err(e) => {
                if !self.read_failed.swap(true, Ordering::Relaxed) {
                    warn!("GPIO {} read failed, treating as released: {}", self.pin, e);
                }
                false
            }
        }
    }
}

struct SysfsOutput {
    pin: u16,
    value_path: PathBuf,
    last: Option<bool>,
    write_failed: bool,
}

impl DigitalOutput for SysfsOutput {
    fn set(&mut self, on: bool) {
        if self.last == Some(on) {
            return;
        }
        match fs::write(&self.value_path, if on { "1" } else { "0" }) {
            Ok(()) => self.last = Some(on),
            Err(e) => {
                if !self.write_failed {
                    self.write_failed = true;
                    warn!("GPIO {} write failed: {}", self.pin, e);
                }
                self.last = None;
            }
        }
    }
}
