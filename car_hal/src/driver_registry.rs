//! Name → factory table for GPIO backends.
//!
//! The binary picks its backend by name (`--driver sysfs`,
//! `--simulate`); this table turns that name into a fresh driver. It is
//! an ordinary value built by [`crate::drivers::default_registry`], so
//! tests can assemble their own.

use car_common::hal::driver::{DriverFactory, GpioDriver, HalError};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// GPIO backends known by name.
#[derive(Default)]
pub struct DriverRegistry {
    factories: BTreeMap<&'static str, DriverFactory>,
}

impl DriverRegistry {
    /// Registry without any backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `factory` under `name`. A later registration under the same
    /// name replaces the earlier one.
    pub fn register(&mut self, name: &'static str, factory: DriverFactory) {
        if self.factories.insert(name, factory).is_some() {
            warn!("GPIO driver '{}' registered twice, keeping the last one", name);
        }
    }

    /// Instantiate the backend registered as `name`.
    ///
    /// # Errors
    /// `HalError::DriverNotFound`, naming every registered backend.
    pub fn create_driver(&self, name: &str) -> Result<Box<dyn GpioDriver>, HalError> {
        match self.factories.get(name) {
            Some(factory) => {
                debug!("Creating GPIO driver '{}'", name);
                Ok(factory())
            }
            None => Err(HalError::DriverNotFound {
                name: name.to_string(),
                available: self.list_drivers().join(", "),
            }),
        }
    }

    /// Registered names in alphabetical order.
    pub fn list_drivers(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}
