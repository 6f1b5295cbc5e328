//! GPIO driver implementations.
//!
//! - [`sysfs`] - Linux `/sys/class/gpio` driver for the real board
//! - [`simulation`] - In-memory board for development and testing
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement the `GpioDriver` trait from `car_common::hal::driver`
//! 3. Register it in [`default_registry`]

pub mod simulation;
pub mod sysfs;

use crate::driver_registry::DriverRegistry;

/// Name of the driver used when none is requested.
pub const DEFAULT_DRIVER: &str = "sysfs";

/// Registry populated with every built-in driver.
pub fn default_registry() -> DriverRegistry {
    let mut registry = DriverRegistry::new();
    registry.register("sysfs", sysfs::create_driver);
    registry.register("simulation", simulation::create_driver);
    registry
}
