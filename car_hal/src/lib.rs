//! # Car Console HAL Library
//!
//! GPIO backends for the console behind the `GpioDriver` trait defined in
//! `car_common::hal::driver`.
//!
//! # Module Structure
//!
//! - [`core`] - HalCore: opens configured roles into port handles
//! - [`driver_registry`] - Driver factory registration
//! - [`drivers`] - Driver implementations (sysfs, simulation)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        car_hal                               │
//! │  ┌─────────────┐    ┌──────────────┐    ┌─────────────────┐  │
//! │  │ IoRegistry  │───►│   HalCore    │◄───│ DriverRegistry  │  │
//! │  │ (car_common)│    │ role → port  │    │  name → factory │  │
//! │  └─────────────┘    └──────┬───────┘    └─────────────────┘  │
//! │                            │                                 │
//! │                            ▼                                 │
//! │                   ┌────────────────┐                         │
//! │                   │  GpioDriver    │ (trait object)          │
//! │                   │ sysfs | sim    │                         │
//! │                   └────────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]

pub mod core;
pub mod driver_registry;
pub mod drivers;

pub use crate::core::HalCore;
pub use crate::driver_registry::DriverRegistry;
pub use crate::drivers::simulation::{SimulatedBoard, SimulationDriver};
pub use crate::drivers::sysfs::SysfsDriver;
