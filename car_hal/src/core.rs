//! HAL Core: turns configured roles into port handles.
//!
//! `HalCore` owns the active driver and the validated [`IoRegistry`].
//! Components ask for ports by [`IoRole`]; the core resolves the pin,
//! checks the direction and opens it through the driver. Input handles
//! are cached so that roles shared between components (the emergency
//! button feeds both turn signals) read the same pin object.

use car_common::hal::driver::{GpioDriver, HalError};
use car_common::hal::port::{InputHandle, OutputHandle};
use car_common::io::registry::{IoBinding, IoRegistry};
use car_common::io::role::{IoPointType, IoRole};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Role-addressed access to the console's pins.
pub struct HalCore {
    registry: IoRegistry,
    driver: Box<dyn GpioDriver>,
    inputs: HashMap<IoRole, InputHandle>,
    taken_outputs: HashSet<IoRole>,
}

impl HalCore {
    /// Create a core over a validated registry and a driver instance.
    pub fn new(registry: IoRegistry, driver: Box<dyn GpioDriver>) -> Self {
        info!(
            "HalCore created: driver={}, {} inputs, {} outputs",
            driver.name(),
            registry.input_count,
            registry.output_count
        );
        Self {
            registry,
            driver,
            inputs: HashMap::new(),
            taken_outputs: HashSet::new(),
        }
    }

    /// Name of the active driver.
    pub fn driver_name(&self) -> &'static str {
        self.driver.name()
    }

    /// The registry the core resolves roles against.
    pub fn registry(&self) -> &IoRegistry {
        &self.registry
    }

    fn bound(&self, role: IoRole, expected: IoPointType) -> Result<IoBinding, HalError> {
        let binding = self
            .registry
            .binding(role)
            .copied()
            .ok_or_else(|| HalError::RoleUnbound(role.to_string()))?;
        if binding.io_type != expected {
            return Err(HalError::PinUnavailable {
                pin: binding.pin,
                reason: format!("role {role} is wired as {}, not {expected}", binding.io_type),
            });
        }
        Ok(binding)
    }

    /// Shared input handle for `role`, opened on first request.
    pub fn input(&mut self, role: IoRole) -> Result<InputHandle, HalError> {
        if let Some(handle) = self.inputs.get(&role) {
            return Ok(handle.clone());
        }
        let binding = self.bound(role, IoPointType::Input)?;
        let handle = self.driver.open_input(binding.pin, binding.logic)?;
        debug!("Opened input {} on pin {}", role, binding.pin);
        self.inputs.insert(role, handle.clone());
        Ok(handle)
    }

    /// Exclusive output handle for `role`. A second request fails.
    pub fn output(&mut self, role: IoRole) -> Result<OutputHandle, HalError> {
        let binding = self.bound(role, IoPointType::Output)?;
        if !self.taken_outputs.insert(role) {
            return Err(HalError::OutputTaken(role.to_string()));
        }
        let handle = self.driver.open_output(binding.pin)?;
        debug!("Opened output {} on pin {}", role, binding.pin);
        Ok(handle)
    }
}
