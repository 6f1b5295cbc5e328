//! I/O registry: runtime role-based pin lookup.
//!
//! Built at startup from `IoConfig`. Immutable after construction.

use std::collections::HashMap;
use thiserror::Error;

use super::config::IoConfig;
use super::role::{InputLogic, IoPointType, IoRole};

// ─── Error Types ────────────────────────────────────────────────────

/// I/O configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoConfigError {
    /// Two points share the same pin.
    #[error("duplicate pin {pin} for roles '{role_a}' and '{role_b}'")]
    PinDuplicate {
        pin: u16,
        role_a: IoRole,
        role_b: IoRole,
    },
    /// The same role is wired twice.
    #[error("duplicate role '{role}' on pins {pin_a} and {pin_b}")]
    RoleDuplicate { role: IoRole, pin_a: u16, pin_b: u16 },
    /// Role wired with the wrong direction.
    #[error("role '{role}' expects {expected_type} but is configured as {actual_type}")]
    RoleTypeMismatch {
        role: IoRole,
        expected_type: IoPointType,
        actual_type: IoPointType,
    },
    /// Required role not wired.
    #[error("missing required role '{role}'")]
    RoleMissing { role: IoRole },
}

// ─── IoBinding ──────────────────────────────────────────────────────

/// Runtime binding of a role to its physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoBinding {
    /// Direction.
    pub io_type: IoPointType,
    /// BCM GPIO number.
    pub pin: u16,
    /// Resolved input logic (meaningless for outputs).
    pub logic: InputLogic,
}

// ─── IoRegistry ─────────────────────────────────────────────────────

/// Role → pin lookup.
#[derive(Debug, Clone)]
pub struct IoRegistry {
    bindings: HashMap<IoRole, IoBinding>,
    /// Number of wired inputs.
    pub input_count: usize,
    /// Number of wired outputs.
    pub output_count: usize,
}

impl IoRegistry {
    /// Build and validate the registry.
    ///
    /// Every role in [`IoRole::ALL`] must be wired exactly once, with the
    /// direction it expects, on a pin no other role uses.
    pub fn from_config(config: &IoConfig) -> Result<Self, IoConfigError> {
        let mut bindings: HashMap<IoRole, IoBinding> = HashMap::new();
        let mut pins: HashMap<u16, IoRole> = HashMap::new();

        for point in &config.points {
            let expected_type = point.role.expected_io_type();
            if expected_type != point.io_type {
                return Err(IoConfigError::RoleTypeMismatch {
                    role: point.role,
                    expected_type,
                    actual_type: point.io_type,
                });
            }

            if let Some(existing) = pins.insert(point.pin, point.role) {
                return Err(IoConfigError::PinDuplicate {
                    pin: point.pin,
                    role_a: existing,
                    role_b: point.role,
                });
            }

            let binding = IoBinding {
                io_type: point.io_type,
                pin: point.pin,
                logic: point.logic.unwrap_or(config.default_logic),
            };
            if let Some(existing) = bindings.insert(point.role, binding) {
                return Err(IoConfigError::RoleDuplicate {
                    role: point.role,
                    pin_a: existing.pin,
                    pin_b: point.pin,
                });
            }
        }

        if let Some(role) = IoRole::ALL.iter().find(|r| !bindings.contains_key(r)) {
            return Err(IoConfigError::RoleMissing { role: *role });
        }

        let input_count = bindings
            .values()
            .filter(|b| b.io_type == IoPointType::Input)
            .count();
        let output_count = bindings.len() - input_count;

        Ok(Self {
            bindings,
            input_count,
            output_count,
        })
    }

    /// Look up a role.
    #[inline]
    pub fn binding(&self, role: IoRole) -> Option<&IoBinding> {
        self.bindings.get(&role)
    }

    /// Number of wired roles.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// `true` when nothing is wired.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
