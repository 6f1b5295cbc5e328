//! Console I/O: roles, point configuration and the role registry.

pub mod config;
pub mod registry;
pub mod role;
