//! Car Console Common Library
//!
//! Shared constants, configuration loading and the digital port contracts
//! used by every crate of the car console workspace.
//!
//! # Module Structure
//!
//! - [`config`] - TOML configuration loading, defaults and validation
//! - [`consts`] - Reference installation constants
//! - [`hal`] - Digital port traits, GPIO driver contract and errors
//! - [`io`] - I/O roles, point configuration and the role registry
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use car_common::prelude::*;
//! ```

pub mod config;
pub mod consts;
pub mod hal;
pub mod io;
pub mod prelude;
