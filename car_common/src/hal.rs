//! Digital port contracts.
//!
//! This module contains the traits every GPIO backend implements and
//! the handle types components are constructed with.

pub mod driver;
pub mod port;
