//! Core reminder functionality
//!
//! This module contains the platform-independent parts of the firmware: the
//! plant registry, logging macros and time abstractions.

pub mod logging;
pub mod plants;
pub mod traits;
