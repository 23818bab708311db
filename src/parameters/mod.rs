//! Parameter Definitions
//!
//! Build-time configuration for the reminder firmware.

pub mod reminder;

pub use reminder::{ReminderParams, DEFAULT_UTC_OFFSET_SECS};
