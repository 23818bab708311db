//! Plant registry subsystem
//!
//! This module provides the persistent plant table: the on-medium record
//! format, the slot registry kept in sync with the EEPROM, watering status
//! formatting, and the periodic indicator check.

pub mod format;
pub mod interval;
pub mod monitor;
pub mod plant;
pub mod record;
pub mod registry;

/// Number of plant slots (one indicator output per slot)
pub const MAX_PLANTS: usize = 8;

// Re-export commonly used types
pub use format::{describe, DisplayOptions, IntervalStyle, Locale, PlantStatus};
pub use interval::{interval_from_parts, DEFAULT_INTERVAL_SECS};
pub use monitor::{CheckReport, WateringMonitor};
pub use plant::{Plant, PlantName};
pub use record::{PlantRecord, RECORD_WIDTH, STORE_SIZE};
pub use registry::{PlantRegistry, RegistryError, WateringMessage};
