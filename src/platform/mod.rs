//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the byte store and indicator
//! outputs. All hardware-facing code is isolated to this module.

pub mod error;
pub mod hal;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, PlatformError, Result, StorageError};
pub use traits::{EepromInterface, GpioInterface, StoreScalar};
