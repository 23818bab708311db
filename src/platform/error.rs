//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// Store and pin drivers map their device-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Byte store operation failed
    Storage(StorageError),
    /// GPIO operation failed
    Gpio(GpioError),
}

/// Byte store (EEPROM) errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Read operation failed
    ReadFailed,
    /// Write operation failed
    WriteFailed,
    /// Commit did not reach the medium
    CommitFailed,
    /// Access outside the addressable range
    InvalidAddress,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin could not be driven
    WriteFailed,
    /// Pin state could not be read back
    ReadFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Storage(e) => write!(f, "Storage error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
        }
    }
}

impl From<StorageError> for PlatformError {
    fn from(error: StorageError) -> Self {
        PlatformError::Storage(error)
    }
}

impl From<GpioError> for PlatformError {
    fn from(error: GpioError) -> Self {
        PlatformError::Gpio(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: PlatformError = StorageError::CommitFailed.into();
        assert_eq!(err, PlatformError::Storage(StorageError::CommitFailed));

        let err: PlatformError = GpioError::ReadFailed.into();
        assert_eq!(format!("{}", err), "GPIO error: ReadFailed");
    }
}
