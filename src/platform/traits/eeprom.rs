//! EEPROM interface trait
//!
//! This module defines the byte store interface that platform implementations must provide.
//! The plant registry keeps one fixed-width record per slot in this store.

use crate::platform::Result;

/// Fixed-size little-endian scalar that can be read straight from the store
pub trait StoreScalar: Sized {
    /// Encoded size in bytes
    const SIZE: usize;

    /// Decode from exactly `SIZE` little-endian bytes
    fn from_le_slice(bytes: &[u8]) -> Self;
}

impl StoreScalar for u8 {
    const SIZE: usize = 1;

    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl StoreScalar for u16 {
    const SIZE: usize = 2;

    fn from_le_slice(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }
}

impl StoreScalar for u32 {
    const SIZE: usize = 4;

    fn from_le_slice(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

/// EEPROM interface trait
///
/// Platform implementations must provide this interface for byte-addressable
/// persistent storage with explicit commit (ESP8266/ESP32 style emulated EEPROM,
/// or a RAM shadow in front of an I2C EEPROM).
///
/// # Write Semantics
///
/// - `write` only stages data; it is visible to later `read` calls immediately
/// - Staged data is not guaranteed to survive a restart until `commit` returns `Ok`
/// - The addressable size is fixed when the store is constructed
///
/// # Memory Layout
///
/// ```text
/// [Slot 0 record]  0x000 - 0x094 (148 bytes)
/// [Slot 1 record]  0x094 - 0x128
/// ...
/// [Slot 7 record]  0x40C - 0x4A0
/// ```
pub trait EepromInterface {
    /// Read `buf.len()` bytes starting at `offset`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Storage(StorageError::InvalidAddress)` if the range
    /// exceeds the store capacity.
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<()>;

    /// Stage `data` for writing at `offset`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Storage(StorageError::InvalidAddress)` if the range
    /// exceeds the store capacity.
    fn write(&mut self, offset: u32, data: &[u8]) -> Result<()>;

    /// Flush staged writes to the medium
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Storage(StorageError::CommitFailed)` if the flush
    /// did not complete.
    fn commit(&mut self) -> Result<()>;

    /// Total addressable size in bytes
    fn capacity(&self) -> u32;

    /// Read one little-endian scalar at `offset`
    fn read_field<T: StoreScalar>(&mut self, offset: u32) -> Result<T> {
        let mut buf = [0u8; 4];
        let bytes = &mut buf[..T::SIZE];
        self.read(offset, bytes)?;
        Ok(T::from_le_slice(bytes))
    }
}
