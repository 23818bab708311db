//! Mock EEPROM implementation for testing
//!
//! Provides an in-memory byte store with separate staged and committed images.

use crate::platform::{error::StorageError, traits::EepromInterface, Result};

/// Mock EEPROM implementation
///
/// Simulates an emulated EEPROM in memory for testing. Supports:
/// - Staged writes that only become durable on `commit`
/// - Restart simulation (uncommitted writes are lost)
/// - Power-loss simulation during commit (partial flush)
/// - Corruption injection plus write and commit failure injection
///
/// # Example
///
/// ```
/// use plant_reminder::platform::mock::MockEeprom;
/// use plant_reminder::platform::traits::EepromInterface;
///
/// let mut eeprom = MockEeprom::<64>::new();
/// eeprom.write(0, &[1, 2, 3, 4]).unwrap();
///
/// // Lost without a commit
/// eeprom.power_cycle();
/// assert_eq!(eeprom.read_field::<u32>(0).unwrap(), 0);
///
/// eeprom.write(0, &[1, 2, 3, 4]).unwrap();
/// eeprom.commit().unwrap();
/// eeprom.power_cycle();
/// assert_eq!(eeprom.read_field::<u32>(0).unwrap(), 0x0403_0201);
/// ```
#[derive(Debug, Clone)]
pub struct MockEeprom<const N: usize> {
    /// Working copy seen by reads (staged writes applied)
    staged: [u8; N],
    /// Contents that survive a power cycle
    committed: [u8; N],
    /// Byte range touched since the last commit
    dirty: Option<(usize, usize)>,
    /// Number of successful commits
    commits: u32,
    /// Next commit only persists half of the dirty range
    power_loss: bool,
    /// Next commit reports failure without persisting
    fail_commit: bool,
    /// Successful writes left before one write fails
    writes_until_fault: Option<u32>,
}

impl<const N: usize> MockEeprom<N> {
    /// Create a zero-initialized mock EEPROM
    pub fn new() -> Self {
        Self::filled(0x00)
    }

    /// Create a mock EEPROM in the erased state (all bytes 0xFF)
    pub fn erased() -> Self {
        Self::filled(0xFF)
    }

    fn filled(byte: u8) -> Self {
        Self {
            staged: [byte; N],
            committed: [byte; N],
            dirty: None,
            commits: 0,
            power_loss: false,
            fail_commit: false,
            writes_until_fault: None,
        }
    }

    /// Get committed contents (for test verification)
    pub fn committed_contents(&self, offset: u32, len: usize) -> &[u8] {
        &self.committed[offset as usize..offset as usize + len]
    }

    /// Simulate a restart: staged writes that were never committed are lost
    pub fn power_cycle(&mut self) {
        self.staged = self.committed;
        self.dirty = None;
        self.power_loss = false;
        self.fail_commit = false;
        self.writes_until_fault = None;
    }

    /// Make the next commit persist only the first half of the dirty range
    pub fn simulate_power_loss(&mut self) {
        self.power_loss = true;
    }

    /// Make the next commit fail without persisting anything
    pub fn fail_next_commit(&mut self) {
        self.fail_commit = true;
    }

    /// Let `ok_writes` more writes through, then fail the next one
    ///
    /// The failing write leaves the store untouched; later writes succeed.
    pub fn fail_write_after(&mut self, ok_writes: u32) {
        self.writes_until_fault = Some(ok_writes);
    }

    /// Overwrite committed and staged bytes with a corrupt pattern
    pub fn inject_corruption(&mut self, offset: u32, len: usize) {
        let start = offset as usize;
        for byte in &mut self.committed[start..start + len] {
            *byte = 0xAA;
        }
        for byte in &mut self.staged[start..start + len] {
            *byte = 0xAA;
        }
    }

    /// Number of successful commits
    pub fn commit_count(&self) -> u32 {
        self.commits
    }

    /// True if there are staged writes not yet committed
    pub fn has_pending(&self) -> bool {
        self.dirty.is_some()
    }

    fn check_range(&self, offset: u32, len: usize) -> Result<usize> {
        let start = offset as usize;
        match start.checked_add(len) {
            Some(end) if end <= N => Ok(start),
            _ => Err(StorageError::InvalidAddress.into()),
        }
    }
}

impl<const N: usize> Default for MockEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EepromInterface for MockEeprom<N> {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<()> {
        let start = self.check_range(offset, buf.len())?;
        buf.copy_from_slice(&self.staged[start..start + buf.len()]);
        Ok(())
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        let start = self.check_range(offset, data.len())?;

        match self.writes_until_fault {
            Some(0) => {
                self.writes_until_fault = None;
                return Err(StorageError::WriteFailed.into());
            }
            Some(n) => self.writes_until_fault = Some(n - 1),
            None => {}
        }

        let end = start + data.len();
        self.staged[start..end].copy_from_slice(data);

        self.dirty = Some(match self.dirty {
            Some((lo, hi)) => (lo.min(start), hi.max(end)),
            None => (start, end),
        });

        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        if self.fail_commit {
            self.fail_commit = false;
            return Err(StorageError::CommitFailed.into());
        }

        let (lo, hi) = match self.dirty.take() {
            Some(range) => range,
            None => {
                self.commits += 1;
                return Ok(());
            }
        };

        let hi = if self.power_loss {
            // Power dropped half way through the flush
            self.power_loss = false;
            lo + (hi - lo) / 2
        } else {
            hi
        };

        self.committed[lo..hi].copy_from_slice(&self.staged[lo..hi]);
        self.commits += 1;

        Ok(())
    }

    fn capacity(&self) -> u32 {
        N as u32
    }
}
