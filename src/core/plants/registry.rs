//! Plant registry with EEPROM persistence
//!
//! Owns the fixed slot table and keeps it in sync with the byte store. Every
//! mutating call writes and commits the affected record before the in-memory
//! table changes, so a failed commit leaves both sides as they were.

use core::fmt::{self, Write};

use heapless::String;

use super::format::{describe, DisplayOptions, PlantStatus};
use super::interval::DEFAULT_INTERVAL_SECS;
use super::plant::Plant;
use super::record::{slot_offset, validity_offset, PlantRecord, RECORD_WIDTH, STORE_SIZE};
use super::MAX_PLANTS;
use crate::platform::error::{PlatformError, StorageError};
use crate::platform::traits::EepromInterface;

/// Capacity of the confirmation returned by [`PlantRegistry::water`]
pub const MESSAGE_LEN: usize = 160;

/// Confirmation text for a watering event
pub type WateringMessage = String<MESSAGE_LEN>;

/// Plant registry error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Slot is empty or out of range
    NotFound,
    /// Every slot is occupied
    CapacityExceeded,
    /// Byte store operation failed
    Storage(StorageError),
    /// Other platform failure
    Platform(PlatformError),
}

impl From<StorageError> for RegistryError {
    fn from(err: StorageError) -> Self {
        RegistryError::Storage(err)
    }
}

impl From<PlatformError> for RegistryError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::Storage(storage_err) => RegistryError::Storage(storage_err),
            other => RegistryError::Platform(other),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound => write!(f, "plant not found"),
            RegistryError::CapacityExceeded => write!(f, "all {} plant slots in use", MAX_PLANTS),
            RegistryError::Storage(e) => write!(f, "storage error: {:?}", e),
            RegistryError::Platform(e) => write!(f, "{}", e),
        }
    }
}

/// Fixed-capacity plant table backed by an EEPROM
///
/// # Example
///
/// ```ignore
/// use plant_reminder::core::plants::{PlantRegistry, STORE_SIZE};
/// use plant_reminder::platform::mock::MockEeprom;
///
/// let mut registry = PlantRegistry::load(MockEeprom::<STORE_SIZE>::new())?;
/// let slot = registry.create("Monstera", now, 7 * 86_400)?;
/// registry.water(slot, now + 3_600)?;
/// assert!(!registry.needs_watering(slot, now + 7_200));
/// ```
pub struct PlantRegistry<E: EepromInterface> {
    /// Byte store holding one record per slot
    eeprom: E,
    /// In-memory slot table
    slots: [Option<Plant>; MAX_PLANTS],
    /// Number of occupied slots
    count: usize,
}

impl<E: EepromInterface> PlantRegistry<E> {
    /// Create an empty registry over `eeprom` without reading it
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Storage(StorageError::InvalidAddress)` if the store
    /// cannot hold every slot.
    pub fn new(eeprom: E) -> Result<Self, RegistryError> {
        if (eeprom.capacity() as usize) < STORE_SIZE {
            crate::log_error!(
                "EEPROM too small: {} bytes, need {}",
                eeprom.capacity(),
                STORE_SIZE
            );
            return Err(StorageError::InvalidAddress.into());
        }

        Ok(Self {
            eeprom,
            slots: Default::default(),
            count: 0,
        })
    }

    /// Create a registry and load every valid record from `eeprom`
    pub fn load(eeprom: E) -> Result<Self, RegistryError> {
        let mut registry = Self::new(eeprom)?;
        registry.load_all()?;
        Ok(registry)
    }

    /// Rebuild the slot table from the store
    ///
    /// Scans slots in ascending order. Records whose validity flag is set but
    /// whose checksum does not match are skipped and their slot stays free.
    /// Returns the number of plants loaded.
    pub fn load_all(&mut self) -> Result<usize, RegistryError> {
        self.slots = Default::default();
        self.count = 0;

        crate::log_info!("Reading plants from EEPROM");

        for slot in 0..MAX_PLANTS {
            let flag: u8 = self.eeprom.read_field(validity_offset(slot))?;
            if flag == 0 {
                continue;
            }

            let mut buf = [0u8; RECORD_WIDTH];
            self.eeprom.read(slot_offset(slot), &mut buf)?;

            let record = match PlantRecord::decode(&buf) {
                Some(record) => record,
                None => continue,
            };

            if !record.checksum_ok() {
                crate::log_warn!("Slot {} holds a corrupt record, ignoring it", slot);
                continue;
            }

            let plant = record.into_plant(slot);
            crate::log_info!(
                "Plant {}: {} first {} last {} interval {}",
                slot,
                plant.name.as_str(),
                plant.first_registered,
                plant.last_watered,
                plant.interval_secs
            );
            self.slots[slot] = Some(plant);
            self.count += 1;
        }

        Ok(self.count)
    }

    /// Register a new plant in the lowest free slot
    ///
    /// A zero `interval_secs` is replaced by [`DEFAULT_INTERVAL_SECS`]. Both
    /// timestamps are set to `now`. Returns the slot index.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if all slots are occupied (nothing is written)
    /// - `Storage` if the record could not be written or committed
    pub fn create(
        &mut self,
        name: &str,
        now: u32,
        interval_secs: u32,
    ) -> Result<usize, RegistryError> {
        let slot = match self.free_slot() {
            Some(slot) => slot,
            None => {
                crate::log_warn!("Plant list full, {} not added", name);
                return Err(RegistryError::CapacityExceeded);
            }
        };

        let interval = if interval_secs == 0 {
            DEFAULT_INTERVAL_SECS
        } else {
            interval_secs
        };

        let plant = Plant::new(slot, name, now, interval);
        self.persist(slot, &PlantRecord::encode(&plant))?;

        crate::log_info!(
            "Created plant {} in slot {} (interval {} s)",
            plant.name.as_str(),
            slot,
            interval
        );
        self.slots[slot] = Some(plant);
        self.count += 1;

        Ok(slot)
    }

    /// Remove the plant in `slot` and zero its record
    ///
    /// Returns the removed plant. Deleting an empty or out-of-range slot is a
    /// `NotFound` error and touches nothing.
    pub fn delete(&mut self, slot: usize) -> Result<Plant, RegistryError> {
        if self.get(slot).is_none() {
            return Err(RegistryError::NotFound);
        }

        self.persist(slot, &PlantRecord::EMPTY)?;

        let plant = self.slots[slot].take().ok_or(RegistryError::NotFound)?;
        self.count -= 1;

        crate::log_info!("Deleted plant {} from slot {}", plant.name.as_str(), slot);
        Ok(plant)
    }

    /// Record a watering event at `now`
    ///
    /// Only `last_watered` changes. Returns a confirmation message.
    pub fn water(&mut self, slot: usize, now: u32) -> Result<WateringMessage, RegistryError> {
        let mut updated = self.get(slot).cloned().ok_or(RegistryError::NotFound)?;
        updated.last_watered = now;

        self.persist(slot, &PlantRecord::encode(&updated))?;

        let mut message = WateringMessage::new();
        let _ = write!(message, "Plant {} watered", updated.name);

        crate::log_info!("Watered plant {} in slot {}", updated.name.as_str(), slot);
        self.slots[slot] = Some(updated);

        Ok(message)
    }

    /// True if the plant in `slot` is overdue at `now`
    ///
    /// Empty and out-of-range slots never need watering.
    pub fn needs_watering(&self, slot: usize, now: u32) -> bool {
        self.get(slot).is_some_and(|plant| plant.needs_watering(now))
    }

    /// Plant in `slot`, if any
    pub fn get(&self, slot: usize) -> Option<&Plant> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Number of registered plants
    pub fn count(&self) -> usize {
        self.count
    }

    /// True if no slot is free
    pub fn is_full(&self) -> bool {
        self.count >= MAX_PLANTS
    }

    /// Lowest free slot index
    pub fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Registered plants in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Plant> {
        self.slots.iter().flatten()
    }

    /// Display status of every registered plant, in slot order
    pub fn statuses(
        &self,
        now: u32,
        opts: &DisplayOptions,
    ) -> heapless::Vec<PlantStatus, MAX_PLANTS> {
        let mut out = heapless::Vec::new();
        for plant in self.iter() {
            // At most MAX_PLANTS entries, push cannot fail
            let _ = out.push(describe(plant, now, opts));
        }
        out
    }

    /// Zero every record and forget all plants
    ///
    /// If any write or the commit fails, every slot is staged again from the
    /// in-memory table and the plants are kept.
    pub fn clear_all(&mut self) -> Result<(), RegistryError> {
        if let Err(e) = self.zero_all_records() {
            crate::log_error!("Failed to clear plant table");
            self.restage_from_memory();
            return Err(e);
        }

        self.slots = Default::default();
        self.count = 0;
        crate::log_info!("Cleared all plant slots");

        Ok(())
    }

    /// Log a hex dump of every slot record
    pub fn dump(&mut self) -> Result<(), RegistryError> {
        for slot in 0..MAX_PLANTS {
            let mut buf = [0u8; RECORD_WIDTH];
            self.eeprom.read(slot_offset(slot), &mut buf)?;

            let mut hex = String::<{ RECORD_WIDTH * 3 }>::new();
            for byte in buf.iter() {
                let _ = write!(hex, "{:02X} ", byte);
            }
            crate::log_debug!("Slot {}: {}", slot, hex.as_str());
        }
        Ok(())
    }

    /// Mutable access to the underlying store (for testing)
    pub fn storage_mut(&mut self) -> &mut E {
        &mut self.eeprom
    }

    /// Release the underlying store
    pub fn into_storage(self) -> E {
        self.eeprom
    }

    /// Write and commit one record image
    ///
    /// On commit failure the previous image is staged again so that a later
    /// commit cannot flush a record the slot table does not reflect.
    fn persist(&mut self, slot: usize, image: &[u8; RECORD_WIDTH]) -> Result<(), RegistryError> {
        let offset = slot_offset(slot);

        let mut previous = [0u8; RECORD_WIDTH];
        self.eeprom.read(offset, &mut previous)?;
        self.eeprom.write(offset, image)?;

        if let Err(e) = self.eeprom.commit() {
            crate::log_error!("Commit failed for slot {}", slot);
            if self.eeprom.write(offset, &previous).is_err() {
                crate::log_error!("Could not restore slot {} after failed commit", slot);
            }
            return Err(e.into());
        }

        Ok(())
    }

    fn zero_all_records(&mut self) -> Result<(), RegistryError> {
        for slot in 0..MAX_PLANTS {
            self.eeprom.write(slot_offset(slot), &PlantRecord::EMPTY)?;
        }
        self.eeprom.commit()?;
        Ok(())
    }

    fn restage_from_memory(&mut self) {
        for slot in 0..MAX_PLANTS {
            let image = match &self.slots[slot] {
                Some(plant) => PlantRecord::encode(plant),
                None => PlantRecord::EMPTY,
            };
            if self.eeprom.write(slot_offset(slot), &image).is_err() {
                crate::log_error!("Could not restore slot {}", slot);
            }
        }
    }
}
