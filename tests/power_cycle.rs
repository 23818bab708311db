//! Host-side persistence tests for the plant registry
//!
//! Drives the public API against a heap-backed store that only keeps
//! committed bytes across a simulated restart.

use plant_reminder::core::plants::{
    interval_from_parts, DisplayOptions, IntervalStyle, Locale, PlantRegistry, RegistryError,
    WateringMonitor, MAX_PLANTS, STORE_SIZE,
};
use plant_reminder::platform::{EepromInterface, GpioInterface, Result, StorageError};

const NOW: u32 = 1_637_611_741;

/// EEPROM stand-in with separate staged and committed images
struct HostEeprom {
    staged: Vec<u8>,
    committed: Vec<u8>,
    reject_commits: bool,
}

impl HostEeprom {
    fn new(size: usize) -> Self {
        Self {
            staged: vec![0; size],
            committed: vec![0; size],
            reject_commits: false,
        }
    }

    fn restart(mut self) -> Self {
        self.staged = self.committed.clone();
        self.reject_commits = false;
        self
    }

    fn range(&self, offset: u32, len: usize) -> Result<std::ops::Range<usize>> {
        let start = offset as usize;
        let end = start + len;
        if end > self.staged.len() {
            return Err(StorageError::InvalidAddress.into());
        }
        Ok(start..end)
    }
}

impl EepromInterface for HostEeprom {
    fn read(&mut self, offset: u32, buf: &mut [u8]) -> Result<()> {
        let range = self.range(offset, buf.len())?;
        buf.copy_from_slice(&self.staged[range]);
        Ok(())
    }

    fn write(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        let range = self.range(offset, data.len())?;
        self.staged[range].copy_from_slice(data);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        if self.reject_commits {
            return Err(StorageError::CommitFailed.into());
        }
        self.committed.copy_from_slice(&self.staged);
        Ok(())
    }

    fn capacity(&self) -> u32 {
        self.staged.len() as u32
    }
}

/// Indicator output that remembers its level
#[derive(Default)]
struct Led(bool);

impl GpioInterface for Led {
    fn set_high(&mut self) -> Result<()> {
        self.0 = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.0 = false;
        Ok(())
    }

    fn is_set_high(&mut self) -> Result<bool> {
        Ok(self.0)
    }
}

fn reboot(registry: PlantRegistry<HostEeprom>) -> PlantRegistry<HostEeprom> {
    PlantRegistry::load(registry.into_storage().restart()).unwrap()
}

#[test]
fn test_plants_survive_restart() {
    let mut registry = PlantRegistry::load(HostEeprom::new(STORE_SIZE)).unwrap();
    let weekly = interval_from_parts(1, 0, 0, 0);

    let monstera = registry.create("Monstera", NOW, weekly).unwrap();
    let basil = registry.create("Basilicum", NOW, 0).unwrap();
    registry.water(monstera, NOW + 3_600).unwrap();

    let registry = reboot(registry);
    assert_eq!(registry.count(), 2);

    let plant = registry.get(monstera).unwrap();
    assert_eq!(plant.name.as_str(), "Monstera");
    assert_eq!(plant.first_registered, NOW);
    assert_eq!(plant.last_watered, NOW + 3_600);
    assert_eq!(plant.interval_secs, 604_800);

    assert_eq!(registry.get(basil).unwrap().interval_secs, 86_400);
}

#[test]
fn test_delete_frees_slot_across_restart() {
    let mut registry = PlantRegistry::load(HostEeprom::new(STORE_SIZE)).unwrap();
    for name in ["Aloe", "Ficus", "Pothos"] {
        registry.create(name, NOW, 3_600).unwrap();
    }
    let removed = registry.delete(1).unwrap();
    assert_eq!(removed.name.as_str(), "Ficus");

    let mut registry = reboot(registry);
    assert_eq!(registry.count(), 2);
    assert!(registry.get(1).is_none());

    assert_eq!(registry.create("Calathea", NOW, 3_600).unwrap(), 1);
    assert_eq!(registry.delete(1).map(|p| p.slot), Ok(1));
    assert_eq!(registry.delete(1), Err(RegistryError::NotFound));
}

#[test]
fn test_full_table_rejects_create() {
    let mut registry = PlantRegistry::load(HostEeprom::new(STORE_SIZE)).unwrap();
    for i in 0..MAX_PLANTS {
        assert_eq!(registry.create("Cactus", NOW, 60).unwrap(), i);
    }
    assert!(registry.is_full());
    assert_eq!(
        registry.create("Overflow", NOW, 60),
        Err(RegistryError::CapacityExceeded)
    );

    let registry = reboot(registry);
    assert_eq!(registry.count(), MAX_PLANTS);
    assert!(registry.iter().all(|p| p.name.as_str() == "Cactus"));
}

#[test]
fn test_rejected_commit_keeps_previous_state() {
    let mut registry = PlantRegistry::load(HostEeprom::new(STORE_SIZE)).unwrap();
    let slot = registry.create("Fern", NOW, 600).unwrap();

    registry.storage_mut().reject_commits = true;
    assert_eq!(
        registry.water(slot, NOW + 900),
        Err(RegistryError::Storage(StorageError::CommitFailed))
    );
    assert_eq!(registry.get(slot).unwrap().last_watered, NOW);

    let registry = reboot(registry);
    assert_eq!(registry.get(slot).unwrap().last_watered, NOW);
}

#[test]
fn test_undersized_store_is_rejected() {
    assert!(matches!(
        PlantRegistry::load(HostEeprom::new(STORE_SIZE - 1)),
        Err(RegistryError::Storage(StorageError::InvalidAddress))
    ));
}

#[test]
fn test_reminder_cycle() {
    let mut registry = PlantRegistry::load(HostEeprom::new(STORE_SIZE)).unwrap();
    let slot = registry.create("Mint", NOW, 600).unwrap();

    let mut leds: [Led; MAX_PLANTS] = Default::default();
    let mut monitor = WateringMonitor::new(10);

    let report = monitor.poll(&registry, &mut leds, NOW + 601).unwrap().unwrap();
    assert_eq!(&report.due[..], &[slot]);
    assert!(leds[slot].0);

    let message = registry.water(slot, NOW + 605).unwrap();
    assert_eq!(message.as_str(), "Plant Mint watered");
    monitor.acknowledge(&mut leds, slot).unwrap();
    assert!(!leds[slot].0);

    assert!(monitor.poll(&registry, &mut leds, NOW + 611).unwrap().is_none());
    let report = monitor.poll(&registry, &mut leds, NOW + 612).unwrap().unwrap();
    assert!(report.due.is_empty());
    assert!(!leds[slot].0);
}

#[test]
fn test_status_listing() {
    let mut registry = PlantRegistry::load(HostEeprom::new(STORE_SIZE)).unwrap();
    registry.create("Mint", 0, 480).unwrap();

    let opts = DisplayOptions {
        utc_offset_secs: 0,
        locale: Locale::English,
        interval_style: IntervalStyle::Duration,
    };
    let statuses = registry.statuses(1_000, &opts);

    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].name.as_str(), "Mint");
    assert_eq!(statuses[0].last_watered.as_str(), "1 January 1970 00:00");
    assert_eq!(statuses[0].next_watering.as_str(), "1 January 1970 00:08");
    assert_eq!(statuses[0].interval.as_str(), "8 minutes");
    assert!(statuses[0].needs_watering);
}
