//! In-memory plant entity

use heapless::String;

use super::record::NAME_LEN;

/// Plant name storage (at most [`NAME_LEN`] bytes of UTF-8)
pub type PlantName = String<NAME_LEN>;

/// One registered plant
///
/// `slot` ties the entity to its record position in the store and never changes
/// while the plant exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    /// Registry slot (0-based)
    pub slot: usize,
    /// Display name
    pub name: PlantName,
    /// Creation time (epoch seconds), never modified afterwards
    pub first_registered: u32,
    /// Last watering event (epoch seconds)
    pub last_watered: u32,
    /// Watering cadence in seconds
    pub interval_secs: u32,
}

impl Plant {
    /// Build a freshly registered plant; both timestamps are set to `now`
    pub fn new(slot: usize, name: &str, now: u32, interval_secs: u32) -> Self {
        Self {
            slot,
            name: truncate_name(name),
            first_registered: now,
            last_watered: now,
            interval_secs,
        }
    }

    /// Time the next watering is due (epoch seconds, may exceed `u32::MAX`)
    pub fn next_watering(&self) -> u64 {
        u64::from(self.last_watered) + u64::from(self.interval_secs)
    }

    /// True once the interval has fully elapsed (strictly before `now`)
    pub fn needs_watering(&self, now: u32) -> bool {
        self.next_watering() < u64::from(now)
    }
}

/// Copy `name` into fixed storage
///
/// The name ends at the first NUL, as it would on the medium, and is cut at the
/// last char boundary that fits.
pub fn truncate_name(name: &str) -> PlantName {
    let name = match name.find('\0') {
        Some(nul) => &name[..nul],
        None => name,
    };

    let mut end = name.len().min(NAME_LEN);
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    let mut out = PlantName::new();
    // Cannot fail: `end <= NAME_LEN`
    let _ = out.push_str(&name[..end]);
    out
}
