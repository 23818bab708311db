//! Periodic watering check
//!
//! Drives one indicator output per slot from `needs_watering`. The control loop
//! calls [`WateringMonitor::poll`] every iteration; a pass only runs once the
//! check period has elapsed.

use super::registry::PlantRegistry;
use super::MAX_PLANTS;
use crate::core::traits::ClockSource;
use crate::platform::traits::{EepromInterface, GpioInterface};
use crate::platform::Result;

/// Default check period in seconds
pub const DEFAULT_CHECK_PERIOD_SECS: u32 = 10;

/// Result of one check pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Time the pass ran
    pub checked_at: u32,
    /// Slots that need water, ascending
    pub due: heapless::Vec<usize, MAX_PLANTS>,
}

/// Rate-limited watering checker
#[derive(Debug, Clone)]
pub struct WateringMonitor {
    period_secs: u32,
    last_checked: Option<u32>,
}

impl WateringMonitor {
    /// Create a monitor that checks at most once per `period_secs`
    pub fn new(period_secs: u32) -> Self {
        Self {
            period_secs,
            last_checked: None,
        }
    }

    /// Time of the last completed pass
    pub fn last_checked(&self) -> Option<u32> {
        self.last_checked
    }

    /// True if a pass should run at `now`
    ///
    /// The first call always returns true; afterwards the period must be
    /// strictly exceeded.
    pub fn is_due(&self, now: u32) -> bool {
        match self.last_checked {
            None => true,
            Some(last) => u64::from(last) + u64::from(self.period_secs) < u64::from(now),
        }
    }

    /// Run a pass if the period has elapsed
    ///
    /// Returns `Ok(None)` when skipped.
    pub fn poll<E, G>(
        &mut self,
        registry: &PlantRegistry<E>,
        pins: &mut [G],
        now: u32,
    ) -> Result<Option<CheckReport>>
    where
        E: EepromInterface,
        G: GpioInterface,
    {
        if !self.is_due(now) {
            return Ok(None);
        }
        self.check(registry, pins, now).map(Some)
    }

    /// Poll using the current time from `clock`
    pub fn tick<E, G, C>(
        &mut self,
        registry: &PlantRegistry<E>,
        pins: &mut [G],
        clock: &C,
    ) -> Result<Option<CheckReport>>
    where
        E: EepromInterface,
        G: GpioInterface,
        C: ClockSource,
    {
        self.poll(registry, pins, clock.now_epoch())
    }

    /// Run a pass unconditionally
    ///
    /// Pin `i` goes high when slot `i` needs water and low otherwise, including
    /// for empty slots. Slots without a pin are still reported.
    pub fn check<E, G>(
        &mut self,
        registry: &PlantRegistry<E>,
        pins: &mut [G],
        now: u32,
    ) -> Result<CheckReport>
    where
        E: EepromInterface,
        G: GpioInterface,
    {
        let mut report = CheckReport {
            checked_at: now,
            due: heapless::Vec::new(),
        };

        for slot in 0..MAX_PLANTS {
            let due = registry.needs_watering(slot, now);
            if due {
                if let Some(plant) = registry.get(slot) {
                    crate::log_info!("{} needs water!", plant.name.as_str());
                }
                let _ = report.due.push(slot);
            }
            if let Some(pin) = pins.get_mut(slot) {
                pin.set_state(due)?;
            }
        }

        self.last_checked = Some(now);
        Ok(report)
    }

    /// Turn off the indicator for `slot` (after watering or deleting it)
    pub fn acknowledge<G: GpioInterface>(&self, pins: &mut [G], slot: usize) -> Result<()> {
        match pins.get_mut(slot) {
            Some(pin) => pin.set_low(),
            None => Ok(()),
        }
    }
}

impl Default for WateringMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_CHECK_PERIOD_SECS)
    }
}
