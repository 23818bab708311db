//! Wall-clock abstraction for watering arithmetic.
//!
//! Registry operations take "now" as a plain parameter; this trait is what the
//! surrounding firmware hands around to produce that value.

use core::cell::Cell;

/// Source of the current time in epoch seconds.
///
/// Implementations are fed by the time synchronization collaborator. Before the
/// first successful sync a source returns `0`; nothing downstream special-cases
/// that value.
///
/// # Example
///
/// ```
/// use plant_reminder::core::traits::{ClockSource, MockClock};
///
/// let clock = MockClock::with_initial(1_700_000_000);
/// clock.advance(60);
/// assert_eq!(clock.now_epoch(), 1_700_000_060);
/// ```
pub trait ClockSource {
    /// Current time in seconds since the Unix epoch.
    fn now_epoch(&self) -> u32;

    /// Seconds elapsed since `reference`, saturating at zero.
    fn elapsed_since(&self, reference: u32) -> u32 {
        self.now_epoch().saturating_sub(reference)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Clock with manually controlled time.
#[derive(Clone, Default)]
pub struct MockClock {
    current: Cell<u32>,
}

impl MockClock {
    /// Creates a clock stuck at the epoch, like an unsynchronized device.
    pub fn new() -> Self {
        Self {
            current: Cell::new(0),
        }
    }

    /// Creates a clock starting at `epoch`.
    pub fn with_initial(epoch: u32) -> Self {
        Self {
            current: Cell::new(epoch),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, epoch: u32) {
        self.current.set(epoch);
    }

    /// Advances the current time by `secs`.
    pub fn advance(&self, secs: u32) {
        self.current.set(self.current.get().saturating_add(secs));
    }
}

impl ClockSource for MockClock {
    fn now_epoch(&self) -> u32 {
        self.current.get()
    }
}
