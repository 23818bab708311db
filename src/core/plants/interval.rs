//! Watering interval units and entry helpers

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: u32 = 60;
/// Seconds in one hour
pub const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;
/// Seconds in one week
pub const SECONDS_PER_WEEK: u32 = 7 * SECONDS_PER_DAY;
/// Seconds in one display month (fixed 30 days)
pub const SECONDS_PER_MONTH: u32 = 30 * SECONDS_PER_DAY;

/// Interval substituted when a plant is created with a zero interval (1 day)
pub const DEFAULT_INTERVAL_SECS: u32 = SECONDS_PER_DAY;

/// Combine the add-plant form fields into an interval in seconds
///
/// Saturates at `u32::MAX` instead of wrapping. A zero result is passed through;
/// the registry substitutes [`DEFAULT_INTERVAL_SECS`] on create.
///
/// # Example
///
/// ```
/// use plant_reminder::core::plants::interval::interval_from_parts;
///
/// assert_eq!(interval_from_parts(1, 2, 3, 4), 788_640);
/// ```
pub fn interval_from_parts(weeks: u32, days: u32, hours: u32, minutes: u32) -> u32 {
    weeks
        .saturating_mul(SECONDS_PER_WEEK)
        .saturating_add(days.saturating_mul(SECONDS_PER_DAY))
        .saturating_add(hours.saturating_mul(SECONDS_PER_HOUR))
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
}

/// Interval split into display components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalParts {
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl IntervalParts {
    /// Plain duration decomposition with fixed unit sizes; leftover seconds are dropped
    pub fn from_secs(secs: u32) -> Self {
        let months = secs / SECONDS_PER_MONTH;
        let rest = secs % SECONDS_PER_MONTH;
        let days = rest / SECONDS_PER_DAY;
        let rest = rest % SECONDS_PER_DAY;

        Self {
            months,
            days,
            hours: rest / SECONDS_PER_HOUR,
            minutes: (rest % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        }
    }

    /// True if every component is zero
    pub fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.hours == 0 && self.minutes == 0
    }
}
