//! Reminder Parameter Definitions
//!
//! Display and polling settings for the plant reminder.
//!
//! # Parameters
//!
//! - `PLANT_UTC_OFFSET` - Offset added to timestamps for display (seconds)
//! - `PLANT_CHECK_PERIOD` - Minimum seconds between watering checks
//! - `PLANT_LOCALE` - Display language (`en` or `nl`)
//! - `PLANT_INTERVAL_STYLE` - Interval breakdown (`duration` or `calendar`)
//!
//! Defaults are baked in at build time by `build.rs` and can be overridden by
//! setting the variables in the build environment.

use crate::core::plants::format::{DisplayOptions, IntervalStyle, Locale};
use crate::core::plants::monitor::{WateringMonitor, DEFAULT_CHECK_PERIOD_SECS};

/// Display offset used when the configured value does not parse (CET)
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 3_600;

/// Reminder parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReminderParams {
    /// Offset added to stored timestamps before display
    pub utc_offset_secs: i32,
    /// Minimum seconds between watering checks
    pub check_period_secs: u32,
    /// Display language
    pub locale: Locale,
    /// Interval breakdown
    pub interval_style: IntervalStyle,
}

impl Default for ReminderParams {
    fn default() -> Self {
        Self {
            utc_offset_secs: DEFAULT_UTC_OFFSET_SECS,
            check_period_secs: DEFAULT_CHECK_PERIOD_SECS,
            locale: Locale::English,
            interval_style: IntervalStyle::Duration,
        }
    }
}

impl ReminderParams {
    /// Load parameters from the build-time environment
    pub fn from_env() -> Self {
        Self::parse(
            env!("PLANT_UTC_OFFSET"),
            env!("PLANT_CHECK_PERIOD"),
            env!("PLANT_LOCALE"),
            env!("PLANT_INTERVAL_STYLE"),
        )
    }

    /// Parse raw parameter strings, falling back to defaults field by field
    pub fn parse(utc_offset: &str, check_period: &str, locale: &str, interval_style: &str) -> Self {
        let defaults = Self::default();

        let utc_offset_secs = utc_offset.trim().parse::<i32>().unwrap_or_else(|_| {
            crate::log_warn!("Invalid PLANT_UTC_OFFSET, using default");
            defaults.utc_offset_secs
        });

        let check_period_secs = check_period.trim().parse::<u32>().unwrap_or_else(|_| {
            crate::log_warn!("Invalid PLANT_CHECK_PERIOD, using default");
            defaults.check_period_secs
        });

        let locale = match locale.trim() {
            "nl" | "NL" | "nl_NL" => Locale::Dutch,
            "en" | "EN" | "en_US" | "en_GB" | "" => Locale::English,
            _ => {
                crate::log_warn!("Unknown PLANT_LOCALE, using English");
                defaults.locale
            }
        };

        let interval_style = match interval_style.trim() {
            "calendar" => IntervalStyle::Calendar,
            "duration" | "" => IntervalStyle::Duration,
            _ => {
                crate::log_warn!("Unknown PLANT_INTERVAL_STYLE, using duration");
                defaults.interval_style
            }
        };

        Self {
            utc_offset_secs,
            check_period_secs,
            locale,
            interval_style,
        }
    }

    /// Formatter settings derived from these parameters
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            utc_offset_secs: self.utc_offset_secs,
            locale: self.locale,
            interval_style: self.interval_style,
        }
    }

    /// Watering monitor using the configured check period
    pub fn monitor(&self) -> WateringMonitor {
        WateringMonitor::new(self.check_period_secs)
    }
}
