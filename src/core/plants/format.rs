//! Human-readable watering status
//!
//! Pure functions of a plant's fields plus display options. Timestamps are
//! stored UTC-naive; the configured offset is applied here and nowhere else.

use core::fmt::Write;

use heapless::String;
use time::OffsetDateTime;

use super::interval::IntervalParts;
use super::plant::{Plant, PlantName};

/// Capacity of a formatted timestamp
pub const TIMESTAMP_LEN: usize = 32;
/// Capacity of a formatted interval
pub const INTERVAL_LEN: usize = 64;

/// Formatted timestamp ("19 October 2026 14:05")
pub type TimestampText = String<TIMESTAMP_LEN>;
/// Formatted interval ("1 month, 2 days")
pub type IntervalText = String<INTERVAL_LEN>;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Locale {
    #[default]
    English,
    Dutch,
}

/// How intervals are broken down for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntervalStyle {
    /// Fixed unit sizes (30-day months)
    #[default]
    Duration,
    /// Interval read as a calendar date past the epoch, matching older firmware
    /// output. Drifts for intervals longer than a year.
    Calendar,
}

/// Display settings for the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayOptions {
    /// Offset added to stored timestamps before display (seconds)
    pub utc_offset_secs: i32,
    pub locale: Locale,
    pub interval_style: IntervalStyle,
}

struct Unit {
    singular: &'static str,
    plural: &'static str,
}

struct Words {
    months: [&'static str; 12],
    month: Unit,
    day: Unit,
    hour: Unit,
    minute: Unit,
}

static ENGLISH: Words = Words {
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month: Unit {
        singular: "month",
        plural: "months",
    },
    day: Unit {
        singular: "day",
        plural: "days",
    },
    hour: Unit {
        singular: "hour",
        plural: "hours",
    },
    minute: Unit {
        singular: "minute",
        plural: "minutes",
    },
};

static DUTCH: Words = Words {
    months: [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ],
    month: Unit {
        singular: "maand",
        plural: "maanden",
    },
    day: Unit {
        singular: "dag",
        plural: "dagen",
    },
    hour: Unit {
        singular: "uur",
        plural: "uur",
    },
    minute: Unit {
        singular: "minuut",
        plural: "minuten",
    },
};

impl Locale {
    fn words(self) -> &'static Words {
        match self {
            Locale::English => &ENGLISH,
            Locale::Dutch => &DUTCH,
        }
    }
}

/// Calendar fields of a timestamp; out-of-range values clamp to the epoch
fn calendar(timestamp: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(timestamp).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

fn format_instant(timestamp: u64, opts: &DisplayOptions) -> TimestampText {
    let local = calendar(timestamp as i64 + i64::from(opts.utc_offset_secs));
    let month_index = usize::from(u8::from(local.month())) - 1;

    let mut out = TimestampText::new();
    let _ = write!(
        out,
        "{} {} {} {:02}:{:02}",
        local.day(),
        opts.locale.words().months[month_index],
        local.year(),
        local.hour(),
        local.minute()
    );
    out
}

/// Format an epoch timestamp as "day Month year HH:MM"
///
/// # Example
///
/// ```
/// use plant_reminder::core::plants::format::{format_timestamp, DisplayOptions};
///
/// let text = format_timestamp(1_637_611_741, &DisplayOptions::default());
/// assert_eq!(text.as_str(), "22 November 2021 20:09");
/// ```
pub fn format_timestamp(epoch: u32, opts: &DisplayOptions) -> TimestampText {
    format_instant(u64::from(epoch), opts)
}

/// When the plant was last watered
pub fn format_last_watered(plant: &Plant, opts: &DisplayOptions) -> TimestampText {
    format_timestamp(plant.last_watered, opts)
}

/// When the plant is next due
pub fn format_next_watering(plant: &Plant, opts: &DisplayOptions) -> TimestampText {
    format_instant(plant.next_watering(), opts)
}

/// The watering cadence broken into months, days, hours and minutes
pub fn format_interval(plant: &Plant, opts: &DisplayOptions) -> IntervalText {
    format_interval_secs(plant.interval_secs, opts)
}

/// Interval formatting on a raw number of seconds
pub fn format_interval_secs(secs: u32, opts: &DisplayOptions) -> IntervalText {
    let words = opts.locale.words();
    let mut out = IntervalText::new();

    match opts.interval_style {
        IntervalStyle::Duration => {
            let parts = IntervalParts::from_secs(secs);
            if parts.is_zero() {
                push_component(&mut out, 0, &words.minute, false);
                return out;
            }
            for (value, unit) in [
                (parts.months, &words.month),
                (parts.days, &words.day),
                (parts.hours, &words.hour),
                (parts.minutes, &words.minute),
            ] {
                if value > 0 {
                    push_component(&mut out, value, unit, false);
                }
            }
        }
        IntervalStyle::Calendar => {
            // Each field counts only when it exceeds 1, as the old display did
            let date = calendar(i64::from(secs));
            let month = u32::from(u8::from(date.month()));
            let day = u32::from(date.day());
            let hour = u32::from(date.hour());
            let minute = u32::from(date.minute());

            if month > 1 {
                push_component(&mut out, month - 1, &words.month, true);
            }
            if day > 1 {
                push_component(&mut out, day - 1, &words.day, true);
            }
            if hour > 1 {
                push_component(&mut out, hour, &words.hour, true);
            }
            if minute > 1 {
                push_component(&mut out, minute, &words.minute, true);
            }
        }
    }

    out
}

fn push_component(out: &mut IntervalText, value: u32, unit: &Unit, always_plural: bool) {
    if !out.is_empty() {
        let _ = out.push_str(", ");
    }
    let word = if value == 1 && !always_plural {
        unit.singular
    } else {
        unit.plural
    };
    let _ = write!(out, "{} {}", value, word);
}

/// Everything the plant list page shows for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantStatus {
    pub slot: usize,
    pub name: PlantName,
    pub last_watered: TimestampText,
    pub next_watering: TimestampText,
    pub interval: IntervalText,
    pub needs_watering: bool,
}

/// Build the display status of a plant at `now`
pub fn describe(plant: &Plant, now: u32, opts: &DisplayOptions) -> PlantStatus {
    PlantStatus {
        slot: plant.slot,
        name: plant.name.clone(),
        last_watered: format_last_watered(plant, opts),
        next_watering: format_next_watering(plant, opts),
        interval: format_interval(plant, opts),
        needs_watering: plant.needs_watering(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plants::interval::{
        SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH,
    };

    fn utc() -> DisplayOptions {
        DisplayOptions::default()
    }

    fn calendar_style(locale: Locale) -> DisplayOptions {
        DisplayOptions {
            utc_offset_secs: 0,
            locale,
            interval_style: IntervalStyle::Calendar,
        }
    }

    #[test]
    fn test_format_timestamp_epoch() {
        assert_eq!(format_timestamp(0, &utc()).as_str(), "1 January 1970 00:00");
    }

    #[test]
    fn test_format_timestamp_pads_hour_and_minute() {
        // 2022-03-05 07:04:00 UTC
        let text = format_timestamp(1_646_463_840, &utc());
        assert_eq!(text.as_str(), "5 March 2022 07:04");
    }

    #[test]
    fn test_format_timestamp_applies_offset() {
        let opts = DisplayOptions {
            utc_offset_secs: 3_600,
            ..utc()
        };
        assert_eq!(format_timestamp(0, &opts).as_str(), "1 January 1970 01:00");
    }

    #[test]
    fn test_format_timestamp_dutch_month() {
        let opts = DisplayOptions {
            locale: Locale::Dutch,
            ..utc()
        };
        assert_eq!(format_timestamp(1_646_463_840, &opts).as_str(), "5 maart 2022 07:04");
    }

    #[test]
    fn test_last_and_next_watering() {
        let mut plant = Plant::new(0, "Basil", 0, SECONDS_PER_DAY + 90 * SECONDS_PER_MINUTE);
        plant.last_watered = 0;

        assert_eq!(
            format_last_watered(&plant, &utc()).as_str(),
            "1 January 1970 00:00"
        );
        assert_eq!(
            format_next_watering(&plant, &utc()).as_str(),
            "2 January 1970 01:30"
        );
    }

    #[test]
    fn test_next_watering_past_u32_range() {
        let plant = Plant::new(0, "Oak", u32::MAX, SECONDS_PER_DAY);
        // 2106-02-07 06:28:15 UTC plus one day
        assert_eq!(
            format_next_watering(&plant, &utc()).as_str(),
            "8 February 2106 06:28"
        );
    }

    #[test]
    fn test_interval_duration_style() {
        let secs = SECONDS_PER_MONTH + 2 * SECONDS_PER_DAY + SECONDS_PER_HOUR + 15 * 60;
        assert_eq!(
            format_interval_secs(secs, &utc()).as_str(),
            "1 month, 2 days, 1 hour, 15 minutes"
        );
        assert_eq!(
            format_interval_secs(SECONDS_PER_DAY, &utc()).as_str(),
            "1 day"
        );
        assert_eq!(
            format_interval_secs(3 * SECONDS_PER_HOUR, &utc()).as_str(),
            "3 hours"
        );
    }

    #[test]
    fn test_interval_duration_below_minute() {
        assert_eq!(format_interval_secs(30, &utc()).as_str(), "0 minutes");
    }

    #[test]
    fn test_interval_duration_dutch() {
        let opts = DisplayOptions {
            locale: Locale::Dutch,
            ..utc()
        };
        let secs = 2 * SECONDS_PER_DAY + SECONDS_PER_HOUR + 60;
        assert_eq!(
            format_interval_secs(secs, &opts).as_str(),
            "2 dagen, 1 uur, 1 minuut"
        );
    }

    #[test]
    fn test_interval_calendar_style() {
        // 9 days 10 hours 30 minutes past the epoch -> 10 January 10:30
        let secs = 9 * SECONDS_PER_DAY + 10 * SECONDS_PER_HOUR + 30 * 60;
        assert_eq!(
            format_interval_secs(secs, &calendar_style(Locale::Dutch)).as_str(),
            "9 dagen, 10 uur, 30 minuten"
        );
    }

    #[test]
    fn test_interval_calendar_style_skips_ones() {
        // Exactly one day: day field is 2, hour and minute are 0
        assert_eq!(
            format_interval_secs(SECONDS_PER_DAY, &calendar_style(Locale::English)).as_str(),
            "1 days"
        );
        // One hour: hour field is 1, which the calendar display drops
        assert_eq!(
            format_interval_secs(SECONDS_PER_HOUR, &calendar_style(Locale::English)).as_str(),
            ""
        );
    }

    #[test]
    fn test_interval_calendar_style_months() {
        // 40 days past the epoch -> 10 February
        assert_eq!(
            format_interval_secs(40 * SECONDS_PER_DAY, &calendar_style(Locale::English))
                .as_str(),
            "1 months, 9 days"
        );
    }

    #[test]
    fn test_describe() {
        let plant = Plant::new(4, "Mint", 1_000, 500);
        let status = describe(&plant, 1_501, &utc());

        assert_eq!(status.slot, 4);
        assert_eq!(status.name.as_str(), "Mint");
        assert!(status.needs_watering);
        assert_eq!(status.interval.as_str(), "8 minutes");

        let status = describe(&plant, 1_500, &utc());
        assert!(!status.needs_watering);
    }
}
