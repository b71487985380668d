// Test fixtures - reusable test data
// Provides consistent countdowns across all test files

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use ::countdowns::models::countdown::{Countdown, DisplayMode};

/// Sample instants for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025 at midnight UTC
    pub fn jan_1_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// Returns Dec 25, 2025 at 07:00 UTC
    pub fn christmas_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 25, 7, 0, 0).unwrap()
    }

    /// Returns Feb 29, 2024 at noon UTC (leap year)
    pub fn leap_day_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }
}

/// Sample countdowns for testing
pub mod countdowns {
    use super::*;

    pub fn christmas() -> Countdown {
        Countdown::new("Christmas", dates::christmas_2025(), DisplayMode::DayOnly)
    }

    pub fn leap_day() -> Countdown {
        Countdown::new("Leap day", dates::leap_day_2024(), DisplayMode::Full)
    }

    pub fn numbered(i: usize) -> Countdown {
        Countdown::new(
            format!("Countdown {i}"),
            dates::jan_1_2025() + chrono::Duration::hours(i as i64),
            DisplayMode::HoursOnly,
        )
    }
}
