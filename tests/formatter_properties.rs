// Property-based tests for interval formatting

use chrono::Duration;
use proptest::prelude::*;

use countdowns::models::countdown::DisplayMode;
use countdowns::services::countdown::{format_interval, IntervalParts};

// Roughly ±30,000 years in seconds, well inside chrono's range
const MAX_SECONDS: i64 = 1_000_000_000_000;

fn display_mode() -> impl Strategy<Value = DisplayMode> {
    prop_oneof![
        Just(DisplayMode::DayOnly),
        Just(DisplayMode::HoursOnly),
        Just(DisplayMode::Full),
    ]
}

proptest! {
    /// Property: the decomposition always reconstructs the whole seconds
    #[test]
    fn prop_parts_reconstruct_seconds(seconds in 0..=MAX_SECONDS) {
        let parts = IntervalParts::from_duration(Duration::seconds(seconds));
        prop_assert_eq!(parts.total_seconds(), seconds as u64);
        prop_assert!(parts.hours < 24);
        prop_assert!(parts.minutes < 60);
        prop_assert!(parts.seconds < 60);
    }

    /// Property: direction never changes the text
    #[test]
    fn prop_sign_is_ignored(seconds in 0..=MAX_SECONDS, mode in display_mode()) {
        prop_assert_eq!(
            format_interval(Duration::seconds(seconds), mode),
            format_interval(Duration::seconds(-seconds), mode)
        );
    }

    /// Property: sub-second remainders are truncated
    #[test]
    fn prop_fraction_truncates(seconds in 0..=MAX_SECONDS, millis in 0..1000i64, mode in display_mode()) {
        let whole = Duration::seconds(seconds);
        prop_assert_eq!(
            format_interval(whole + Duration::milliseconds(millis), mode),
            format_interval(whole, mode)
        );
    }

    /// Property: full mode always ends in seconds and never skips a unit
    #[test]
    fn prop_full_mode_is_contiguous(seconds in 0..=MAX_SECONDS) {
        let text = format_interval(Duration::seconds(seconds), DisplayMode::Full);
        let labels: Vec<&str> = text
            .split(", ")
            .map(|segment| segment.split(' ').nth(1).unwrap_or(""))
            .collect();

        let order = ["day", "hr", "min", "sec"];
        let start = order.len() - labels.len();
        for (label, expected) in labels.iter().zip(&order[start..]) {
            prop_assert!(label.starts_with(expected), "{} in {}", label, text);
        }
    }

    /// Property: days-only output is just the day count
    #[test]
    fn prop_day_only_matches_days(seconds in 0..=MAX_SECONDS) {
        let days = seconds / 86_400;
        let expected = if days == 1 { "1 day".to_string() } else { format!("{days} days") };
        prop_assert_eq!(format_interval(Duration::seconds(seconds), DisplayMode::DayOnly), expected);
    }
}
