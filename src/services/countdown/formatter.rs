//! Interval arithmetic and display strings for countdown rows.
//!
//! Nothing here reads the clock: callers pass the reference instant so the
//! same functions serve the live display and deterministic tests.

use chrono::{DateTime, Duration, Utc};

use crate::models::countdown::DisplayMode;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Signed interval from `now` to `target`. Positive when the target is in
/// the future (counting down), negative once it has passed (counting up).
pub fn signed_interval(target: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    target.signed_duration_since(now)
}

/// Whole-unit breakdown of an interval's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl IntervalParts {
    /// Splits `|duration|` into days, hours, minutes and seconds. Fractional
    /// seconds are truncated, never rounded.
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_seconds(duration.num_seconds().unsigned_abs())
    }

    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total / SECONDS_PER_HOUR) % 24,
            minutes: (total / SECONDS_PER_MINUTE) % 60,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// Formats the magnitude of `duration` for `mode`, e.g. `"3 days"`,
/// `"2 days, 5 hr"` or `"1 day, 2 hr, 30 min, 45 sec"`. The sign is not part
/// of the string; callers show "until"/"since" separately.
pub fn format_interval(duration: Duration, mode: DisplayMode) -> String {
    let parts = IntervalParts::from_duration(duration);

    // Only days are pluralised; the short labels stay fixed.
    let day_label = if parts.days == 1 { "day" } else { "days" };
    let days = format!("{} {}", parts.days, day_label);
    let hours = format!("{} hr", parts.hours);

    match mode {
        DisplayMode::DayOnly => days,
        DisplayMode::HoursOnly => {
            if parts.days > 0 {
                format!("{days}, {hours}")
            } else {
                hours
            }
        }
        DisplayMode::Full => {
            let segments = [
                days,
                hours,
                format!("{} min", parts.minutes),
                format!("{} sec", parts.seconds),
            ];
            let first = if parts.days > 0 {
                0
            } else if parts.hours > 0 {
                1
            } else if parts.minutes > 0 {
                2
            } else {
                3
            };
            segments[first..].join(", ")
        }
    }
}

/// Formats the interval between `now` and `target` in one step.
pub fn format_until(target: DateTime<Utc>, now: DateTime<Utc>, mode: DisplayMode) -> String {
    format_interval(signed_interval(target, now), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, DisplayMode::Full, "0 sec" ; "zero full")]
    #[test_case(0, DisplayMode::DayOnly, "0 days" ; "zero days only")]
    #[test_case(0, DisplayMode::HoursOnly, "0 hr" ; "zero hours only")]
    #[test_case(90_061, DisplayMode::Full, "1 day, 1 hr, 1 min, 1 sec" ; "one of each full")]
    #[test_case(90_061, DisplayMode::DayOnly, "1 day" ; "one of each days only")]
    #[test_case(90_061, DisplayMode::HoursOnly, "1 day, 1 hr" ; "one of each hours only")]
    #[test_case(3_661, DisplayMode::HoursOnly, "1 hr" ; "days omitted when zero")]
    #[test_case(3_661, DisplayMode::Full, "1 hr, 1 min, 1 sec" ; "hour prefix")]
    #[test_case(61, DisplayMode::Full, "1 min, 1 sec" ; "minute prefix")]
    #[test_case(59, DisplayMode::Full, "59 sec" ; "seconds only")]
    #[test_case(86_400, DisplayMode::Full, "1 day, 0 hr, 0 min, 0 sec" ; "no skipped units")]
    #[test_case(3_600, DisplayMode::Full, "1 hr, 0 min, 0 sec" ; "zero tail after hours")]
    #[test_case(172_800, DisplayMode::DayOnly, "2 days" ; "plural days")]
    #[test_case(7_200, DisplayMode::HoursOnly, "2 hr" ; "hour label fixed")]
    #[test_case(-90_061, DisplayMode::Full, "1 day, 1 hr, 1 min, 1 sec" ; "negative uses magnitude")]
    fn formats_seconds(seconds: i64, mode: DisplayMode, expected: &str) {
        assert_eq!(format_interval(Duration::seconds(seconds), mode), expected);
    }

    #[test]
    fn fractional_seconds_truncate() {
        let duration = Duration::milliseconds(59_999);
        assert_eq!(format_interval(duration, DisplayMode::Full), "59 sec");
        assert_eq!(format_interval(-duration, DisplayMode::Full), "59 sec");
    }

    #[test]
    fn extreme_durations_are_formattable() {
        for duration in [Duration::max_value(), Duration::min_value()] {
            for mode in DisplayMode::ALL {
                assert!(!format_interval(duration, mode).is_empty());
            }
        }
    }

    #[test]
    fn signed_interval_sign_follows_direction() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let later = now + Duration::hours(5);

        assert_eq!(signed_interval(later, now), Duration::hours(5));
        assert_eq!(signed_interval(now, later), Duration::hours(-5));
        assert_eq!(signed_interval(now, now), Duration::zero());
    }

    #[test]
    fn format_until_uses_supplied_now() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let target = now + Duration::days(3) + Duration::hours(5);

        assert_eq!(format_until(target, now, DisplayMode::HoursOnly), "3 days, 5 hr");
        assert_eq!(format_until(now, target, DisplayMode::DayOnly), "3 days");
    }

    #[test]
    fn parts_reconstruct_total() {
        let parts = IntervalParts::from_seconds(90_061);
        assert_eq!(
            parts,
            IntervalParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(parts.total_seconds(), 90_061);
    }
}
