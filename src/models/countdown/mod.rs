use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for a countdown. Assigned once when the entry is created
/// and never reassigned, including across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountdownId(pub Uuid);

impl CountdownId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CountdownId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CountdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How much of the remaining interval a countdown shows.
///
/// Persisted as `"dayOnly"`, `"hoursOnly"` or `"full"`; any other string is
/// rejected when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    DayOnly,
    HoursOnly,
    #[default]
    Full,
}

impl DisplayMode {
    /// All modes in picker order.
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::DayOnly,
        DisplayMode::HoursOnly,
        DisplayMode::Full,
    ];

    /// Label shown in the display mode picker
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::DayOnly => "Days only",
            DisplayMode::HoursOnly => "Days & hours",
            DisplayMode::Full => "Full (days, hrs, min, sec)",
        }
    }
}

/// Whether a countdown is counting down to its target or up from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Target is still in the future
    Until,
    /// Target has been reached or passed
    Since,
}

impl Direction {
    /// Derive the direction of `target` relative to `now`. A target equal to
    /// `now` has been reached and counts up.
    pub fn of(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if target > now {
            Direction::Until
        } else {
            Direction::Since
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Until => "until",
            Direction::Since => "since",
        }
    }

    pub fn is_count_up(&self) -> bool {
        matches!(self, Direction::Since)
    }
}

/// A single countdown (or count-up) to a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub id: CountdownId,
    pub title: String,
    /// Written as RFC 3339. Older records stored seconds since 2001-01-01.
    #[serde(deserialize_with = "deserialize_target_date")]
    pub target_date: DateTime<Utc>,
    pub display_mode: DisplayMode,
    /// Explicit direction stored by the older schema. New entries never carry
    /// it; decoded entries keep it until the user re-saves them.
    #[serde(rename = "isCountUp", default, skip_serializing_if = "Option::is_none")]
    pub legacy_count_up: Option<bool>,
}

impl Countdown {
    /// Creates a countdown with a fresh identifier.
    pub fn new(
        title: impl Into<String>,
        target_date: DateTime<Utc>,
        display_mode: DisplayMode,
    ) -> Self {
        Self {
            id: CountdownId::new(),
            title: title.into(),
            target_date,
            display_mode,
            legacy_count_up: None,
        }
    }

    pub fn direction(&self, now: DateTime<Utc>) -> Direction {
        Direction::of(self.target_date, now)
    }

    /// True when a legacy `isCountUp` flag disagrees with the direction
    /// derived from the target date at `now`.
    pub fn has_direction_conflict(&self, now: DateTime<Utc>) -> bool {
        self.legacy_count_up
            .is_some_and(|stored| stored != self.direction(now).is_count_up())
    }

    /// Drops the legacy direction flag once the user has confirmed the entry.
    pub fn acknowledge_direction(&mut self) {
        self.legacy_count_up = None;
    }
}

/// Unix time of 2001-01-01T00:00:00Z, the epoch of numeric target dates.
const REFERENCE_DATE_UNIX_SECONDS: i64 = 978_307_200;

fn deserialize_target_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TargetDate {
        Rfc3339(DateTime<Utc>),
        ReferenceSeconds(f64),
    }

    match TargetDate::deserialize(deserializer)? {
        TargetDate::Rfc3339(date) => Ok(date),
        TargetDate::ReferenceSeconds(seconds) => {
            let millis = (seconds * 1000.0).round();
            // Keeps the cast below lossless; chrono rejects anything larger anyway
            if !millis.is_finite() || millis.abs() > 1e17 {
                return Err(serde::de::Error::custom(format!(
                    "targetDate out of range: {seconds}"
                )));
            }
            Utc.timestamp_millis_opt(REFERENCE_DATE_UNIX_SECONDS * 1000 + millis as i64)
                .single()
                .ok_or_else(|| {
                    serde::de::Error::custom(format!("targetDate out of range: {seconds}"))
                })
        }
    }
}
