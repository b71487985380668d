//! Fixed-interval refresh ticks for the live countdown display.
//!
//! The ticker is polled rather than threaded: the UI asks whether a tick is
//! due on each frame and how long it may sleep until the next one.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_REFRESH_INTERVAL: StdDuration = StdDuration::from_secs(1);

#[derive(Debug, Clone)]
pub struct RefreshTicker {
    interval: Duration,
    last_tick: Option<DateTime<Utc>>,
}

impl Default for RefreshTicker {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

impl RefreshTicker {
    pub fn new(interval: StdDuration) -> Self {
        let interval = Duration::from_std(interval)
            .ok()
            .filter(|d| *d > Duration::zero())
            .unwrap_or_else(|| Duration::seconds(1));
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Returns true when a refresh is due at `now` and records it. The first
    /// call always ticks; a clock that jumped backwards ticks immediately.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now < last || now - last >= self.interval,
        };
        if due {
            self.last_tick = Some(now);
        }
        due
    }

    /// How long the caller may wait before the next tick is due.
    pub fn time_until_next(&self, now: DateTime<Utc>) -> StdDuration {
        let Some(last) = self.last_tick else {
            return StdDuration::ZERO;
        };
        if now < last {
            return StdDuration::ZERO;
        }
        (last + self.interval - now)
            .to_std()
            .unwrap_or(StdDuration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn first_poll_ticks() {
        let mut ticker = RefreshTicker::default();
        assert_eq!(ticker.time_until_next(start()), StdDuration::ZERO);
        assert!(ticker.tick_at(start()));
    }

    #[test]
    fn ticks_once_per_interval() {
        let mut ticker = RefreshTicker::default();
        let t0 = start();
        assert!(ticker.tick_at(t0));
        assert!(!ticker.tick_at(t0 + Duration::milliseconds(400)));
        assert_eq!(
            ticker.time_until_next(t0 + Duration::milliseconds(400)),
            StdDuration::from_millis(600)
        );
        assert!(ticker.tick_at(t0 + Duration::seconds(1)));
        assert!(!ticker.tick_at(t0 + Duration::milliseconds(1500)));
        assert!(ticker.tick_at(t0 + Duration::seconds(5)));
    }

    #[test]
    fn clock_going_backwards_ticks() {
        let mut ticker = RefreshTicker::default();
        let t0 = start();
        ticker.tick_at(t0);
        assert_eq!(
            ticker.time_until_next(t0 - Duration::seconds(10)),
            StdDuration::ZERO
        );
        assert!(ticker.tick_at(t0 - Duration::seconds(10)));
    }

    #[test]
    fn zero_interval_falls_back_to_one_second() {
        let mut ticker = RefreshTicker::new(StdDuration::ZERO);
        assert!(ticker.tick_at(start()));
        assert_eq!(ticker.time_until_next(start()), StdDuration::from_secs(1));
    }
}
