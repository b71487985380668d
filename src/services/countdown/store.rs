use chrono::{DateTime, Utc};

use super::events::{StoreEvent, Subscribers, SubscriptionId};
use super::persistence::{decode_countdowns, encode_countdowns};
use crate::models::countdown::{Countdown, CountdownId};
use crate::services::preferences::PreferenceStore;

/// Maximum number of countdowns without premium.
pub const FREE_LIMIT: usize = 3;
/// Maximum number of countdowns with premium.
pub const PREMIUM_LIMIT: usize = 10;

/// Preference key holding the serialized collection.
pub const COUNTDOWNS_KEY: &str = "countdowns";
/// Preference key holding the premium flag.
pub const PREMIUM_KEY: &str = "isPremium";

/// Owns the ordered countdown collection and mirrors it to a preference
/// store after every change.
///
/// Persistence is best effort: decode failures start from an empty list and
/// write failures are logged and skipped. Nothing here returns an error.
pub struct CountdownStore {
    countdowns: Vec<Countdown>,
    is_premium: bool,
    preferences: Box<dyn PreferenceStore>,
    subscribers: Subscribers,
}

impl CountdownStore {
    /// Reads the premium flag and the persisted collection.
    pub fn new(preferences: Box<dyn PreferenceStore>) -> Self {
        let is_premium = preferences.get_bool(PREMIUM_KEY).unwrap_or_else(|err| {
            log::warn!("Failed to read premium flag, assuming free tier: {err:#}");
            false
        });

        let mut store = Self {
            countdowns: Vec::new(),
            is_premium,
            preferences,
            subscribers: Subscribers::default(),
        };
        store.load();
        store
    }

    /// Replaces the in-memory collection with the persisted one. Anything that
    /// cannot be decoded is treated as "no data yet".
    pub fn load(&mut self) {
        self.countdowns = match self.preferences.get(COUNTDOWNS_KEY) {
            Ok(Some(data)) => match decode_countdowns(&data) {
                Ok(countdowns) => countdowns,
                Err(err) => {
                    log::warn!("Discarding unreadable countdowns: {err}");
                    Vec::new()
                }
            },
            Ok(None) => {
                log::debug!("No saved countdowns yet");
                Vec::new()
            }
            Err(err) => {
                log::warn!("Failed to read saved countdowns: {err:#}");
                Vec::new()
            }
        };

        log::info!("Loaded {} countdown(s)", self.countdowns.len());
        self.log_direction_conflicts(Utc::now());
        self.subscribers.notify(&StoreEvent::Loaded {
            count: self.countdowns.len(),
        });
    }

    /// Writes the whole collection. On failure the previously persisted value
    /// stays in place.
    pub fn save(&mut self) {
        let data = match encode_countdowns(&self.countdowns) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Skipping save: {err}");
                return;
            }
        };

        if let Err(err) = self.preferences.set(COUNTDOWNS_KEY, &data) {
            log::warn!("Failed to save countdowns: {err:#}");
        }
    }

    pub fn countdowns(&self) -> &[Countdown] {
        &self.countdowns
    }

    pub fn get(&self, id: CountdownId) -> Option<&Countdown> {
        self.countdowns.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.countdowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countdowns.is_empty()
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    /// Stores the premium flag under its own key. The limit changes at once;
    /// entries already stored are left alone.
    pub fn set_premium(&mut self, is_premium: bool) {
        if let Err(err) = self.preferences.set_bool(PREMIUM_KEY, is_premium) {
            log::warn!("Failed to save premium flag: {err:#}");
        }

        if self.is_premium != is_premium {
            self.is_premium = is_premium;
            self.subscribers
                .notify(&StoreEvent::PremiumChanged(is_premium));
        }
    }

    pub fn limit(&self) -> usize {
        if self.is_premium {
            PREMIUM_LIMIT
        } else {
            FREE_LIMIT
        }
    }

    pub fn can_add_more(&self) -> bool {
        self.countdowns.len() < self.limit()
    }

    /// Appends `countdown` if the limit allows. Returns whether it was added;
    /// a rejected add changes nothing.
    pub fn add(&mut self, countdown: Countdown) -> bool {
        if !self.can_add_more() {
            log::debug!(
                "Ignoring add of {:?}: limit of {} reached",
                countdown.title,
                self.limit()
            );
            return false;
        }
        if self.get(countdown.id).is_some() {
            log::debug!("Ignoring add of duplicate countdown {}", countdown.id);
            return false;
        }

        let id = countdown.id;
        self.countdowns.push(countdown);
        self.save();
        self.subscribers.notify(&StoreEvent::Added(id));
        true
    }

    /// Replaces the countdown with the same id, keeping its position.
    pub fn update(&mut self, countdown: Countdown) -> bool {
        let Some(slot) = self.countdowns.iter_mut().find(|c| c.id == countdown.id) else {
            log::debug!("Ignoring update of unknown countdown {}", countdown.id);
            return false;
        };

        let id = countdown.id;
        *slot = countdown;
        self.save();
        self.subscribers.notify(&StoreEvent::Updated(id));
        true
    }

    pub fn delete(&mut self, countdown: &Countdown) -> bool {
        self.delete_id(countdown.id)
    }

    pub fn delete_id(&mut self, id: CountdownId) -> bool {
        self.remove_where(|c| c.id == id) > 0
    }

    /// Removes the countdowns at `positions`. Out-of-range positions are
    /// ignored. Returns how many were removed.
    pub fn delete_at(&mut self, positions: &[usize]) -> usize {
        let ids: Vec<CountdownId> = positions
            .iter()
            .filter_map(|&i| self.countdowns.get(i).map(|c| c.id))
            .collect();
        self.remove_where(|c| ids.contains(&c.id))
    }

    fn remove_where(&mut self, mut predicate: impl FnMut(&Countdown) -> bool) -> usize {
        let mut removed = Vec::new();
        self.countdowns.retain(|c| {
            if predicate(c) {
                removed.push(c.id);
                false
            } else {
                true
            }
        });

        if removed.is_empty() {
            return 0;
        }

        let count = removed.len();
        self.save();
        self.subscribers.notify(&StoreEvent::Removed(removed));
        count
    }

    /// Countdowns whose legacy `isCountUp` flag contradicts the direction
    /// derived from their target date at `now`.
    pub fn direction_conflicts(&self, now: DateTime<Utc>) -> Vec<&Countdown> {
        self.countdowns
            .iter()
            .filter(|c| c.has_direction_conflict(now))
            .collect()
    }

    fn log_direction_conflicts(&self, now: DateTime<Utc>) {
        for countdown in self.direction_conflicts(now) {
            log::warn!(
                "Countdown {} ({:?}) was saved as {} but its date makes it count {}",
                countdown.id,
                countdown.title,
                if countdown.legacy_count_up == Some(true) {
                    "count-up"
                } else {
                    "count-down"
                },
                if countdown.direction(now).is_count_up() {
                    "up"
                } else {
                    "down"
                },
            );
        }
    }

    /// Registers `listener` for every change applied to the store.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
