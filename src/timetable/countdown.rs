//! Final-seconds countdown before each jamat.
//!
//! A slot flips from the printed time to a bare seconds figure just
//! before the congregation forms, then back once the jamat is in.

use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeMap;

use crate::models::prayer::PrayerName;

/// How close a jamat must be before its countdown engages. Kept at
/// the loop cadence's scale so a display coming up mid-morning never
/// counts down from hours.
pub const LOOKAHEAD_SECS: i64 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Show `remaining` whole seconds on the prayer's jamat slot.
    Ticking {
        prayer: PrayerName,
        remaining: i64,
    },
    /// The jamat is in; restore the slot and resume idle behavior.
    Elapsed { prayer: PrayerName },
}

/// Whether a target is close enough to start counting.
pub fn within_lookahead(target: NaiveDateTime, now: NaiveDateTime) -> bool {
    let diff = target - now;
    diff > Duration::zero() && diff <= Duration::seconds(LOOKAHEAD_SECS)
}

/// Active countdowns, at most one per prayer. A countdown engages
/// when its target enters the lookahead and self-cancels at zero.
#[derive(Debug, Default)]
pub struct Countdowns {
    active: BTreeMap<PrayerName, NaiveDateTime>,
}

impl Countdowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a prayer's current target. Engages (or re-targets) the
    /// countdown when the target is within the lookahead; returns
    /// whether the prayer is now counting.
    pub fn observe(
        &mut self,
        prayer: PrayerName,
        target: NaiveDateTime,
        now: NaiveDateTime,
    ) -> bool {
        if within_lookahead(target, now) {
            self.active.insert(prayer, target);
            true
        } else {
            self.active.contains_key(&prayer)
        }
    }

    /// Advance all countdowns to `now`.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<CountdownEvent> {
        let mut events = Vec::new();
        self.active.retain(|&prayer, &mut target| {
            let remaining = (target - now).num_seconds();
            if remaining > 0 {
                events.push(CountdownEvent::Ticking { prayer, remaining });
                true
            } else {
                events.push(CountdownEvent::Elapsed { prayer });
                false
            }
        });
        events
    }
}
