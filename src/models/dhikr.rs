use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::format::parse_hhmm;

/// Once a gathering is this far underway, the display rolls the slot
/// over to tomorrow's time.
const ROLLOVER_MIN: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DhikrSlot {
    Morning,
    Evening,
    Night,
}

impl DhikrSlot {
    pub fn all() -> Vec<DhikrSlot> {
        vec![DhikrSlot::Morning, DhikrSlot::Evening, DhikrSlot::Night]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DhikrSlot::Morning => "morning",
            DhikrSlot::Evening => "evening",
            DhikrSlot::Night => "night",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DhikrSlot::Morning => "Morning",
            DhikrSlot::Evening => "Evening",
            DhikrSlot::Night => "Night",
        }
    }
}

impl std::fmt::Display for DhikrSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One day's gathering times from the dhikr endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DhikrDay {
    pub morning: Option<String>,
    pub evening: Option<String>,
    pub night: Option<String>,
}

impl DhikrDay {
    pub fn get(&self, slot: DhikrSlot) -> Option<&str> {
        let v = match slot {
            DhikrSlot::Morning => &self.morning,
            DhikrSlot::Evening => &self.evening,
            DhikrSlot::Night => &self.night,
        };
        v.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// The dhikr endpoint's document: today's and tomorrow's times,
/// replaced wholesale each fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DhikrTimes {
    pub today: DhikrDay,
    pub tomorrow: DhikrDay,
}

impl DhikrTimes {
    /// The "HH:MM" to show for a slot. Today's time holds until 30
    /// minutes after it has passed, then tomorrow's takes over. No
    /// published time for today means nothing to show.
    pub fn display_time(&self, slot: DhikrSlot, now: NaiveDateTime) -> Option<&str> {
        let today = self.today.get(slot)?;
        if let Some(t) = parse_hhmm(today) {
            if now - now.date().and_time(t) >= Duration::minutes(ROLLOVER_MIN) {
                return self.tomorrow.get(slot);
            }
        }
        Some(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 22)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn times() -> DhikrTimes {
        serde_json::from_str(
            r#"{
                "today": {"morning": "06:30", "evening": "18:00", "night": "22:15"},
                "tomorrow": {"morning": "06:32", "evening": "18:01"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn shows_today_before_rollover() {
        let t = times();
        assert_eq!(t.display_time(DhikrSlot::Morning, at(5, 0)), Some("06:30"));
        assert_eq!(t.display_time(DhikrSlot::Morning, at(6, 59)), Some("06:30"));
    }

    #[test]
    fn rolls_to_tomorrow_thirty_minutes_after() {
        let t = times();
        assert_eq!(t.display_time(DhikrSlot::Morning, at(7, 0)), Some("06:32"));
        assert_eq!(t.display_time(DhikrSlot::Evening, at(18, 29)), Some("18:00"));
        assert_eq!(t.display_time(DhikrSlot::Evening, at(18, 30)), Some("18:01"));
    }

    #[test]
    fn rolled_slot_without_tomorrow_shows_nothing() {
        let t = times();
        assert_eq!(t.display_time(DhikrSlot::Night, at(22, 45)), None);
    }

    #[test]
    fn missing_today_shows_nothing() {
        let t = DhikrTimes {
            today: DhikrDay::default(),
            tomorrow: times().tomorrow,
        };
        assert_eq!(t.display_time(DhikrSlot::Morning, at(5, 0)), None);
    }

    #[test]
    fn unreadable_today_still_shows() {
        let t = DhikrTimes {
            today: DhikrDay {
                morning: Some("soon".into()),
                ..Default::default()
            },
            tomorrow: DhikrDay::default(),
        };
        assert_eq!(t.display_time(DhikrSlot::Morning, at(12, 0)), Some("soon"));
    }
}
