use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub fn all() -> Vec<PrayerName> {
        vec![
            PrayerName::Fajr,
            PrayerName::Sunrise,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "fajr",
            PrayerName::Sunrise => "sunrise",
            PrayerName::Dhuhr => "dhuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Sunrise marks a boundary only; nothing is prayed in
    /// congregation at it.
    pub fn has_jamat(&self) -> bool {
        !matches!(self, PrayerName::Sunrise)
    }

    /// Prayers whose jamat slot flashes when tomorrow's time differs
    /// from today's. Maghrib follows the sun and changes daily.
    pub fn flashes_on_change(&self) -> bool {
        !matches!(self, PrayerName::Sunrise | PrayerName::Maghrib)
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "sunrise" | "shurooq" => Ok(PrayerName::Sunrise),
            "dhuhr" | "zuhr" | "dhuhur" | "jumuah" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer name: {}", s)),
        }
    }
}

/// Which of a prayer's two published times is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    Start,
    Jamat,
}

/// One prayer's row in a published day: the earliest permissible time
/// and the congregation time, either of which the masjid may omit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrayerEntry {
    pub start: Option<String>,
    pub jamat: Option<String>,
}

impl PrayerEntry {
    /// The "HH:MM" string for the requested kind. A jamat request
    /// falls back to the start time when no jamat is published; empty
    /// strings count as absent.
    pub fn time(&self, kind: TimeKind) -> Option<&str> {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.trim().is_empty())
        }
        match kind {
            TimeKind::Start => present(&self.start),
            TimeKind::Jamat => present(&self.jamat).or_else(|| present(&self.start)),
        }
    }
}

/// One calendar day of the published timetable. Unknown keys in the
/// document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaySchedule {
    pub fajr: Option<PrayerEntry>,
    pub sunrise: Option<PrayerEntry>,
    pub dhuhr: Option<PrayerEntry>,
    pub asr: Option<PrayerEntry>,
    pub maghrib: Option<PrayerEntry>,
    pub isha: Option<PrayerEntry>,
}

impl DaySchedule {
    pub fn entry(&self, prayer: PrayerName) -> Option<&PrayerEntry> {
        match prayer {
            PrayerName::Fajr => self.fajr.as_ref(),
            PrayerName::Sunrise => self.sunrise.as_ref(),
            PrayerName::Dhuhr => self.dhuhr.as_ref(),
            PrayerName::Asr => self.asr.as_ref(),
            PrayerName::Maghrib => self.maghrib.as_ref(),
            PrayerName::Isha => self.isha.as_ref(),
        }
    }

    pub fn time(&self, prayer: PrayerName, kind: TimeKind) -> Option<&str> {
        self.entry(prayer).and_then(|e| e.time(kind))
    }
}

/// The masjid's published timetable, keyed by "YYYY-MM-DD". Replaced
/// wholesale on every successful fetch, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    pub days: HashMap<String, DaySchedule>,
}

impl Timetable {
    pub fn day(&self, key: &str) -> Option<&DaySchedule> {
        self.days.get(key)
    }

    pub fn has_day(&self, key: &str) -> bool {
        self.days.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn time(&self, key: &str, prayer: PrayerName, kind: TimeKind) -> Option<&str> {
        self.day(key).and_then(|d| d.time(prayer, kind))
    }
}

/// Timetable key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's and tomorrow's timetable keys.
pub fn day_keys(date: NaiveDate) -> (String, String) {
    (date_key(date), date_key(date + Duration::days(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "2025-08-22": {
            "fajr": {"start": "04:45", "jamat": "05:15"},
            "sunrise": {"start": "06:01"},
            "dhuhr": {"start": "13:10", "jamat": "13:30"},
            "asr": {"start": "17:00", "jamat": "18:45"},
            "maghrib": {"start": "20:05", "jamat": "20:10"},
            "isha": {"start": "21:30", "jamat": "22:00"},
            "notes": "Eid overflow in the sports hall"
        },
        "2025-08-23": {
            "fajr": {"start": "04:47"}
        }
    }"#;

    #[test]
    fn parses_published_document() {
        let tt: Timetable = serde_json::from_str(DOC).unwrap();
        assert!(tt.has_day("2025-08-22"));
        assert!(tt.has_day("2025-08-23"));
        assert_eq!(
            tt.time("2025-08-22", PrayerName::Fajr, TimeKind::Jamat),
            Some("05:15")
        );
        assert_eq!(
            tt.time("2025-08-22", PrayerName::Sunrise, TimeKind::Start),
            Some("06:01")
        );
    }

    #[test]
    fn jamat_falls_back_to_start() {
        let tt: Timetable = serde_json::from_str(DOC).unwrap();
        assert_eq!(
            tt.time("2025-08-23", PrayerName::Fajr, TimeKind::Jamat),
            Some("04:47")
        );
        assert_eq!(tt.time("2025-08-23", PrayerName::Isha, TimeKind::Jamat), None);
        assert_eq!(
            tt.time("2025-08-22", PrayerName::Sunrise, TimeKind::Jamat),
            Some("06:01")
        );
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let entry = PrayerEntry {
            start: Some("19:45".into()),
            jamat: Some("  ".into()),
        };
        assert_eq!(entry.time(TimeKind::Jamat), Some("19:45"));
        let blank = PrayerEntry {
            start: Some(String::new()),
            jamat: None,
        };
        assert_eq!(blank.time(TimeKind::Start), None);
        assert_eq!(blank.time(TimeKind::Jamat), None);
    }

    #[test]
    fn wire_names_match_serde() {
        for prayer in PrayerName::all() {
            let json = serde_json::to_string(&prayer).unwrap();
            assert_eq!(json, format!("\"{}\"", prayer.as_str()));
        }
    }

    #[test]
    fn prayer_names_parse_with_aliases() {
        assert_eq!("DHUHR".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("fajr".parse::<PrayerName>().unwrap(), PrayerName::Fajr);
        assert!("tahajjud".parse::<PrayerName>().is_err());
    }

    #[test]
    fn day_keys_are_consecutive() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
        let (today, tomorrow) = day_keys(date);
        assert_eq!(today, "2025-08-31");
        assert_eq!(tomorrow, "2025-09-01");
    }
}
