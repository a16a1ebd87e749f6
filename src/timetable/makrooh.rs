//! Makrooh warning windows around sunrise, zawal and (optionally)
//! sunset.

use chrono::{Duration, NaiveDateTime};

use crate::models::prayer::DaySchedule;
use crate::utils::format::parse_hhmm;

/// Sunrise window runs this long from the published sunrise.
const SUNRISE_WINDOW_MIN: i64 = 14;

/// Zawal window leads the published Dhuhr start by this much.
const DHUHR_LEAD_MIN: i64 = 5;

/// Sunset window leads the published Maghrib start by this much.
const MAGHRIB_LEAD_MIN: i64 = 14;

/// Whether `now` falls inside a makrooh window of today's schedule.
/// Prayers without a published start contribute no window.
pub fn in_makrooh(day: &DaySchedule, now: NaiveDateTime, maghrib_window: bool) -> bool {
    let as_today = |time: Option<&str>| -> Option<NaiveDateTime> {
        Some(now.date().and_time(parse_hhmm(time?)?))
    };

    let mut windows: Vec<(NaiveDateTime, NaiveDateTime)> = Vec::new();

    if let Some(sunrise) = as_today(day.sunrise.as_ref().and_then(|e| e.start.as_deref())) {
        windows.push((sunrise, sunrise + Duration::minutes(SUNRISE_WINDOW_MIN)));
    }
    if let Some(dhuhr) = as_today(day.dhuhr.as_ref().and_then(|e| e.start.as_deref())) {
        windows.push((dhuhr - Duration::minutes(DHUHR_LEAD_MIN), dhuhr));
    }
    if maghrib_window {
        if let Some(maghrib) = as_today(day.maghrib.as_ref().and_then(|e| e.start.as_deref())) {
            windows.push((maghrib - Duration::minutes(MAGHRIB_LEAD_MIN), maghrib));
        }
    }

    windows.iter().any(|&(start, end)| now >= start && now < end)
}

/// Edge-triggered visibility for the warning overlay: reports a
/// change only when a window boundary is crossed, however often it
/// is polled.
#[derive(Debug, Default)]
pub struct MakroohWatcher {
    showing: bool,
}

impl MakroohWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, in_window: bool) -> Option<bool> {
        if in_window == self.showing {
            return None;
        }
        self.showing = in_window;
        Some(in_window)
    }
}
