//! Which published time a slot should show right now.
//!
//! The timetable is day-keyed, so every rule starts from today's and
//! tomorrow's entries and decides between them. Comparisons run on
//! wall-clock minutes, matching how the times are published.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};

use crate::models::prayer::{day_keys, PrayerName, TimeKind, Timetable};
use crate::utils::format::parse_hhmm;

/// Minutes after a published time before the slot rolls to
/// tomorrow's value.
const ROLLOVER_MIN: u32 = 5;

/// Sunrise stays up longer; the row reads as "today's sunrise" well
/// after it has passed.
const SUNRISE_ROLLOVER_MIN: u32 = 15;

/// Jamat-changed flash window, minutes after today's jamat.
const FLASH_FROM_MIN: i64 = 5;
const FLASH_UNTIL_MIN: i64 = 15;

fn minutes_of(now: NaiveDateTime) -> u32 {
    now.hour() * 60 + now.minute()
}

/// The raw "HH:MM" a slot should show: today's value until shortly
/// after it has passed, then tomorrow's. Today absent falls through
/// to tomorrow; tomorrow absent after rollover keeps today's.
pub fn effective_time<'a>(
    tt: &'a Timetable,
    prayer: PrayerName,
    kind: TimeKind,
    now: NaiveDateTime,
) -> Option<&'a str> {
    let (today_key, tomorrow_key) = day_keys(now.date());
    let today = tt.time(&today_key, prayer, kind);
    let tomorrow = tt.time(&tomorrow_key, prayer, kind);

    let Some(today) = today else {
        return tomorrow;
    };

    let rolled = match parse_hhmm(today) {
        Some(t) => {
            let offset = match kind {
                TimeKind::Start if prayer == PrayerName::Sunrise => SUNRISE_ROLLOVER_MIN,
                _ => ROLLOVER_MIN,
            };
            minutes_of(now) >= t.hour() * 60 + t.minute() + offset
        }
        None => true,
    };

    if rolled {
        tomorrow.or(Some(today))
    } else {
        Some(today)
    }
}

/// Whether the midday slot currently reads as Jumuah: from five
/// minutes past Thursday's Dhuhr jamat until five minutes past
/// Friday's. Needs today's Dhuhr jamat to be published.
pub fn is_jumuah_period(tt: &Timetable, now: NaiveDateTime) -> bool {
    let (today_key, _) = day_keys(now.date());
    let jamat = tt
        .day(&today_key)
        .and_then(|d| d.dhuhr.as_ref())
        .and_then(|e| e.jamat.as_deref())
        .filter(|s| !s.trim().is_empty());
    let Some(jamat) = jamat else {
        return false;
    };
    let Some(t) = parse_hhmm(jamat) else {
        return false;
    };

    let boundary = t.hour() * 60 + t.minute() + 5;
    match now.date().weekday() {
        Weekday::Thu => minutes_of(now) >= boundary,
        Weekday::Fri => minutes_of(now) <= boundary,
        _ => false,
    }
}

/// Today's jamat string (start fallback), untouched by rollover.
pub fn today_jamat<'a>(
    tt: &'a Timetable,
    prayer: PrayerName,
    now: NaiveDateTime,
) -> Option<&'a str> {
    let (today_key, _) = day_keys(now.date());
    tt.time(&today_key, prayer, TimeKind::Jamat)
}

/// Today's jamat as a point in time, the countdown's target.
pub fn countdown_target(
    tt: &Timetable,
    prayer: PrayerName,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let t = parse_hhmm(today_jamat(tt, prayer, now)?)?;
    Some(now.date().and_time(t))
}

/// Drive the jamat slot's flash when tomorrow's jamat differs from
/// today's: `Some(on)` sets the flag for the window
/// `[jamat + 5min, jamat + 15min)`, `None` leaves the slot alone
/// (no change published, or either day missing).
pub fn jamat_change_flash(
    tt: &Timetable,
    prayer: PrayerName,
    now: NaiveDateTime,
) -> Option<bool> {
    if !prayer.flashes_on_change() {
        return None;
    }
    let (today_key, tomorrow_key) = day_keys(now.date());
    let today = tt.time(&today_key, prayer, TimeKind::Jamat)?;
    let tomorrow = tt.time(&tomorrow_key, prayer, TimeKind::Jamat)?;
    if today.trim() == tomorrow.trim() {
        return None;
    }

    let on = match parse_hhmm(today) {
        Some(t) => {
            let jamat = now.date().and_time(t);
            now >= jamat + Duration::minutes(FLASH_FROM_MIN)
                && now < jamat + Duration::minutes(FLASH_UNTIL_MIN)
        }
        None => false,
    };
    Some(on)
}
