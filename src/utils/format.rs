use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// Shown wherever a time is absent or unreadable.
pub const PLACEHOLDER: &str = "--";

/// Parse a wall-clock "HH:MM" string (hour may be unpadded).
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    let (h, m) = s.trim().split_once(':')?;
    let hour: u32 = h.trim().parse().ok()?;
    let minute: u32 = m.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Convert a 24-hour "HH:MM" string to 12-hour "H:MM" without an
/// am/pm suffix, as the wall display shows times. Absent or
/// unreadable input renders the placeholder.
pub fn format_12h(time: Option<&str>) -> String {
    match time.and_then(parse_hhmm) {
        Some(t) => twelve_hour(t.hour(), t.minute()),
        None => PLACEHOLDER.to_string(),
    }
}

fn twelve_hour(hour: u32, minute: u32) -> String {
    let mut h = hour % 12;
    if h == 0 {
        h = 12;
    }
    format!("{}:{:02}", h, minute)
}

/// Ordinal suffix for a day of the month. Whole day numbers are
/// matched, so 11, 12 and 13 take "th".
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Current time line, e.g. "3:07".
pub fn clock_line(now: NaiveDateTime) -> String {
    twelve_hour(now.hour(), now.minute())
}

/// Current date line, e.g. "FRIDAY 22ND AUGUST".
pub fn date_line(now: NaiveDateTime) -> String {
    let day = now.day();
    format!(
        "{} {}{} {}",
        now.format("%A"),
        day,
        ordinal_suffix(day),
        now.format("%B")
    )
    .to_uppercase()
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

    #[test]
    fn twelve_hour_wraps_midnight_and_noon() {
        assert_eq!(format_12h(Some("00:07")), "12:07");
        assert_eq!(format_12h(Some("12:30")), "12:30");
        assert_eq!(format_12h(Some("13:05")), "1:05");
        assert_eq!(format_12h(Some("23:59")), "11:59");
        assert_eq!(format_12h(Some("5:00")), "5:00");
    }

    #[test]
    fn minutes_are_zero_padded() {
        assert_eq!(format_12h(Some("09:05")), "9:05");
        assert_eq!(format_12h(Some("18:00")), "6:00");
    }

    #[test]
    fn absent_or_unreadable_renders_placeholder() {
        assert_eq!(format_12h(None), "--");
        assert_eq!(format_12h(Some("")), "--");
        assert_eq!(format_12h(Some("noon")), "--");
        assert_eq!(format_12h(Some("25:00")), "--");
        assert_eq!(format_12h(Some("12:60")), "--");
    }

    #[test]
    fn parse_hhmm_accepts_unpadded_hours() {
        assert_eq!(parse_hhmm("5:30"), NaiveTime::from_hms_opt(5, 30, 0));
        assert_eq!(parse_hhmm(" 05:30 "), NaiveTime::from_hms_opt(5, 30, 0));
        assert_eq!(parse_hhmm("0530"), None);
        assert_eq!(parse_hhmm("24:00"), None);
    }

    #[test]
    fn ordinals_match_whole_day_numbers() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn clock_line_uses_twelve_hour_form() {
        assert_eq!(clock_line(at(0, 7)), "12:07");
        assert_eq!(clock_line(at(13, 5)), "1:05");
    }

    #[test]
    fn date_line_is_uppercased_with_ordinal() {
        assert_eq!(date_line(at(10, 0)), "FRIDAY 22ND AUGUST");
        let first = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(date_line(first), "SATURDAY 1ST MARCH");
        let eleventh = NaiveDate::from_ymd_opt(2025, 8, 11)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(date_line(eleventh), "MONDAY 11TH AUGUST");
    }
}
