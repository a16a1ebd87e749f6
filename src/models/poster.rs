use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Fixed number of numbered poster files probed on the server.
pub const MAX_POSTERS: usize = 8;

/// Extra community-photos poster, probed only in its weekly window.
pub const PHOTOS_POSTER: &str = "photos.jpg";

/// A poster that answered its probe and joined the rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    pub file: String,
    pub size_bytes: u64,
}

/// File names to probe this cycle, in rotation order.
pub fn probe_list(include_photos: bool, now: NaiveDateTime) -> Vec<String> {
    let mut files: Vec<String> = (1..=MAX_POSTERS).map(|i| format!("{}.jpg", i)).collect();
    if include_photos && photos_window(now) {
        files.push(PHOTOS_POSTER.to_string());
    }
    files
}

/// Weekly slot for the community-photos poster: Thursday evening
/// until Friday early afternoon.
pub fn photos_window(now: NaiveDateTime) -> bool {
    let minutes = now.hour() * 60 + now.minute();
    match now.weekday() {
        Weekday::Thu => minutes >= 21 * 60,
        Weekday::Fri => minutes <= 14 * 60,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        // 2025-08-21 is a Thursday
        NaiveDate::from_ymd_opt(2025, 8, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn photos_window_spans_thursday_night_to_friday_afternoon() {
        assert!(!photos_window(at(21, 20, 59)));
        assert!(photos_window(at(21, 21, 0)));
        assert!(photos_window(at(21, 23, 59)));
        assert!(photos_window(at(22, 0, 0)));
        assert!(photos_window(at(22, 14, 0)));
        assert!(!photos_window(at(22, 14, 1)));
        assert!(!photos_window(at(23, 12, 0)));
    }

    #[test]
    fn probe_list_is_numbered_in_order() {
        let files = probe_list(false, at(20, 12, 0));
        assert_eq!(files.len(), MAX_POSTERS);
        assert_eq!(files[0], "1.jpg");
        assert_eq!(files[7], "8.jpg");
    }

    #[test]
    fn photos_joins_only_when_enabled_and_due() {
        let in_window = at(21, 22, 0);
        assert!(!probe_list(false, in_window).contains(&PHOTOS_POSTER.to_string()));
        let files = probe_list(true, in_window);
        assert_eq!(files.last().map(String::as_str), Some(PHOTOS_POSTER));
        assert!(!probe_list(true, at(23, 22, 0)).contains(&PHOTOS_POSTER.to_string()));
    }
}
