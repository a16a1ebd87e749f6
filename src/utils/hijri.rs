use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if month >= 1 && month <= 12 {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

pub struct HijriInfo {
    pub day: usize,
    pub month: usize,
    pub year: usize,
    pub month_name: String,
}

impl HijriInfo {
    pub fn formatted(&self) -> String {
        format!("{} {} {}", self.day, self.month_name, self.year)
    }
}

pub fn to_hijri(date: NaiveDate) -> Result<HijriInfo> {
    let hd = HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .map_err(|e| anyhow::anyhow!("Hijri conversion error: {}", e))?;

    let month = hd.month();
    Ok(HijriInfo {
        day: hd.day(),
        month,
        year: hd.year(),
        month_name: hijri_month_name(month).to_string(),
    })
}

/// Returns the Hijri date line for the wall display, e.g.
/// "28 SAFAR 1447 AH". `offset_days` lets masajid adjust for local
/// moon sighting differences (e.g., -1 if one day behind Saudi
/// Arabia).
pub fn hijri_line(date: NaiveDate, offset_days: i32) -> String {
    let adjusted = date + Duration::days(offset_days as i64);

    let info = match to_hijri(adjusted) {
        Ok(info) => info,
        Err(_) => {
            // Fallback: use the unadjusted date
            match to_hijri(date) {
                Ok(info) => info,
                Err(_) => return String::new(),
            }
        }
    };

    format!("{} AH", info.formatted().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aug22() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 22).unwrap()
    }

    #[test]
    fn conversion_yields_plausible_fields() {
        let info = to_hijri(aug22()).unwrap();
        assert!(info.day >= 1 && info.day <= 30);
        assert!(info.month >= 1 && info.month <= 12);
        assert!(info.year >= 1400 && info.year <= 1500);
        assert!(HIJRI_MONTH_NAMES.contains(&info.month_name.as_str()));
    }

    #[test]
    fn line_is_uppercased_and_suffixed() {
        let line = hijri_line(aug22(), 0);
        assert!(line.ends_with(" AH"));
        assert_eq!(line, line.to_uppercase());
        assert!(line.split_whitespace().count() >= 4);
    }

    #[test]
    fn offset_shifts_the_converted_day() {
        let shifted = hijri_line(aug22(), 1);
        let direct = hijri_line(aug22() + Duration::days(1), 0);
        assert_eq!(shifted, direct);
    }
}
