pub mod dhikr;
pub mod poster;
pub mod prayer;

pub use dhikr::{DhikrDay, DhikrSlot, DhikrTimes};
pub use poster::Poster;
pub use prayer::{DaySchedule, PrayerEntry, PrayerName, TimeKind, Timetable};
