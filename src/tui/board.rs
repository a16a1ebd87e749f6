//! The display surface the coordinator writes into.
//!
//! Slots are the screen's named text positions; widgets read them
//! back out at draw time. Writes are idempotent, so rules can re-run
//! every tick and the board only dirties (and the terminal only
//! redraws) when something actually changed.

use std::collections::{HashMap, HashSet};

use crate::models::{DhikrSlot, PrayerName};
use crate::utils::format::PLACEHOLDER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Clock,
    Date,
    HijriDate,
    DhuhrLabel,
    JumuahJamat,
    Start(PrayerName),
    Jamat(PrayerName),
    Dhikr(DhikrSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Poster,
    Makrooh,
}

/// The jamat slot a prayer's countdown and flash write to. On
/// Fridays the Dhuhr congregation is Jumuah, shown on its own line.
pub fn jamat_slot(prayer: PrayerName, friday: bool) -> Slot {
    if friday && prayer == PrayerName::Dhuhr {
        Slot::JumuahJamat
    } else {
        Slot::Jamat(prayer)
    }
}

#[derive(Debug)]
pub struct Board {
    texts: HashMap<Slot, String>,
    flashing: HashSet<Slot>,
    overlays: HashSet<Overlay>,
    dirty: bool,
    writes: u64,
}

impl Board {
    pub fn new() -> Self {
        let mut texts = HashMap::new();
        texts.insert(Slot::DhuhrLabel, "DHUHR".to_string());
        Board {
            texts,
            flashing: HashSet::new(),
            overlays: HashSet::new(),
            dirty: true,
            writes: 0,
        }
    }

    pub fn set_text(&mut self, slot: Slot, text: impl Into<String>) {
        let text = text.into();
        if self.texts.get(&slot) == Some(&text) {
            return;
        }
        self.texts.insert(slot, text);
        self.dirty = true;
        self.writes += 1;
    }

    pub fn text(&self, slot: Slot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or(PLACEHOLDER)
    }

    pub fn set_flash(&mut self, slot: Slot, on: bool) {
        let changed = if on {
            self.flashing.insert(slot)
        } else {
            self.flashing.remove(&slot)
        };
        if changed {
            self.dirty = true;
            self.writes += 1;
        }
    }

    pub fn is_flashing(&self, slot: Slot) -> bool {
        self.flashing.contains(&slot)
    }

    pub fn set_overlay(&mut self, overlay: Overlay, visible: bool) {
        let changed = if visible {
            self.overlays.insert(overlay)
        } else {
            self.overlays.remove(&overlay)
        };
        if changed {
            self.dirty = true;
            self.writes += 1;
        }
    }

    pub fn overlay_visible(&self, overlay: Overlay) -> bool {
        self.overlays.contains(&overlay)
    }

    /// Request a redraw without a slot write (overlay fade phases).
    pub fn touch(&mut self) {
        self.dirty = true;
    }

    /// Whether anything changed since the last call; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Count of effective writes, for asserting edge-triggered
    /// behavior in tests.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dirty_with_placeholders_and_label() {
        let mut board = Board::new();
        assert!(board.take_dirty());
        assert!(!board.take_dirty());
        assert_eq!(board.text(Slot::Clock), "--");
        assert_eq!(board.text(Slot::Jamat(PrayerName::Fajr)), "--");
        assert_eq!(board.text(Slot::DhuhrLabel), "DHUHR");
    }

    #[test]
    fn rewriting_the_same_text_is_not_a_write() {
        let mut board = Board::new();
        board.take_dirty();
        board.set_text(Slot::Clock, "3:07");
        assert_eq!(board.writes(), 1);
        assert!(board.take_dirty());
        board.set_text(Slot::Clock, "3:07");
        assert_eq!(board.writes(), 1);
        assert!(!board.take_dirty());
        board.set_text(Slot::Clock, "3:08");
        assert_eq!(board.writes(), 2);
    }

    #[test]
    fn flash_and_overlay_are_idempotent() {
        let mut board = Board::new();
        board.set_flash(Slot::Jamat(PrayerName::Asr), true);
        board.set_flash(Slot::Jamat(PrayerName::Asr), true);
        assert_eq!(board.writes(), 1);
        assert!(board.is_flashing(Slot::Jamat(PrayerName::Asr)));

        board.set_overlay(Overlay::Makrooh, true);
        board.set_overlay(Overlay::Makrooh, true);
        assert_eq!(board.writes(), 2);
        board.set_overlay(Overlay::Makrooh, false);
        assert_eq!(board.writes(), 3);
        assert!(!board.overlay_visible(Overlay::Makrooh));
    }

    #[test]
    fn dhuhr_jamat_redirects_to_jumuah_on_fridays() {
        assert_eq!(jamat_slot(PrayerName::Dhuhr, true), Slot::JumuahJamat);
        assert_eq!(
            jamat_slot(PrayerName::Dhuhr, false),
            Slot::Jamat(PrayerName::Dhuhr)
        );
        assert_eq!(
            jamat_slot(PrayerName::Fajr, true),
            Slot::Jamat(PrayerName::Fajr)
        );
    }
}
