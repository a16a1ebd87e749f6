//! Poster rotation between prayers.
//!
//! Mirrors the wall display's rhythm: once a minute, if nothing is
//! up, the next poster fades in, holds, fades back out. Countdowns
//! suspend the rotation so the final seconds are never covered.

use chrono::{Duration, NaiveDateTime};

use crate::models::Poster;
use crate::tui::board::{Board, Overlay};

/// Rotation cadence while idle.
const CYCLE_SECS: i64 = 60;

/// How long a poster holds fully visible.
const HOLD_SECS: i64 = 10;

/// Fade-out transition before the overlay hides.
const FADE_MILLIS: i64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Showing { until: NaiveDateTime },
    Fading { until: NaiveDateTime },
}

#[derive(Debug)]
pub struct Slideshow {
    posters: Vec<Poster>,
    cursor: usize,
    running: bool,
    next_cycle: Option<NaiveDateTime>,
    phase: Phase,
    current: Option<Poster>,
}

impl Slideshow {
    pub fn new() -> Self {
        Slideshow {
            posters: Vec::new(),
            cursor: 0,
            running: false,
            next_cycle: None,
            phase: Phase::Hidden,
            current: None,
        }
    }

    /// Swap in a freshly probed poster set and restart rotation from
    /// the first poster. A poster already on screen finishes its run.
    pub fn replace(&mut self, posters: Vec<Poster>, now: NaiveDateTime) {
        self.posters = posters;
        self.cursor = 0;
        self.start(now);
    }

    /// Begin rotating, if there is anything to rotate and we are not
    /// already. The first poster appears a full cycle later.
    pub fn start(&mut self, now: NaiveDateTime) {
        if self.posters.is_empty() || self.running {
            return;
        }
        self.running = true;
        self.next_cycle = Some(now + Duration::seconds(CYCLE_SECS));
    }

    /// Stop rotating and fade out whatever is on screen.
    pub fn suspend(&mut self, board: &mut Board, now: NaiveDateTime) {
        self.running = false;
        self.next_cycle = None;
        if let Phase::Showing { .. } = self.phase {
            self.phase = Phase::Fading {
                until: now + Duration::milliseconds(FADE_MILLIS),
            };
            board.touch();
        }
    }

    /// Advance phases and, when a cycle comes due while the overlay
    /// is hidden, put up the next poster.
    pub fn tick(&mut self, board: &mut Board, now: NaiveDateTime) {
        match self.phase {
            Phase::Hidden => {
                let due = match self.next_cycle {
                    Some(at) => self.running && now >= at,
                    None => false,
                };
                if due {
                    self.next_cycle = Some(now + Duration::seconds(CYCLE_SECS));
                    if !self.posters.is_empty() {
                        let poster = self.posters[self.cursor % self.posters.len()].clone();
                        self.current = Some(poster);
                        self.phase = Phase::Showing {
                            until: now + Duration::seconds(HOLD_SECS),
                        };
                        board.set_overlay(Overlay::Poster, true);
                    }
                }
            }
            Phase::Showing { until } => {
                if now >= until {
                    self.phase = Phase::Fading {
                        until: now + Duration::milliseconds(FADE_MILLIS),
                    };
                    board.touch();
                }
            }
            Phase::Fading { until } => {
                if now >= until {
                    self.phase = Phase::Hidden;
                    self.current = None;
                    self.cursor += 1;
                    board.set_overlay(Overlay::Poster, false);
                }
            }
        }
    }

    /// The poster currently on screen, if any.
    pub fn current(&self) -> Option<&Poster> {
        self.current.as_ref()
    }

    /// Whether the visible poster is in its fade-out.
    pub fn is_fading(&self) -> bool {
        matches!(self.phase, Phase::Fading { .. })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 22)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn secs(s: i64) -> Duration {
        Duration::seconds(s)
    }

    fn posters(n: usize) -> Vec<Poster> {
        (1..=n)
            .map(|i| Poster {
                file: format!("{}.jpg", i),
                size_bytes: 100_000 * i as u64,
            })
            .collect()
    }

    fn file_on_screen(s: &Slideshow) -> Option<String> {
        s.current().map(|p| p.file.clone())
    }

    #[test]
    fn empty_set_never_rotates() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(Vec::new(), t0());
        assert!(!show.is_running());
        for i in 0..300 {
            show.tick(&mut board, t0() + secs(i));
        }
        assert!(!board.overlay_visible(Overlay::Poster));
    }

    #[test]
    fn first_poster_appears_after_a_full_cycle() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(posters(3), t0());
        assert!(show.is_running());

        show.tick(&mut board, t0() + secs(59));
        assert!(!board.overlay_visible(Overlay::Poster));

        show.tick(&mut board, t0() + secs(60));
        assert!(board.overlay_visible(Overlay::Poster));
        assert_eq!(file_on_screen(&show).as_deref(), Some("1.jpg"));
    }

    #[test]
    fn holds_then_fades_then_hides() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(posters(2), t0());

        show.tick(&mut board, t0() + secs(60));
        show.tick(&mut board, t0() + secs(69));
        assert!(!show.is_fading());
        assert_eq!(file_on_screen(&show).as_deref(), Some("1.jpg"));

        show.tick(&mut board, t0() + secs(70));
        assert!(show.is_fading());
        assert!(board.overlay_visible(Overlay::Poster));

        show.tick(&mut board, t0() + secs(70) + Duration::milliseconds(1500));
        assert!(!board.overlay_visible(Overlay::Poster));
        assert_eq!(show.current(), None);
    }

    #[test]
    fn rotation_is_cyclic() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(posters(3), t0());

        let mut seen = Vec::new();
        // Four cycles at one-second ticks; 3 posters wrap back to the
        // first.
        for i in 0..=250 {
            show.tick(&mut board, t0() + secs(i));
            if let Some(file) = file_on_screen(&show) {
                if seen.last() != Some(&file) {
                    seen.push(file);
                }
            }
        }
        assert_eq!(seen, vec!["1.jpg", "2.jpg", "3.jpg", "1.jpg"]);
    }

    #[test]
    fn nothing_new_shows_while_a_poster_is_up() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(posters(2), t0());

        show.tick(&mut board, t0() + secs(60));
        for i in 61..70 {
            show.tick(&mut board, t0() + secs(i));
            assert_eq!(file_on_screen(&show).as_deref(), Some("1.jpg"));
        }
    }

    #[test]
    fn suspend_fades_out_and_stops_the_clock() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(posters(2), t0());

        show.tick(&mut board, t0() + secs(60));
        show.suspend(&mut board, t0() + secs(63));
        assert!(show.is_fading());
        assert!(!show.is_running());

        show.tick(&mut board, t0() + secs(63) + Duration::milliseconds(1500));
        assert!(!board.overlay_visible(Overlay::Poster));

        // Long after, still nothing: rotation is stopped.
        for i in 65..300 {
            show.tick(&mut board, t0() + secs(i));
        }
        assert!(!board.overlay_visible(Overlay::Poster));
    }

    #[test]
    fn resume_continues_from_the_next_poster() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(posters(3), t0());

        show.tick(&mut board, t0() + secs(60));
        show.suspend(&mut board, t0() + secs(62));
        show.tick(&mut board, t0() + secs(64));

        let resumed = t0() + secs(100);
        show.start(resumed);
        assert!(show.is_running());
        show.tick(&mut board, resumed + secs(59));
        assert!(!board.overlay_visible(Overlay::Poster));
        show.tick(&mut board, resumed + secs(60));
        assert_eq!(file_on_screen(&show).as_deref(), Some("2.jpg"));
    }

    #[test]
    fn replace_restarts_from_the_first_poster() {
        let mut board = Board::new();
        let mut show = Slideshow::new();
        show.replace(posters(3), t0());

        // Run through one full show so the cursor moves on.
        for i in 0..=75 {
            show.tick(&mut board, t0() + secs(i));
        }
        assert_eq!(show.current(), None);

        let refreshed = t0() + secs(80);
        show.replace(posters(2), refreshed);
        show.tick(&mut board, t0() + secs(120));
        assert_eq!(file_on_screen(&show).as_deref(), Some("1.jpg"));
    }
}
