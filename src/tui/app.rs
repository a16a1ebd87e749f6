use anyhow::Result;
use chrono::{Datelike, Local, NaiveDateTime, Weekday};
use log::{debug, info};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

use crate::config::AppConfig;
use crate::consts;
use crate::models::prayer::day_keys;
use crate::models::{DhikrSlot, DhikrTimes, PrayerName, TimeKind, Timetable};
use crate::net::client::HttpDisplayServer;
use crate::net::poller::{self, PollerConfig, Update};
use crate::timetable::countdown::{CountdownEvent, Countdowns};
use crate::timetable::makrooh::{self, MakroohWatcher};
use crate::timetable::resolve;
use crate::tui::board::{jamat_slot, Board, Overlay, Slot};
use crate::tui::events::{self, Event};
use crate::tui::slideshow::Slideshow;
use crate::tui::theme;
use crate::tui::widgets::{clock, dhikr, header, poster, prayers, statusbar, warning};
use crate::utils::format::{clock_line, date_line, format_12h};
use crate::utils::hijri::hijri_line;

/// How a display session ended. Reload tears the whole session down and
/// builds a fresh one, which is how new content versions take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Reload,
}

pub struct App {
    pub config: AppConfig,
    pub board: Board,
    pub schedule: Timetable,
    pub dhikr: Option<DhikrTimes>,
    pub slideshow: Slideshow,
    pub countdowns: Countdowns,
    pub makrooh: MakroohWatcher,
    pub version: Option<String>,
    pub reload_requested: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            board: Board::new(),
            schedule: Timetable::default(),
            dhikr: None,
            slideshow: Slideshow::new(),
            countdowns: Countdowns::new(),
            makrooh: MakroohWatcher::new(),
            version: None,
            reload_requested: false,
            should_quit: false,
        }
    }

    pub fn on_update(&mut self, update: Update, now: NaiveDateTime) {
        match update {
            Update::Timetable(timetable) => {
                self.schedule = timetable;
                self.render_timetable(now);
            }
            Update::Dhikr(times) => {
                self.dhikr = Some(times);
                self.render_dhikr(now);
            }
            Update::Posters(posters) => {
                debug!("slideshow set now has {} posters", posters.len());
                self.slideshow.replace(posters, now);
            }
            Update::Version(version) => {
                if let Some(prev) = &self.version {
                    if *prev != version {
                        info!("content version changed ({} -> {}), reloading", prev, version);
                        self.reload_requested = true;
                    }
                }
                self.version = Some(version);
            }
        }
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.render_clock(now);
        self.render_timetable(now);
        self.run_countdowns(now);
        self.check_makrooh(now);
        self.slideshow.tick(&mut self.board, now);
    }

    fn render_clock(&mut self, now: NaiveDateTime) {
        self.board.set_text(Slot::Clock, clock_line(now));
        self.board.set_text(Slot::Date, date_line(now));
        let hijri = hijri_line(now.date(), self.config.display.hijri_offset);
        self.board.set_text(Slot::HijriDate, hijri);
    }

    /// Writes the whole timetable panel from the current schedule.
    /// Nothing is touched until the schedule covers today and tomorrow,
    /// so a half-delivered document never blanks the wall.
    fn render_timetable(&mut self, now: NaiveDateTime) {
        let (today_key, tomorrow_key) = day_keys(now.date());
        if !self.schedule.has_day(&today_key) || !self.schedule.has_day(&tomorrow_key) {
            return;
        }
        let friday = now.weekday() == Weekday::Fri;

        let label = if resolve::is_jumuah_period(&self.schedule, now) {
            "JUMUAH"
        } else {
            "DHUHR"
        };
        self.board.set_text(Slot::DhuhrLabel, label);

        let jumuah = format_12h(resolve::effective_time(
            &self.schedule,
            PrayerName::Dhuhr,
            TimeKind::Jamat,
            now,
        ));
        self.board.set_text(Slot::JumuahJamat, jumuah);

        for prayer in PrayerName::all() {
            let start = format_12h(resolve::effective_time(
                &self.schedule,
                prayer,
                TimeKind::Start,
                now,
            ));
            self.board.set_text(Slot::Start(prayer), start);

            if !prayer.has_jamat() {
                continue;
            }
            // No jamat published today: leave the cell as it is and
            // skip both the countdown and the change flash.
            if resolve::today_jamat(&self.schedule, prayer, now).is_none() {
                continue;
            }

            let counting = match resolve::countdown_target(&self.schedule, prayer, now) {
                Some(target) => self.countdowns.observe(prayer, target, now),
                None => false,
            };
            if !counting {
                let jamat = format_12h(resolve::effective_time(
                    &self.schedule,
                    prayer,
                    TimeKind::Jamat,
                    now,
                ));
                self.board.set_text(Slot::Jamat(prayer), jamat);
            }

            if let Some(on) = resolve::jamat_change_flash(&self.schedule, prayer, now) {
                self.board.set_flash(jamat_slot(prayer, friday), on);
            }
        }
    }

    fn render_dhikr(&mut self, now: NaiveDateTime) {
        let Some(times) = &self.dhikr else {
            return;
        };
        for slot in DhikrSlot::all() {
            let text = format_12h(times.display_time(slot, now));
            self.board.set_text(Slot::Dhikr(slot), text);
        }
    }

    fn run_countdowns(&mut self, now: NaiveDateTime) {
        let friday = now.weekday() == Weekday::Fri;
        for event in self.countdowns.tick(now) {
            match event {
                CountdownEvent::Ticking { prayer, remaining } => {
                    let slot = jamat_slot(prayer, friday);
                    self.board.set_text(slot, remaining.to_string());
                    self.board.set_flash(slot, true);
                    self.slideshow.suspend(&mut self.board, now);
                }
                CountdownEvent::Elapsed { prayer } => {
                    info!("{} jamat has begun", prayer);
                    self.board.set_flash(jamat_slot(prayer, friday), false);
                    self.render_timetable(now);
                    self.slideshow.start(now);
                }
            }
        }
    }

    fn check_makrooh(&mut self, now: NaiveDateTime) {
        let (today_key, _) = day_keys(now.date());
        let inside = match self.schedule.day(&today_key) {
            Some(day) => makrooh::in_makrooh(day, now, self.config.makrooh.maghrib_window),
            None => return,
        };
        if let Some(visible) = self.makrooh.observe(inside) {
            if visible {
                info!("makrooh window opened");
            } else {
                info!("makrooh window closed");
            }
            self.board.set_overlay(Overlay::Makrooh, visible);
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Ignore the release/repeat events some terminals report
        if key.kind != crossterm::event::KeyEventKind::Press {
            return;
        }
        match key.code {
            crossterm::event::KeyCode::Esc | crossterm::event::KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // masjid name + dates
                Constraint::Length(9),  // big clock
                Constraint::Min(11),    // timetable
                Constraint::Length(3),  // dhikr times
                Constraint::Length(1),  // status bar
            ])
            .split(area);

        header::render(frame, chunks[0], &self.config.display.masjid_name, &self.board);
        clock::render(frame, chunks[1], &self.board);
        prayers::render(frame, chunks[2], &self.board);
        dhikr::render(frame, chunks[3], &self.board);
        statusbar::render(
            frame,
            chunks[4],
            &self.config.server.base_url,
            self.version.as_deref(),
        );

        if self.board.overlay_visible(Overlay::Poster) {
            if let Some(current) = self.slideshow.current() {
                poster::render(frame, area, current, self.slideshow.is_fading());
            }
        }
        // Drawn last so it sits above a poster when both are up.
        if self.board.overlay_visible(Overlay::Makrooh) {
            warning::render(frame, area);
        }
    }
}

/// Run one display session until quit or a content reload.
pub async fn run(config: AppConfig) -> Result<Outcome> {
    let server: Arc<HttpDisplayServer> = Arc::new(HttpDisplayServer::new(&config.server)?);
    let (update_tx, mut update_rx) = mpsc::channel(consts::ui::UPDATE_QUEUE);
    let (shutdown_tx, _) = broadcast::channel(1);
    let tasks = poller::spawn_pollers(
        server,
        PollerConfig {
            include_photos: config.posters.include_photos,
        },
        update_tx,
        &shutdown_tx,
    );

    let mut app = App::new(config);
    let mut terminal = ratatui::init();

    let outcome = loop {
        let now = Local::now().naive_local();
        while let Ok(update) = update_rx.try_recv() {
            app.on_update(update, now);
        }
        app.tick(now);

        if app.board.take_dirty() {
            terminal.draw(|frame| app.draw(frame))?;
        }

        if app.reload_requested {
            break Outcome::Reload;
        }

        match events::next(consts::ui::TICK)? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break Outcome::Quit;
                }
            }
            Event::Resize => app.board.touch(),
            Event::Tick => {}
        }
    };

    ratatui::restore();
    let _ = shutdown_tx.send(());
    for task in tasks {
        task.abort();
    }
    Ok(outcome)
}
