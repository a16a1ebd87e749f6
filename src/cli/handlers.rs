use anyhow::{anyhow, Result};
use chrono::Local;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::models::prayer::day_keys;
use crate::models::{PrayerName, TimeKind};
use crate::net::client::{DisplayServer, HttpDisplayServer};
use crate::utils::format::{format_12h, parse_hhmm};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub async fn handle_times(config: &AppConfig, prayer: Option<&str>) -> Result<()> {
    let only = match prayer {
        Some(name) => Some(PrayerName::from_str(name).map_err(|_| {
            anyhow!(
                "Unknown prayer '{}'. Use: fajr, sunrise, dhuhr, asr, maghrib, isha",
                name
            )
        })?),
        None => None,
    };

    let server = HttpDisplayServer::new(&config.server)?;
    let timetable = server.fetch_timetable().await?;

    let now = Local::now().naive_local();
    let (today_key, _) = day_keys(now.date());
    let day = timetable
        .day(&today_key)
        .ok_or_else(|| anyhow!("Server has no timetable entry for {}", today_key))?;

    println!();
    println_colored!(
        GOLD,
        "  {} — {}",
        config.display.masjid_name,
        today_key
    );
    println!();
    println_colored!(DIM, "  {:<10}{:>8}{:>10}", "", "Begins", "Jamat");

    for p in PrayerName::all() {
        if only.is_some_and(|want| want != p) {
            continue;
        }
        let start = day.time(p, TimeKind::Start);
        let jamat = if p.has_jamat() {
            format_12h(day.time(p, TimeKind::Jamat))
        } else {
            String::new()
        };
        let past = start
            .and_then(parse_hhmm)
            .is_some_and(|t| t <= now.time());
        if past {
            println_colored!(
                DIM,
                "  {:<10}{:>8}{:>10}",
                p.display_name(),
                format_12h(start),
                jamat
            );
        } else {
            println_colored!(
                BOLD,
                "  {:<10}{:>8}{:>10}",
                p.display_name(),
                format_12h(start),
                jamat
            );
        }
    }
    println!();
    Ok(())
}

// ─── Init ────────────────────────────────────────────────────────────────────

pub fn handle_init() -> Result<()> {
    let path = AppConfig::config_path()?;
    if path.exists() {
        println_colored!(AMBER, "  Config already exists at {}", path.display());
        return Ok(());
    }
    AppConfig::default().save()?;
    println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
    Ok(())
}
