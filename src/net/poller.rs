//! Background fetch loops.
//!
//! Each poller owns one remote concern, fetches immediately on start,
//! then sleeps for its interval. A failed fetch is logged and retried
//! on the next cycle; the display keeps whatever it last had.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use log::{debug, warn};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::consts;
use crate::models::{poster, DhikrTimes, Poster, Timetable};
use crate::net::client::DisplayServer;

/// State pushed from a poller to the display loop.
#[derive(Debug, Clone)]
pub enum Update {
    Timetable(Timetable),
    Dhikr(DhikrTimes),
    Version(String),
    Posters(Vec<Poster>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PollerConfig {
    pub include_photos: bool,
}

/// Spawns the four pollers. Each gets its own shutdown receiver;
/// dropping the update receiver also winds them down.
pub fn spawn_pollers(
    server: Arc<dyn DisplayServer>,
    config: PollerConfig,
    updates: mpsc::Sender<Update>,
    shutdown: &broadcast::Sender<()>,
) -> Vec<JoinHandle<()>> {
    vec![
        tokio::spawn(timetable_poller(
            server.clone(),
            updates.clone(),
            shutdown.subscribe(),
            consts::poll::TIMETABLE,
        )),
        tokio::spawn(dhikr_poller(
            server.clone(),
            updates.clone(),
            shutdown.subscribe(),
            consts::poll::DHIKR,
        )),
        tokio::spawn(version_poller(
            server.clone(),
            updates.clone(),
            shutdown.subscribe(),
            consts::poll::VERSION,
        )),
        tokio::spawn(poster_poller(
            server,
            config,
            updates,
            shutdown.subscribe(),
            consts::poll::POSTERS,
        )),
    ]
}

async fn timetable_poller(
    server: Arc<dyn DisplayServer>,
    updates: mpsc::Sender<Update>,
    mut shutdown: broadcast::Receiver<()>,
    every: Duration,
) {
    loop {
        match server.fetch_timetable().await {
            Ok(timetable) => {
                if updates.send(Update::Timetable(timetable)).await.is_err() {
                    return;
                }
            }
            Err(e) => debug!("timetable fetch failed: {}", e),
        }
        tokio::select! {
            _ = shutdown.recv() => return,
            _ = tokio::time::sleep(every) => {}
        }
    }
}

async fn dhikr_poller(
    server: Arc<dyn DisplayServer>,
    updates: mpsc::Sender<Update>,
    mut shutdown: broadcast::Receiver<()>,
    every: Duration,
) {
    loop {
        match server.fetch_dhikr().await {
            Ok(times) => {
                if updates.send(Update::Dhikr(times)).await.is_err() {
                    return;
                }
            }
            Err(e) => warn!("dhikr fetch failed: {}", e),
        }
        tokio::select! {
            _ = shutdown.recv() => return,
            _ = tokio::time::sleep(every) => {}
        }
    }
}

async fn version_poller(
    server: Arc<dyn DisplayServer>,
    updates: mpsc::Sender<Update>,
    mut shutdown: broadcast::Receiver<()>,
    every: Duration,
) {
    loop {
        match server.fetch_version().await {
            Ok(version) => {
                if updates.send(Update::Version(version)).await.is_err() {
                    return;
                }
            }
            Err(e) => debug!("version fetch failed: {}", e),
        }
        tokio::select! {
            _ = shutdown.recv() => return,
            _ = tokio::time::sleep(every) => {}
        }
    }
}

/// Probes every candidate poster each cycle and delivers the ones the
/// server actually has, in probe order. The set is only swapped in once
/// the whole probe pass has resolved.
async fn poster_poller(
    server: Arc<dyn DisplayServer>,
    config: PollerConfig,
    updates: mpsc::Sender<Update>,
    mut shutdown: broadcast::Receiver<()>,
    every: Duration,
) {
    loop {
        let now = Local::now().naive_local();
        let mut posters = Vec::new();
        for file in poster::probe_list(config.include_photos, now) {
            match server.probe_poster(&file).await {
                Ok(p) => posters.push(p),
                Err(e) => debug!("poster {} not available: {}", file, e),
            }
        }
        debug!("poster probe complete, {} available", posters.len());
        if updates.send(Update::Posters(posters)).await.is_err() {
            return;
        }
        tokio::select! {
            _ = shutdown.recv() => return,
            _ = tokio::time::sleep(every) => {}
        }
    }
}
