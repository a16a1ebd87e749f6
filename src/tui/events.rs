use std::time::Duration;

use crossterm::event::{self, Event as CEvent, KeyEvent};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Wait up to `timeout` for terminal input, reporting a tick when
/// none arrives. The session loop owns its own cadence, so there is
/// no pump thread here; polling blocks at most one tick.
pub fn next(timeout: Duration) -> std::io::Result<Event> {
    if event::poll(timeout)? {
        match event::read()? {
            CEvent::Key(key) => return Ok(Event::Key(key)),
            CEvent::Resize(_, _) => return Ok(Event::Resize),
            _ => {}
        }
    }
    Ok(Event::Tick)
}
