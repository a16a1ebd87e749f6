//! Timing constants for the display's periodic work.

pub mod poll {
    use std::time::Duration;

    /// Timetable refetch cadence.
    pub const TIMETABLE: Duration = Duration::from_secs(300);

    /// Dhikr reminder endpoint cadence.
    pub const DHIKR: Duration = Duration::from_secs(60);

    /// Content version check cadence.
    pub const VERSION: Duration = Duration::from_secs(60);

    /// Full poster re-probe cadence.
    pub const POSTERS: Duration = Duration::from_secs(30 * 60);
}

pub mod ui {
    use std::time::Duration;

    /// Key/tick pump timeout. Display rules run at one-second
    /// granularity regardless of this rate.
    pub const TICK: Duration = Duration::from_millis(250);

    /// Bound on queued poller updates.
    pub const UPDATE_QUEUE: usize = 32;
}

pub mod http {
    use std::time::Duration;

    /// Per-request timeout for the masjid server.
    pub const TIMEOUT: Duration = Duration::from_secs(10);
}
