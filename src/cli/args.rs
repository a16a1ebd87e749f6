use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mihrab",
    version,
    author,
    about = "Masjid prayer-times display for wall-mounted terminal screens"
)]
pub struct Cli {
    /// Override the content server base URL from config.toml
    #[arg(long, value_name = "URL", global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch today's timetable from the server and print it
    Times {
        /// Show a single prayer (fajr, sunrise, dhuhr, asr, maghrib, isha)
        prayer: Option<String>,
    },
    /// Write a default config.toml and print its location
    Init,
}
