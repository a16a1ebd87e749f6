pub mod settings;

pub use settings::{AppConfig, DisplayConfig, MakroohConfig, PostersConfig, ServerConfig};
