pub mod settings;

pub use settings::{AppConfig, ExtractionSettings, RankingSettings};
