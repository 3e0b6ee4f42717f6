pub mod config;
pub mod document;
pub mod domain;
pub mod errors;
pub mod parsers;
pub mod ranking;

pub use config::settings::{AppConfig, ExtractionSettings, RankingSettings};
pub use domain::{MvpSummary, PlayerPer, PlayoffOutcome, RankedPlayer, StatsPhase};
pub use errors::StatsError;
pub use parsers::{
    extract_team_urls, parse_num_mvp, parse_team_playoff_result, top_playoff_per,
    top_regular_season_per,
};
pub use ranking::{rank_on_team, rank_team};
