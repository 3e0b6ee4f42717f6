use anyhow::Result;
use scraper::Html;

use crate::domain::{MvpSummary, PlayerPer};
use crate::parsers;

pub struct RankingSettings {
    pub season_per_weight: f64,
    pub playoff_per_weight: f64,
    pub co_rank_margin: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            season_per_weight: 0.7,
            playoff_per_weight: 0.3,
            co_rank_margin: 0.5,
        }
    }
}

pub struct ExtractionSettings {
    pub base_url: &'static str,
    pub max_mvp_rank: u32,
    pub top_n: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.basketball-reference.com",
            max_mvp_rank: 1,
            top_n: 5,
        }
    }
}

impl ExtractionSettings {
    /// MVP seasons within `max_mvp_rank`
    pub fn mvp_seasons(&self, html: &Html) -> Result<MvpSummary> {
        parsers::parse_num_mvp(html, self.max_mvp_rank)
    }

    /// Team page URLs resolved against `base_url`
    pub fn team_urls(&self, html: &Html) -> Vec<String> {
        parsers::extract_team_urls(html, self.base_url)
    }

    pub fn regular_season_leaders(&self, html: &Html) -> Vec<PlayerPer> {
        parsers::top_regular_season_per(html, self.top_n)
    }

    pub fn playoff_leaders(&self, html: &Html) -> Vec<PlayerPer> {
        parsers::top_playoff_per(html, self.top_n)
    }
}

pub struct AppConfig {
    pub ranking: RankingSettings,
    pub extraction: ExtractionSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            extraction: ExtractionSettings::default(),
        }
    }
}
