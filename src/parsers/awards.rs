use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use scraper::{ElementRef, Html};

use super::SEASON_ROWS;
use crate::document::{select_all, select_text};
use crate::domain::MvpSummary;
use crate::errors::{StatsError, pattern_context};

const MVP_MARKER: &str = "MVP-";
const MVP_RANK_PATTERN: &str = r"MVP-\s*(\d+)";

/// Reads MVP voting finishes from a player's per-game stats table
pub struct AwardParser {
    mvp_rank_regex: Regex,
}

impl AwardParser {
    pub fn new() -> Result<Self> {
        let mvp_rank_regex =
            Regex::new(MVP_RANK_PATTERN).context(pattern_context(MVP_RANK_PATTERN))?;

        Ok(Self { mvp_rank_regex })
    }

    /// Count the seasons where the player finished at or above `max_mvp` in MVP voting.
    ///
    /// Fails when a single season lists more than one MVP finish.
    pub fn parse_num_mvp(&self, html: &Html, max_mvp: u32) -> Result<MvpSummary> {
        let mut years = Vec::new();

        for row in select_all(html, SEASON_ROWS) {
            let Some((year, awards)) = Self::read_row(row) else {
                continue;
            };

            match self.mvp_rank(&year, &awards)? {
                Some(rank) if rank <= max_mvp => years.push(year),
                Some(rank) => debug!("  {}: MVP-{} is outside the top {}", year, rank, max_mvp),
                None => {}
            }
        }

        info!("  → Found {} seasons within MVP-{}", years.len(), max_mvp);
        Ok(MvpSummary::from_years(years))
    }

    /// MVP voting finish listed in one season's awards text, if any
    pub fn mvp_rank(&self, year: &str, awards: &str) -> Result<Option<u32>> {
        let tokens = mvp_tokens(awards);

        match tokens.as_slice() {
            [] => Ok(None),
            [token] => Ok(self.parse_rank(year, token)),
            _ => Err(StatsError::MultipleMvpAwards {
                year: year.to_string(),
                awards: tokens.iter().map(|t| t.trim().to_string()).collect(),
            }
            .into()),
        }
    }

    fn parse_rank(&self, year: &str, token: &str) -> Option<u32> {
        let rank = self
            .mvp_rank_regex
            .captures(token)
            .and_then(|captures| captures.get(1))
            .and_then(|m| m.as_str().parse().ok());

        if rank.is_none() {
            warn!("  Failed to parse MVP rank in {} from: {}", year, token);
        }
        rank
    }

    // --- Row Access ---

    fn read_row(row: ElementRef) -> Option<(String, String)> {
        let year = select_text(row, r#"th[data-stat="year_id"] a"#)?;
        let awards = select_text(row, r#"td[data-stat="awards"]"#)?;

        if year.is_empty() || awards.is_empty() {
            return None;
        }
        Some((year, awards))
    }
}

fn mvp_tokens(awards: &str) -> Vec<&str> {
    awards
        .split(',')
        .filter(|award| award.contains(MVP_MARKER))
        .collect()
}

/// Count the seasons where the player finished at or above `max_mvp` in MVP voting
pub fn parse_num_mvp(html: &Html, max_mvp: u32) -> Result<MvpSummary> {
    AwardParser::new()?.parse_num_mvp(html, max_mvp)
}
