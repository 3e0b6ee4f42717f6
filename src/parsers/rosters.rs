use log::info;
use scraper::Html;

use super::SEASON_ROWS;
use crate::document::{select_all, select_href};

const TEAM_LINK: &str = r#"td[data-stat="team_name_abbr"] a"#;

/// Absolute URLs of the team-season pages linked from a player's per-game table.
///
/// One URL per linked row, in row order; a traded player's seasons yield one URL per team.
pub fn extract_team_urls(html: &Html, base_url: &str) -> Vec<String> {
    let urls: Vec<String> = select_all(html, SEASON_ROWS)
        .into_iter()
        .filter_map(|row| select_href(row, TEAM_LINK))
        .map(|href| build_url(base_url, &href))
        .collect();

    info!("  → Found {} team pages", urls.len());
    urls
}

fn build_url(base_url: &str, href: &str) -> String {
    format!("{}{}", base_url, href)
}
