use log::{debug, info, warn};
use scraper::{ElementRef, Html};

use crate::document::{find_by_id, select_href, select_text, selector, uncomment};
use crate::domain::{PlayerPer, StatsPhase};

const NAME_LINK: &str = r#"td[data-stat="name_display"] a"#;
const MINUTES_CELL: &str = r#"td[data-stat="mp"]"#;
const PER_CELL: &str = r#"td[data-stat="per"]"#;

/// Top `top_n` regular-season players by PER among the 8 with the most minutes
pub fn top_regular_season_per(html: &Html, top_n: usize) -> Vec<PlayerPer> {
    top_per_players(html, StatsPhase::RegularSeason, top_n)
}

/// Top `top_n` playoff players by PER among the 5 with the most minutes
pub fn top_playoff_per(html: &Html, top_n: usize) -> Vec<PlayerPer> {
    top_per_players(html, StatsPhase::Playoffs, top_n)
}

/// Read a team page's advanced table for `phase` and pick its PER leaders.
///
/// The advanced tables are served inside HTML comments, so the document is re-parsed
/// with the comment markers removed. A missing table (e.g. no playoff run) yields an
/// empty list.
pub fn top_per_players(html: &Html, phase: StatsPhase, top_n: usize) -> Vec<PlayerPer> {
    let cleaned = uncomment(html);

    let Some(table) = find_by_id(&cleaned, phase.table_id()) else {
        info!("  → No #{} table found", phase.table_id());
        return Vec::new();
    };

    let players: Vec<PlayerPer> = table
        .select(&selector("tbody tr"))
        .filter_map(read_player_row)
        .collect();

    debug!("  Collected {} players from #{}", players.len(), phase.table_id());
    select_top_per(players, phase.minutes_cutoff(), top_n)
}

/// Keep the `minutes_cutoff` heaviest-minute players, then the `top_n` best of those by PER
pub fn select_top_per(
    mut players: Vec<PlayerPer>,
    minutes_cutoff: usize,
    top_n: usize,
) -> Vec<PlayerPer> {
    players.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    players.truncate(minutes_cutoff);

    players.sort_by(|a, b| b.per.total_cmp(&a.per));
    players.truncate(top_n);
    players
}

// --- Row Parsing ---

fn read_player_row(row: ElementRef) -> Option<PlayerPer> {
    let per_text = select_text(row, PER_CELL)?;
    let per_text = per_text.trim();
    if per_text.is_empty() {
        // Partial-season and traded players have no PER
        return None;
    }

    let name = select_text(row, NAME_LINK)?;
    let minutes_text = select_text(row, MINUTES_CELL)?;

    let minutes = parse_cell::<u32>(&name, "minutes", &minutes_text)?;
    let per = parse_cell::<f64>(&name, "PER", per_text)?;

    Some(PlayerPer {
        name: name.trim().to_string(),
        per,
        player_id: select_href(row, NAME_LINK),
        minutes,
    })
}

fn parse_cell<T: std::str::FromStr>(name: &str, field: &str, text: &str) -> Option<T> {
    let value = text.trim().parse().ok();
    if value.is_none() {
        warn!("  Skipping {}: unparsable {} '{}'", name.trim(), field, text.trim());
    }
    value
}
