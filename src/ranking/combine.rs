use super::types::{CombinedPlayer, CombinedTable};
use crate::domain::PlayerPer;

const MISSING_PER: f64 = 0.0;

/// Merge regular season and playoff leaderboards into one record per player.
///
/// A player absent from one list gets a PER of 0 for that phase.
pub fn combine_players(season: &[PlayerPer], playoffs: &[PlayerPer]) -> Vec<CombinedPlayer> {
    let mut table = CombinedTable::new();

    add_season_players(&mut table, season);
    add_playoff_players(&mut table, playoffs);

    table.into_players()
}

fn add_season_players(table: &mut CombinedTable, season: &[PlayerPer]) {
    for player in season {
        table.upsert(CombinedPlayer {
            player_id: player.player_id.clone(),
            name: player.name.clone(),
            season_per: player.per,
            playoff_per: MISSING_PER,
        });
    }
}

fn add_playoff_players(table: &mut CombinedTable, playoffs: &[PlayerPer]) {
    for player in playoffs {
        match table.get_mut(&player.player_id) {
            Some(existing) => existing.playoff_per = player.per,
            None => table.upsert(CombinedPlayer {
                player_id: player.player_id.clone(),
                name: player.name.clone(),
                season_per: MISSING_PER,
                playoff_per: player.per,
            }),
        }
    }
}

/// Round to 2 decimals, exact halves to even (5.125 -> 5.12)
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
