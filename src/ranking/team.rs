use log::debug;

use super::combine::{combine_players, round_to_hundredths};
use super::ordinal::assign_ranks;
use super::types::CombinedPlayer;
use crate::config::settings::RankingSettings;
use crate::domain::{PlayerPer, RankedPlayer};

/// Rank every player on a team by weighted regular season + playoff PER
pub fn rank_team(
    season: &[PlayerPer],
    playoffs: &[PlayerPer],
    settings: &RankingSettings,
) -> Vec<RankedPlayer> {
    let mut scored = score_players(combine_players(season, playoffs), settings);
    sort_by_score(&mut scored);

    let scores: Vec<f64> = scored.iter().map(|(_, score)| *score).collect();
    let ranks = assign_ranks(&scores, settings.co_rank_margin);

    scored
        .into_iter()
        .zip(ranks)
        .map(|((player, combined_per), rank)| build_ranked_player(player, combined_per, rank))
        .collect()
}

/// Rank label of `player_id` on the team, or `None` if they appear in neither leaderboard
pub fn rank_on_team(
    player_id: &str,
    season: &[PlayerPer],
    playoffs: &[PlayerPer],
    settings: &RankingSettings,
) -> Option<String> {
    let ranked = rank_team(season, playoffs, settings);

    let rank = ranked
        .into_iter()
        .find(|player| player.player_id.as_deref() == Some(player_id))
        .map(|player| player.rank);

    debug!("  Rank of {} on team: {:?}", player_id, rank);
    rank
}

fn score_players(
    players: Vec<CombinedPlayer>,
    settings: &RankingSettings,
) -> Vec<(CombinedPlayer, f64)> {
    players
        .into_iter()
        .map(|player| {
            let score = player.weighted_per(settings.season_per_weight, settings.playoff_per_weight);
            (player, round_to_hundredths(score))
        })
        .collect()
}

fn sort_by_score(scored: &mut [(CombinedPlayer, f64)]) {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
}

fn build_ranked_player(player: CombinedPlayer, combined_per: f64, rank: String) -> RankedPlayer {
    RankedPlayer {
        name: player.name,
        combined_per,
        player_id: player.player_id,
        rank,
    }
}
