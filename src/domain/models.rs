use serde::{Deserialize, Serialize};
use std::fmt;

/// Seasons in which a player finished within the MVP voting threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MvpSummary {
    pub count: usize,
    pub years: Vec<String>,
}

impl MvpSummary {
    pub fn from_years(years: Vec<String>) -> Self {
        Self {
            count: years.len(),
            years,
        }
    }
}

/// One row of an advanced-stats leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPer {
    pub name: String,
    pub per: f64,
    pub player_id: Option<String>, // Player page href, e.g. /players/j/jamesle01.html
    pub minutes: u32,
}

impl PlayerPer {
    pub fn new(name: &str, per: f64, player_id: Option<&str>, minutes: u32) -> Self {
        Self {
            name: name.to_string(),
            per,
            player_id: player_id.map(str::to_string),
            minutes,
        }
    }
}

/// Player with a rank label on the combined regular season + playoff table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub name: String,
    pub combined_per: f64,
    pub player_id: Option<String>,
    pub rank: String,
}

/// How far a team went in the playoffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffOutcome {
    Champions,
    ConferenceChampions,
    ConferenceFinals,
    Other, // Earlier exit or no playoffs
}

impl PlayoffOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            PlayoffOutcome::Champions => "champions",
            PlayoffOutcome::ConferenceChampions => "conference champions",
            PlayoffOutcome::ConferenceFinals => "conference finals",
            PlayoffOutcome::Other => "other",
        }
    }
}

impl fmt::Display for PlayoffOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which advanced-stats table a leaderboard is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPhase {
    RegularSeason,
    Playoffs,
}

impl StatsPhase {
    pub fn table_id(&self) -> &'static str {
        match self {
            StatsPhase::RegularSeason => "advanced",
            StatsPhase::Playoffs => "advanced_post",
        }
    }

    /// How many of the heaviest-minute players are eligible for the PER leaderboard.
    /// Playoff rotations are shorter, hence the smaller cutoff.
    pub fn minutes_cutoff(&self) -> usize {
        match self {
            StatsPhase::RegularSeason => 8,
            StatsPhase::Playoffs => 5,
        }
    }
}
