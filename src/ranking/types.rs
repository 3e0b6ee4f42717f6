use std::collections::HashMap;

/// Player page href; leaderboard rows without a link share the `None` key
pub type PlayerKey = Option<String>;
pub type PerValue = f64;

#[derive(Debug, Clone, PartialEq)]
pub struct CombinedPlayer {
    pub player_id: PlayerKey,
    pub name: String,
    pub season_per: PerValue,
    pub playoff_per: PerValue,
}

impl CombinedPlayer {
    pub fn weighted_per(&self, season_weight: f64, playoff_weight: f64) -> PerValue {
        self.season_per * season_weight + self.playoff_per * playoff_weight
    }
}

/// Combined records in first-seen order, indexed by player key
#[derive(Debug, Default)]
pub struct CombinedTable {
    players: Vec<CombinedPlayer>,
    index: HashMap<PlayerKey, usize>,
}

impl CombinedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_mut(&mut self, key: &PlayerKey) -> Option<&mut CombinedPlayer> {
        let idx = *self.index.get(key)?;
        self.players.get_mut(idx)
    }

    /// Insert a record, replacing any existing one for the same key in place
    pub fn upsert(&mut self, player: CombinedPlayer) {
        match self.index.get(&player.player_id) {
            Some(&idx) => self.players[idx] = player,
            None => {
                self.index.insert(player.player_id.clone(), self.players.len());
                self.players.push(player);
            }
        }
    }

    pub fn into_players(self) -> Vec<CombinedPlayer> {
        self.players
    }
}
