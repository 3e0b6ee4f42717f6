pub mod advanced;
pub mod awards;
pub mod playoffs;
pub mod rosters;

/// Season rows of a player's per-game stats table
pub(crate) const SEASON_ROWS: &str = "#per_game_stats tr";

pub use advanced::{select_top_per, top_per_players, top_playoff_per, top_regular_season_per};
pub use awards::{AwardParser, parse_num_mvp};
pub use playoffs::{classify_playoff_text, parse_team_playoff_result};
pub use rosters::extract_team_urls;
