mod combine;
mod ordinal;
pub mod team;
pub mod types;

pub use combine::combine_players;
pub use ordinal::assign_ranks;
pub use team::{rank_on_team, rank_team};
pub use types::{CombinedPlayer, PlayerKey};
