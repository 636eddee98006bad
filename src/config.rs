#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::base::{Side, FENCES_PER_PLAYER};

/// Settings a match is created with. The board, the start tiles and the goal rows are fixed.
/// # Example
/// ```
/// # use quoridor_utils::base::Side;
/// # use quoridor_utils::config::GameConfig;
/// let config = GameConfig::default().with_fences_per_player(5);
/// assert_eq!(config.fences_per_player, 5);
/// assert_eq!(config.first_to_move, Side::First);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameConfig {
    /// Fences each side starts with
    pub fences_per_player: u8,
    /// Side that makes the opening action
    pub first_to_move: Side,
}
impl GameConfig {
    pub fn with_fences_per_player(mut self, fences: u8) -> Self {
        self.fences_per_player = fences;
        self
    }
    pub fn with_first_to_move(mut self, side: Side) -> Self {
        self.first_to_move = side;
        self
    }
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fences_per_player: FENCES_PER_PLAYER,
            first_to_move: Side::First,
        }
    }
}
