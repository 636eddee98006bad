//! Manager of players' data
//!
//! This module defines [`PlayerManager`] struct, which keeps both [`Player`] records together
//! with the turn and the state of the game. The main methods are [`advance`] and [`declare_winner`].
//! [`advance`] passes the turn after an accepted action and counts actions,
//! [`declare_winner`] ends the game. Once a winner is recorded it can't be changed.
//!
//! [`advance`]: PlayerManager::advance
//! [`declare_winner`]: PlayerManager::declare_winner

use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::base::{Coordinate, LastAction, Side, BOARD_SIZE};
use crate::config::GameConfig;

/// State of one side: where the pawn stands, how many fences are left,
/// what was done last and which tiles win the game.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Player {
    side: Side,
    location: Coordinate,
    fence_count: u8,
    last_action: LastAction,
    goal_tiles: [Coordinate; BOARD_SIZE as usize],
}
impl Player {
    /// Creates a player on its start tile.
    /// # Example
    /// ```
    /// # use quoridor_utils::base::{Coordinate, Side};
    /// # use quoridor_utils::player_manager::Player;
    /// let player = Player::new(Side::First, 10);
    /// assert_eq!(player.location(), Coordinate::new(4, 0));
    /// assert!(player.goal_tiles().iter().all(|tile| tile.row == 8));
    /// ```
    pub fn new(side: Side, fence_count: u8) -> Self {
        let row = side.goal_row();
        let mut goal_tiles = [Coordinate::new(0, row); BOARD_SIZE as usize];
        for (column, tile) in (0..BOARD_SIZE).zip(goal_tiles.iter_mut()) {
            tile.column = column;
        }
        Self {
            side,
            location: side.start(),
            fence_count,
            last_action: LastAction::None,
            goal_tiles,
        }
    }
    pub fn side(&self) -> Side {
        self.side
    }
    pub fn location(&self) -> Coordinate {
        self.location
    }
    pub fn fence_count(&self) -> u8 {
        self.fence_count
    }
    pub fn last_action(&self) -> LastAction {
        self.last_action
    }
    pub fn goal_tiles(&self) -> &[Coordinate] {
        &self.goal_tiles
    }
    pub fn is_goal(&self, tile: Coordinate) -> bool {
        self.goal_tiles.contains(&tile)
    }
    pub(crate) fn set_location(&mut self, location: Coordinate) {
        self.location = location;
        self.last_action = LastAction::MovedPawn;
    }
    /// Takes one fence from the player's stock.
    /// Returns `false` and changes nothing if there are none left.
    pub(crate) fn take_fence(&mut self) -> bool {
        match self.fence_count.checked_sub(1) {
            Some(remaining) => {
                self.fence_count = remaining;
                self.last_action = LastAction::PlacedFence;
                true
            }
            None => false,
        }
    }
}

/// Helper structure to track players' state during game.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PlayerManager {
    players: [Player; 2],
    current_side: Side,
    current_move: usize,
    game_state: GameState,
}
impl PlayerManager {
    /// Creates new [`PlayerManager`]. Both players stand on their start tiles with
    /// `config.fences_per_player` fences, `config.first_to_move` has the turn,
    /// `current_move` is `0` and `game_state` is [`GameState::Ongoing`].
    /// # Example
    /// ```
    /// # use quoridor_utils::base::Side;
    /// # use quoridor_utils::config::GameConfig;
    /// # use quoridor_utils::player_manager::*;
    /// let pm = PlayerManager::new(&GameConfig::default());
    /// assert_eq!(
    ///     (pm.current_side(), pm.current_move(), pm.game_state()),
    ///     (Side::First, 0, GameState::Ongoing)
    /// );
    /// ```
    pub fn new(config: &GameConfig) -> Self {
        Self {
            players: Side::BOTH.map(|side| Player::new(side, config.fences_per_player)),
            current_side: config.first_to_move,
            current_move: 0,
            game_state: GameState::Ongoing,
        }
    }
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }
    pub(crate) fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }
    pub fn opponent(&self, side: Side) -> &Player {
        self.player(side.opponent())
    }
    pub fn current_side(&self) -> Side {
        self.current_side
    }
    /// Number of accepted actions so far.
    pub fn current_move(&self) -> usize {
        self.current_move
    }
    pub fn game_state(&self) -> GameState {
        self.game_state
    }
    pub fn winner(&self) -> Option<Side> {
        match self.game_state {
            GameState::Ongoing => None,
            GameState::Won(side) => Some(side),
        }
    }
    /// Passes the turn to the other side and counts the action.
    /// # Example
    /// ```
    /// # use quoridor_utils::base::Side;
    /// # use quoridor_utils::config::GameConfig;
    /// # use quoridor_utils::player_manager::*;
    /// let mut pm = PlayerManager::new(&GameConfig::default());
    /// pm.advance();
    /// assert_eq!((pm.current_side(), pm.current_move()), (Side::Second, 1));
    /// pm.advance();
    /// assert_eq!((pm.current_side(), pm.current_move()), (Side::First, 2));
    /// ```
    pub fn advance(&mut self) {
        self.current_side = self.current_side.opponent();
        self.current_move += 1;
    }
    /// Records `side` as the winner. Does nothing if the game has already ended.
    /// # Example
    /// ```
    /// # use quoridor_utils::base::Side;
    /// # use quoridor_utils::config::GameConfig;
    /// # use quoridor_utils::player_manager::*;
    /// let mut pm = PlayerManager::new(&GameConfig::default());
    /// pm.declare_winner(Side::Second);
    /// pm.declare_winner(Side::First);
    /// assert_eq!(pm.game_state(), GameState::Won(Side::Second));
    /// ```
    pub fn declare_winner(&mut self, side: Side) {
        if self.game_state == GameState::Ongoing {
            self.game_state = GameState::Won(side);
        }
    }
}

/// The state of the game.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum GameState {
    /// The game hasn't ended
    Ongoing,
    /// A pawn has reached its goal row
    Won(Side),
}
impl Display for GameState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameState::Ongoing => write!(f, "game is in progress"),
            GameState::Won(winner) => write!(f, "game was won by the {}", winner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_start_on_opposite_baselines() {
        let pm = PlayerManager::new(&GameConfig::default());
        let first = pm.player(Side::First);
        let second = pm.player(Side::Second);
        assert_eq!(first.location(), Coordinate::new(4, 0));
        assert_eq!(second.location(), Coordinate::new(4, 8));
        assert_eq!((first.fence_count(), second.fence_count()), (10, 10));
        assert_eq!(first.last_action(), LastAction::None);
        assert!(first.is_goal(Coordinate::new(0, 8)));
        assert!(!first.is_goal(Coordinate::new(0, 0)));
        assert!(second.is_goal(Coordinate::new(8, 0)));
        assert_eq!(pm.opponent(Side::First), second);
    }

    #[test]
    fn goal_tiles_cover_whole_row() {
        let player = Player::new(Side::Second, 10);
        let columns: Vec<i8> = player.goal_tiles().iter().map(|t| t.column).collect();
        assert_eq!(columns, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn fence_count_stops_at_zero() {
        let mut player = Player::new(Side::First, 1);
        assert!(player.take_fence());
        assert_eq!(player.last_action(), LastAction::PlacedFence);
        assert!(!player.take_fence());
        assert_eq!(player.fence_count(), 0);
    }

    #[test]
    fn moving_records_last_action() {
        let mut pm = PlayerManager::new(&GameConfig::default());
        pm.player_mut(Side::Second).set_location(Coordinate::new(4, 7));
        assert_eq!(pm.player(Side::Second).location(), Coordinate::new(4, 7));
        assert_eq!(pm.player(Side::Second).last_action(), LastAction::MovedPawn);
        assert_eq!(pm.player(Side::First).last_action(), LastAction::None);
    }

    #[test]
    fn config_controls_turn_and_stock() {
        let config = GameConfig::default()
            .with_fences_per_player(3)
            .with_first_to_move(Side::Second);
        let pm = PlayerManager::new(&config);
        assert_eq!(pm.current_side(), Side::Second);
        assert_eq!(pm.player(Side::First).fence_count(), 3);
        assert_eq!(pm.winner(), None);
    }
}
