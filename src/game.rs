//! A single match
//!
//! [`Game`] owns everything a match needs: the board geometry, the placed fences and both
//! players. Every accepted action mutates it and passes the turn; a declined one leaves it
//! as it was. Matches share nothing, so independent games can live on different threads.

use crate::base::{Coordinate, LastAction, Orientation, Side};
use crate::board_manager::{BoardGeometry, FenceSet};
use crate::config::GameConfig;
use crate::engine_impl::{self, Decline, MoveOutcome};
use crate::player_manager::{GameState, PlayerManager};
use crate::Engine;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    geometry: BoardGeometry,
    fences: FenceSet,
    players: PlayerManager,
    config: GameConfig,
}
impl Game {
    /// Creates a game with [`GameConfig::default`]: 10 fences each, first player to move.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            geometry: BoardGeometry::new(),
            fences: FenceSet::new(),
            players: PlayerManager::new(&config),
            config,
        }
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    /// See [`engine_impl::move_pawn`].
    pub fn move_pawn(
        &mut self,
        side: Side,
        destination: Coordinate,
    ) -> Result<MoveOutcome, Decline> {
        engine_impl::move_pawn(self, side, destination)
    }
    /// See [`engine_impl::place_fence`].
    /// # Example
    /// ```
    /// # use quoridor_utils::{Coordinate, Decline, Game, Orientation, Side};
    /// let mut game = Game::new();
    /// let anchor = Coordinate::new(3, 3);
    /// assert_eq!(game.place_fence(Side::First, Orientation::Vertical, anchor), Ok(()));
    /// assert_eq!(game.fence_count(Side::First), 9);
    /// assert_eq!(
    ///     game.place_fence(Side::Second, Orientation::Vertical, anchor),
    ///     Err(Decline::FenceAlreadyPlaced)
    /// );
    /// ```
    pub fn place_fence(
        &mut self,
        side: Side,
        orientation: Orientation,
        anchor: Coordinate,
    ) -> Result<(), Decline> {
        engine_impl::place_fence(self, side, orientation, anchor)
    }
    pub fn current_turn(&self) -> Side {
        self.players.current_side()
    }
    pub fn winner(&self) -> Option<Side> {
        self.players.winner()
    }
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }
    pub fn game_state(&self) -> GameState {
        self.players.game_state()
    }
    /// Number of accepted actions so far.
    pub fn move_count(&self) -> usize {
        self.players.current_move()
    }
    pub fn location(&self, side: Side) -> Coordinate {
        self.players.player(side).location()
    }
    pub fn opponent_location(&self, side: Side) -> Coordinate {
        self.players.opponent(side).location()
    }
    pub fn fence_count(&self, side: Side) -> u8 {
        self.players.player(side).fence_count()
    }
    pub fn goal_tiles(&self, side: Side) -> &[Coordinate] {
        self.players.player(side).goal_tiles()
    }
    pub fn last_action(&self, side: Side) -> LastAction {
        self.players.player(side).last_action()
    }
    /// Anchors of the placed fences of `orientation`, oldest first.
    pub fn placed_fences(&self, orientation: Orientation) -> &[Coordinate] {
        self.fences.get(orientation)
    }
    /// How many goal tiles of `side` carry a horizontal fence.
    pub fn sealed_goal_tiles(&self, side: Side) -> usize {
        engine_impl::sealed_goal_tiles(self, side)
    }
    /// Whether the pawn of `side` still has a fence-free path to its goal row.
    /// Pawns don't block the path. Fence placement never consults this.
    /// # Example
    /// ```
    /// # use quoridor_utils::{Game, Side};
    /// let game = Game::new();
    /// assert!(game.can_reach_goal(Side::First));
    /// assert!(game.can_reach_goal(Side::Second));
    /// ```
    pub fn can_reach_goal(&self, side: Side) -> bool {
        self.geometry
            .search_row(&self.fences, self.location(side), side.goal_row())
            .is_some()
    }
}
impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
impl Engine for Game {
    fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }
    fn fences(&self) -> &FenceSet {
        &self.fences
    }
    fn fences_mut(&mut self) -> &mut FenceSet {
        &mut self.fences
    }
    fn players(&self) -> &PlayerManager {
        &self.players
    }
    fn players_mut(&mut self) -> &mut PlayerManager {
        &mut self.players
    }
}
