//! Move legality for a two-player fence game on a 9×9 board (Quoridor rules).
//!
//! The [`Game`] owns a match and exposes the whole public surface: pawn moves, fence
//! placements, the turn, the winner and per-side queries. The rules themselves live in
//! [`engine_impl`] and run against any [`Engine`], i.e. anything that can hand out the
//! board, the fences and the players.
//!
//! ```
//! use quoridor_utils::{Coordinate, Decline, Game, MoveOutcome, Orientation, Side};
//!
//! let mut game = Game::new();
//! assert_eq!(game.move_pawn(Side::Second, Coordinate::new(4, 7)), Err(Decline::OutOfTurn));
//! assert_eq!(game.move_pawn(Side::First, Coordinate::new(4, 1)), Ok(MoveOutcome::Accepted));
//! assert_eq!(
//!     game.place_fence(Side::First, Orientation::Horizontal, Coordinate::new(6, 5)),
//!     Err(Decline::OutOfTurn)
//! );
//! assert_eq!(game.current_turn(), Side::Second);
//! ```

pub mod base;
pub mod board_manager;
pub mod config;
pub mod engine_impl;
pub mod game;
pub mod player_manager;

pub use base::{Coordinate, LastAction, Orientation, Side, UnknownSide};
pub use config::GameConfig;
pub use engine_impl::{classify_move, Decline, MoveKind, MoveOutcome};
pub use game::Game;
pub use player_manager::{GameState, Player};

use board_manager::{BoardGeometry, FenceSet};
use player_manager::PlayerManager;

/// State the rules run against.
pub trait Engine {
    fn geometry(&self) -> &BoardGeometry;
    fn fences(&self) -> &FenceSet;
    fn fences_mut(&mut self) -> &mut FenceSet;
    fn players(&self) -> &PlayerManager;
    fn players_mut(&mut self) -> &mut PlayerManager;
}
