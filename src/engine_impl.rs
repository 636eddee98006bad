use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::base::{Coordinate, LastAction, Orientation, Side};
use crate::board_manager::FenceSet;
use crate::Engine;

/// Category of a pawn displacement. Rows grow towards the second player's baseline,
/// so `StepUp` decreases the row and `JumpForward` adds two rows.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum MoveKind {
    StepRight,
    StepLeft,
    StepUp,
    StepDown,
    JumpForward,
    JumpBackward,
    DiagonalStep,
    Invalid,
}

/// Reason an action was refused. The game state is untouched whenever one is returned.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, thiserror::Error)]
pub enum Decline {
    #[error("it's not your turn")]
    OutOfTurn,
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("can't stay in one place")]
    NullMove,
    #[error("tile is occupied by the opponent")]
    TileOccupiedByOpponent,
    #[error("tile is off the board")]
    OutOfBounds,
    #[error("tile can't be reached from the current location")]
    UnreachableDestination,
    #[error("blocked by a fence")]
    BlockedByFence,
    #[error("not facing the opponent")]
    NotFacingOpponent,
    #[error("valid orientations are 'h' and 'v'")]
    InvalidOrientation,
    #[error("no fences left")]
    NoFencesRemaining,
    #[error("fence can't be anchored there")]
    FenceAnchorInvalid,
    #[error("fence already in place")]
    FenceAlreadyPlaced,
    #[error("fence would seal the opponent's goal row")]
    FairPlayViolation,
}
impl Decline {
    /// `true` for the fair play refusal, which front ends report apart from the others.
    pub fn is_fair_play_violation(self) -> bool {
        self == Decline::FairPlayViolation
    }
}

/// Result of an accepted pawn move.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum MoveOutcome {
    Accepted,
    /// The pawn reached its goal row and the mover won
    GameOver,
}
impl Display for MoveOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveOutcome::Accepted => write!(f, "move accepted"),
            MoveOutcome::GameOver => write!(f, "move won the game"),
        }
    }
}

/// Classifies the displacement from `from` to `to`. Depends on nothing but the two coordinates.
/// # Example
/// ```
/// # use quoridor_utils::{classify_move, Coordinate, MoveKind};
/// let from = Coordinate::new(4, 4);
/// assert_eq!(classify_move(from, Coordinate::new(5, 4)), MoveKind::StepRight);
/// assert_eq!(classify_move(from, Coordinate::new(4, 3)), MoveKind::StepUp);
/// assert_eq!(classify_move(from, Coordinate::new(4, 6)), MoveKind::JumpForward);
/// assert_eq!(classify_move(from, Coordinate::new(3, 5)), MoveKind::DiagonalStep);
/// assert_eq!(classify_move(from, Coordinate::new(6, 4)), MoveKind::Invalid);
/// assert_eq!(classify_move(from, from), MoveKind::Invalid);
/// ```
pub fn classify_move(from: Coordinate, to: Coordinate) -> MoveKind {
    match from.delta(to) {
        (1, 0) => MoveKind::StepRight,
        (-1, 0) => MoveKind::StepLeft,
        (0, -1) => MoveKind::StepUp,
        (0, 1) => MoveKind::StepDown,
        (0, 2) => MoveKind::JumpForward,
        (0, -2) => MoveKind::JumpBackward,
        (-1 | 1, -1 | 1) => MoveKind::DiagonalStep,
        _ => MoveKind::Invalid,
    }
}

/// Moves the pawn of `side` to `destination`.
/// On success the pawn is moved, the turn passes and, if `destination` is one of the
/// mover's goal tiles, the mover is recorded as the winner.
/// If the move is illegal, `Err(Decline)` is returned and nothing changes.
pub fn move_pawn<E: Engine + ?Sized>(
    engine: &mut E,
    side: Side,
    destination: Coordinate,
) -> Result<MoveOutcome, Decline> {
    if let Err(reason) = validate_move(engine, side, destination) {
        log::debug!("{} can't move to {}: {}", side, destination, reason);
        return Err(reason);
    }
    let players = engine.players_mut();
    players.player_mut(side).set_location(destination);
    players.advance();
    if players.player(side).is_goal(destination) {
        players.declare_winner(side);
        log::info!("{} reached {} and won", side, destination);
        return Ok(MoveOutcome::GameOver);
    }
    log::debug!("{} moved to {}", side, destination);
    Ok(MoveOutcome::Accepted)
}

/// Places a fence of `orientation` at `anchor` on behalf of `side`.
/// On success the fence is recorded, `side` loses one fence and the turn passes.
/// If the placement is illegal, `Err(Decline)` is returned and nothing changes.
pub fn place_fence<E: Engine + ?Sized>(
    engine: &mut E,
    side: Side,
    orientation: Orientation,
    anchor: Coordinate,
) -> Result<(), Decline> {
    if let Err(reason) = validate_fence(engine, side, orientation, anchor) {
        log::debug!(
            "{} can't place {:?} fence at {}: {}",
            side,
            orientation,
            anchor,
            reason
        );
        return Err(reason);
    }
    engine.fences_mut().insert(orientation, anchor);
    let players = engine.players_mut();
    let taken = players.player_mut(side).take_fence();
    debug_assert!(taken, "fence stock was checked before placing");
    players.advance();
    log::debug!("{} placed {:?} fence at {}", side, orientation, anchor);
    Ok(())
}

/// Counts goal tiles of `side` that carry a horizontal fence.
pub fn sealed_goal_tiles<E: Engine + ?Sized>(engine: &E, side: Side) -> usize {
    let fences = engine.fences();
    engine
        .players()
        .player(side)
        .goal_tiles()
        .iter()
        .filter(|tile| fences.contains(Orientation::Horizontal, **tile))
        .count()
}

fn validate_move<E: Engine + ?Sized>(
    engine: &E,
    side: Side,
    destination: Coordinate,
) -> Result<(), Decline> {
    let players = engine.players();
    let player = players.player(side);
    let location = player.location();
    let opponent = players.opponent(side).location();
    if players.current_side() != side {
        return Err(Decline::OutOfTurn);
    }
    if players.winner().is_some() {
        return Err(Decline::GameAlreadyOver);
    }
    // Standing still is only refused right after a pawn move.
    if destination == location && player.last_action() == LastAction::MovedPawn {
        return Err(Decline::NullMove);
    }
    if destination == opponent {
        return Err(Decline::TileOccupiedByOpponent);
    }
    if !engine.geometry().is_tile(destination) {
        return Err(Decline::OutOfBounds);
    }
    let fences = engine.fences();
    match classify_move(location, destination) {
        MoveKind::Invalid => Err(Decline::UnreachableDestination),
        MoveKind::StepRight | MoveKind::StepLeft | MoveKind::StepUp | MoveKind::StepDown => {
            if fences.blocks(location, destination) {
                Err(Decline::BlockedByFence)
            } else {
                Ok(())
            }
        }
        MoveKind::JumpForward => check_jump(fences, location, 1, opponent),
        MoveKind::JumpBackward => check_jump(fences, location, -1, opponent),
        MoveKind::DiagonalStep => check_diagonal(fences, location, destination, opponent),
    }
}

/// A jump goes straight over an adjacent opponent. `direction` is `1` for forward, `-1` for backward.
fn check_jump(
    fences: &FenceSet,
    location: Coordinate,
    direction: i8,
    opponent: Coordinate,
) -> Result<(), Decline> {
    let over = location.offset(0, direction);
    let landing = over.offset(0, direction);
    if fences.blocks(location, over) || fences.blocks(over, landing) {
        return Err(Decline::BlockedByFence);
    }
    if opponent != over {
        return Err(Decline::NotFacingOpponent);
    }
    Ok(())
}

/// A diagonal step is allowed only when the opponent stands directly ahead or behind and a
/// horizontal fence behind the opponent rules out the straight jump. The sidestep itself
/// must not cross a vertical fence next to the opponent.
fn check_diagonal(
    fences: &FenceSet,
    location: Coordinate,
    destination: Coordinate,
    opponent: Coordinate,
) -> Result<(), Decline> {
    let (opponent_columns, toward_opponent) = location.delta(opponent);
    if opponent_columns != 0 || toward_opponent.abs() != 1 {
        return Err(Decline::NotFacingOpponent);
    }
    let (_, rows) = location.delta(destination);
    if rows != toward_opponent {
        return Err(Decline::UnreachableDestination);
    }
    let behind = opponent.offset(0, toward_opponent);
    if !fences.blocks(opponent, behind) {
        return Err(Decline::UnreachableDestination);
    }
    if fences.blocks(opponent, destination) {
        return Err(Decline::BlockedByFence);
    }
    Ok(())
}

fn validate_fence<E: Engine + ?Sized>(
    engine: &E,
    side: Side,
    orientation: Orientation,
    anchor: Coordinate,
) -> Result<(), Decline> {
    let players = engine.players();
    if players.current_side() != side {
        return Err(Decline::OutOfTurn);
    }
    if players.winner().is_some() {
        return Err(Decline::GameAlreadyOver);
    }
    if players.player(side).fence_count() == 0 {
        return Err(Decline::NoFencesRemaining);
    }
    if !engine.geometry().valid_fence_anchors(orientation).contains(&anchor) {
        return Err(Decline::FenceAnchorInvalid);
    }
    if engine.fences().contains(orientation, anchor) {
        return Err(Decline::FenceAlreadyPlaced);
    }
    // Only horizontal fences can seal a goal row.
    if orientation == Orientation::Horizontal {
        let opponent = side.opponent();
        let goal_size = players.player(opponent).goal_tiles().len();
        if players.player(opponent).is_goal(anchor)
            && sealed_goal_tiles(engine, opponent) == goal_size - 1
        {
            return Err(Decline::FairPlayViolation);
        }
    }
    Ok(())
}
