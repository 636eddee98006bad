//! Static layout of the board and the fences placed on it
//!
//! [`BoardGeometry`] holds the fixed coordinate sets of a 9×9 board: the tiles, the wall ring
//! around them and the anchors where fences may be placed. It also answers neighbor queries.
//! [`FenceSet`] records placed fences and answers whether a step between two adjacent tiles
//! crosses one of them.
//!
//! A horizontal fence anchored at `(c, r)` sits between rows `r - 1` and `r` of column `c`.
//! A vertical fence anchored at `(c, r)` sits between columns `c - 1` and `c` of row `r`.

use std::collections::{HashSet, VecDeque};
use std::ops::ControlFlow;

use crate::base::{Coordinate, Orientation, BOARD_SIZE};

const ORTHOGONAL_OFFSETS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
const DIAGONAL_OFFSETS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Coordinate sets of the board. They never change during a game.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoardGeometry {
    tiles: Vec<Coordinate>,
    tile_set: HashSet<Coordinate>,
    walls: HashSet<Coordinate>,
    horizontal_anchors: HashSet<Coordinate>,
    vertical_anchors: HashSet<Coordinate>,
}
impl BoardGeometry {
    pub fn new() -> Self {
        let tiles: Vec<Coordinate> = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |column| Coordinate::new(column, row)))
            .collect();
        // The ring runs one past the far corner on every side.
        let walls = (-1..=BOARD_SIZE + 1)
            .flat_map(|n| {
                [
                    Coordinate::new(-1, n),
                    Coordinate::new(BOARD_SIZE, n),
                    Coordinate::new(n, -1),
                    Coordinate::new(n, BOARD_SIZE),
                ]
            })
            .collect();
        let horizontal_anchors = (0..BOARD_SIZE)
            .flat_map(|column| (1..BOARD_SIZE).map(move |row| Coordinate::new(column, row)))
            .collect();
        let vertical_anchors = (1..BOARD_SIZE)
            .flat_map(|column| (0..BOARD_SIZE).map(move |row| Coordinate::new(column, row)))
            .collect();
        Self {
            tile_set: tiles.iter().copied().collect(),
            tiles,
            walls,
            horizontal_anchors,
            vertical_anchors,
        }
    }
    /// All 81 tiles, row by row.
    pub fn valid_tiles(&self) -> &[Coordinate] {
        &self.tiles
    }
    pub fn is_tile(&self, coordinate: Coordinate) -> bool {
        self.tile_set.contains(&coordinate)
    }
    pub fn boundary_coordinates(&self) -> &HashSet<Coordinate> {
        &self.walls
    }
    pub fn is_boundary(&self, coordinate: Coordinate) -> bool {
        self.walls.contains(&coordinate)
    }
    pub fn valid_horizontal_fence_anchors(&self) -> &HashSet<Coordinate> {
        &self.horizontal_anchors
    }
    pub fn valid_vertical_fence_anchors(&self) -> &HashSet<Coordinate> {
        &self.vertical_anchors
    }
    pub fn valid_fence_anchors(&self, orientation: Orientation) -> &HashSet<Coordinate> {
        match orientation {
            Orientation::Horizontal => &self.horizontal_anchors,
            Orientation::Vertical => &self.vertical_anchors,
        }
    }
    /// The blank board, one slice per row.
    /// # Example
    /// ```
    /// # use quoridor_utils::base::Coordinate;
    /// # use quoridor_utils::board_manager::BoardGeometry;
    /// let geometry = BoardGeometry::new();
    /// let rows: Vec<_> = geometry.rows().collect();
    /// assert_eq!(rows.len(), 9);
    /// assert_eq!(rows[2][5], Coordinate::new(5, 2));
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[Coordinate]> {
        self.tiles.chunks(BOARD_SIZE as usize)
    }
    /// Right, left, up and down neighbors of `tile` that are not part of the wall ring.
    /// # Example
    /// ```
    /// # use quoridor_utils::base::Coordinate;
    /// # use quoridor_utils::board_manager::BoardGeometry;
    /// let geometry = BoardGeometry::new();
    /// assert_eq!(geometry.orthogonal_neighbors(Coordinate::new(4, 4)).len(), 4);
    /// assert_eq!(geometry.orthogonal_neighbors(Coordinate::new(0, 0)).len(), 2);
    /// ```
    pub fn orthogonal_neighbors(&self, tile: Coordinate) -> Vec<Coordinate> {
        self.neighbors(tile, &ORTHOGONAL_OFFSETS)
    }
    /// The four diagonal neighbors of `tile` that are not part of the wall ring.
    pub fn diagonal_neighbors(&self, tile: Coordinate) -> Vec<Coordinate> {
        self.neighbors(tile, &DIAGONAL_OFFSETS)
    }
    fn neighbors(&self, tile: Coordinate, offsets: &[(i8, i8)]) -> Vec<Coordinate> {
        offsets
            .iter()
            .map(|&(columns, rows)| tile.offset(columns, rows))
            .filter(|neighbor| !self.is_boundary(*neighbor))
            .collect()
    }
    /// Breadth-first traverse over tiles reachable from `start` without crossing a fence.
    /// `action` is called for every reached tile, `start` included. Traverse stops at the
    /// first tile where `action` breaks and returns it.
    pub fn traverse(
        &self,
        fences: &FenceSet,
        start: Coordinate,
        mut action: impl FnMut(Coordinate) -> ControlFlow<Coordinate>,
    ) -> Option<Coordinate> {
        if !self.is_tile(start) {
            return None;
        }
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(tile) = queue.pop_front() {
            if let ControlFlow::Break(found) = action(tile) {
                return Some(found);
            }
            for next in self.orthogonal_neighbors(tile) {
                if self.is_tile(next) && !fences.blocks(tile, next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        None
    }
    /// Finds a tile of `row` reachable from `start`. Pawns are ignored.
    pub fn search_row(&self, fences: &FenceSet, start: Coordinate, row: i8) -> Option<Coordinate> {
        self.traverse(fences, start, |tile| {
            if tile.row == row {
                ControlFlow::Break(tile)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}
impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fences placed so far, kept in placement order per orientation.
/// Fences are never removed.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FenceSet {
    horizontal: Vec<Coordinate>,
    vertical: Vec<Coordinate>,
    placed: HashSet<(Orientation, Coordinate)>,
}
impl FenceSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn contains(&self, orientation: Orientation, anchor: Coordinate) -> bool {
        self.placed.contains(&(orientation, anchor))
    }
    /// Records a fence. Returns `false` if the same fence is already placed.
    pub fn insert(&mut self, orientation: Orientation, anchor: Coordinate) -> bool {
        if !self.placed.insert((orientation, anchor)) {
            return false;
        }
        match orientation {
            Orientation::Horizontal => self.horizontal.push(anchor),
            Orientation::Vertical => self.vertical.push(anchor),
        }
        true
    }
    pub fn get(&self, orientation: Orientation) -> &[Coordinate] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
    pub fn len(&self) -> usize {
        self.placed.len()
    }
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
    /// Whether a single step from `from` to the orthogonally adjacent `to` crosses a fence.
    /// Returns `false` for tiles that aren't orthogonally adjacent.
    /// # Example
    /// ```
    /// # use quoridor_utils::base::{Coordinate, Orientation};
    /// # use quoridor_utils::board_manager::FenceSet;
    /// let mut fences = FenceSet::new();
    /// fences.insert(Orientation::Vertical, Coordinate::new(3, 2));
    /// assert!(fences.blocks(Coordinate::new(2, 2), Coordinate::new(3, 2)));
    /// assert!(fences.blocks(Coordinate::new(3, 2), Coordinate::new(2, 2)));
    /// assert!(!fences.blocks(Coordinate::new(3, 2), Coordinate::new(4, 2)));
    /// ```
    pub fn blocks(&self, from: Coordinate, to: Coordinate) -> bool {
        match from.delta(to) {
            (1, 0) => self.contains(Orientation::Vertical, to),
            (-1, 0) => self.contains(Orientation::Vertical, from),
            (0, -1) => self.contains(Orientation::Horizontal, from),
            (0, 1) => self.contains(Orientation::Horizontal, to),
            _ => false,
        }
    }
}
