//! The 8-puzzle.
//!
//! A 3x3 board holding the tiles `1..=8` and a blank (`0`). Sliding a tile
//! next to the blank into it swaps them. The goal is always
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 0
//! ```

use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::problem::Heuristic;
use crate::problem::Problem;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Neighbours;
use crate::space::Space;
use crate::space::State;

pub type Tile = u8;
pub const BLANK: Tile = 0;

/// Side of the board.
pub const SIDE: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Moves made when scrambling a board from the goal.
const RANDOM_WALK_STEPS: usize = 64;

/// The only goal configuration.
pub const GOAL: EightPuzzleState = EightPuzzleState {
    cells: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
    blank: 8,
};

/// Where the blank moves to.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    #[display("→")]
    Right = 0, // col++
    #[display("←")]
    Left = 1, // col--
    #[display("↓")]
    Down = 2, // row++
    #[display("↑")]
    Up = 3, // row--
}

impl Direction {
    /// The order in which children are generated.
    pub const EXPANSION_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// `(row, col)` delta of the blank.
    #[rustfmt::skip]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => ( 0,  1),
            Direction::Left  => ( 0, -1),
            Direction::Down  => ( 1,  0),
            Direction::Up    => (-1,  0),
        }
    }

    /// The cell next to `(row, col)` in this direction, if it's on the board.
    #[inline(always)]
    pub fn step(self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        let row = row.checked_add_signed(dr).filter(|&r| r < SIDE)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < SIDE)?;
        Some((row, col))
    }
}

/// A board configuration.
///
/// Equality and hashing only depend on the tiles, `blank` is derived from
/// them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EightPuzzleState {
    /// Row-major tiles.
    cells: [Tile; CELLS],
    /// Index of the blank in `cells`.
    blank: u8,
}
impl State for EightPuzzleState {}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
    #[error("Invalid tile {0}, tiles go from 0 to {max}", max = CELLS - 1)]
    InvalidTile(Tile),
    #[error("Expected {expected} tiles, found {0}", expected = CELLS)]
    WrongTileCount(usize),
    #[error("Tile {0} appears more than once")]
    DuplicateTile(Tile),
}

impl EightPuzzleState {
    /// Builds a board from its rows.
    ///
    /// # Panics
    ///
    /// If the rows are not a permutation of `0..=8`. Use
    /// [`EightPuzzleState::try_from_cells`] for untrusted input.
    pub fn new(rows: [[Tile; SIDE]; SIDE]) -> Self {
        let cells: [Tile; CELLS] = std::array::from_fn(|i| rows[i / SIDE][i % SIDE]);
        match Self::try_from_cells(cells) {
            Ok(s) => s,
            Err(e) => panic!("Invalid board {rows:?}: {e}"),
        }
    }

    /// Builds a board from its row-major cells.
    pub fn try_from_cells(cells: [Tile; CELLS]) -> Result<Self, BoardParseError> {
        let mut seen = [false; CELLS];
        for &t in &cells {
            let slot = seen
                .get_mut(t as usize)
                .ok_or(BoardParseError::InvalidTile(t))?;
            if *slot {
                return Err(BoardParseError::DuplicateTile(t));
            }
            *slot = true;
        }
        // A permutation of 0..CELLS always has a blank.
        let blank = cells
            .iter()
            .position(|&t| t == BLANK)
            .ok_or(BoardParseError::WrongTileCount(CELLS - 1))?;

        Ok(Self {
            cells,
            blank: blank as u8,
        })
    }

    #[inline(always)]
    pub fn cells(&self) -> &[Tile; CELLS] {
        &self.cells
    }

    pub fn rows(&self) -> [[Tile; SIDE]; SIDE] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.tile_at(r, c)))
    }

    #[inline(always)]
    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        self.cells[row * SIDE + col]
    }

    /// `(row, col)` of the blank.
    #[inline(always)]
    pub fn blank_position(&self) -> (usize, usize) {
        let i = self.blank as usize;
        (i / SIDE, i % SIDE)
    }

    /// `(row, col)` of a tile.
    pub fn position_of(&self, tile: Tile) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|i| (i / SIDE, i % SIDE))
    }

    #[inline(always)]
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Pairs of non-blank tiles appearing in reverse order (row-major).
    pub fn inversions(&self) -> usize {
        let tiles: SmallVec<[Tile; CELLS]> =
            self.cells.iter().copied().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| a > b).count())
            .sum()
    }

    /// Whether the goal can be reached from this board.
    ///
    /// On odd-width boards a slide never changes the parity of the inversions,
    /// and the goal has none.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// The board after moving the blank, along with the tile that moved.
    pub fn slide(&self, direction: Direction) -> Option<(Self, EightPuzzleAction)> {
        let (row, col) = direction.step(self.blank_position())?;
        let from = row * SIDE + col;

        let mut child = *self;
        child.cells.swap(self.blank as usize, from);
        child.blank = from as u8;

        Some((child, EightPuzzleAction::new(self.cells[from])))
    }

    /// All boards one move away, in `Direction::EXPANSION_ORDER`.
    ///
    /// Corners have 2 children, edges 3, and the center 4.
    pub fn children(&self) -> Neighbours<Self, EightPuzzleAction> {
        Direction::EXPANSION_ORDER
            .into_iter()
            .filter_map(|d| self.slide(d))
            .collect()
    }

    /// Board as 9 row-major digits, as accepted by `TryFrom<&str>`.
    pub fn to_digits(&self) -> String {
        self.cells.iter().map(|t| char::from(b'0' + t)).collect()
    }
}

impl Default for EightPuzzleState {
    fn default() -> Self {
        GOAL
    }
}

impl TryFrom<&str> for EightPuzzleState {
    type Error = BoardParseError;

    /// Reads 9 digits in row-major order. Whitespace is ignored.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut cells = [BLANK; CELLS];
        let mut count = 0usize;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let t = ch
                .to_digit(10)
                .ok_or(BoardParseError::InvalidCharacter(ch))? as Tile;
            if let Some(cell) = cells.get_mut(count) {
                *cell = t;
            }
            count += 1;
        }
        if count != CELLS {
            return Err(BoardParseError::WrongTileCount(count));
        }
        Self::try_from_cells(cells)
    }
}

impl std::str::FromStr for EightPuzzleState {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for EightPuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r != 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Sliding a tile into the blank. Identified by the tile's number.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("{tile}")]
pub struct EightPuzzleAction {
    tile: Tile,
}
impl Action for EightPuzzleAction {}

impl EightPuzzleAction {
    #[inline(always)]
    pub fn new(tile: Tile) -> Self {
        Self { tile }
    }
    #[inline(always)]
    pub fn tile(&self) -> Tile {
        self.tile
    }
}

pub type EightPuzzleCost = u32;
impl Cost for EightPuzzleCost {}

#[derive(Copy, Clone, Debug, Default)]
pub struct EightPuzzleSpace;

impl Space<EightPuzzleState, EightPuzzleAction, EightPuzzleCost> for EightPuzzleSpace {
    fn apply(&self, s: &EightPuzzleState, a: &EightPuzzleAction) -> Option<EightPuzzleState> {
        if a.tile() == BLANK {
            return None;
        }
        let tile = s.position_of(a.tile())?;
        let direction = Direction::EXPANSION_ORDER
            .into_iter()
            .find(|d| d.step(s.blank_position()) == Some(tile))?;
        s.slide(direction).map(|(child, _)| child)
    }

    #[inline(always)]
    fn neighbours(
        &self,
        s: &EightPuzzleState,
    ) -> Neighbours<EightPuzzleState, EightPuzzleAction> {
        s.children()
    }

    fn valid(&self, s: &EightPuzzleState) -> bool {
        EightPuzzleState::try_from_cells(s.cells).is_ok_and(|v| v.blank == s.blank)
    }

    /// Every permutation of the tiles, half of which can reach the goal.
    fn size(&self) -> Option<usize> {
        Some((1..=CELLS).product())
    }

    fn supports_random_state() -> bool {
        true
    }
    /// A random walk away from the goal, so it's always solvable.
    fn random_state<R: rand::Rng>(&self, r: &mut R) -> Option<EightPuzzleState> {
        let mut s = GOAL;
        for _ in 0..RANDOM_WALK_STEPS {
            let children = s.children();
            s = children[r.random_range(0..children.len())].0;
        }
        Some(s)
    }
}

#[derive(Clone, Debug)]
pub struct EightPuzzleProblem {
    space: EightPuzzleSpace,
    start: EightPuzzleState,
}

impl EightPuzzleProblem {
    pub fn new(start: EightPuzzleState) -> Self {
        Self {
            space: EightPuzzleSpace,
            start,
        }
    }
}

impl Problem<EightPuzzleSpace, EightPuzzleState, EightPuzzleAction, EightPuzzleCost>
    for EightPuzzleProblem
{
    #[inline(always)]
    fn space(&self) -> &EightPuzzleSpace {
        &self.space
    }
    #[inline(always)]
    fn start(&self) -> EightPuzzleState {
        self.start
    }
    #[inline(always)]
    fn is_goal(&self, s: &EightPuzzleState) -> bool {
        s.is_goal()
    }
}

impl TryFrom<&str> for EightPuzzleProblem {
    type Error = BoardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::new(EightPuzzleState::try_from(s)?))
    }
}

impl std::fmt::Display for EightPuzzleProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "EightPuzzleProblem(solvable: {}):",
            self.start.is_solvable()
        )?;
        write!(f, "{}", self.start)
    }
}

/// Number of cells (blank included) that differ from the goal.
pub fn hamming(s: &EightPuzzleState) -> EightPuzzleCost {
    s.cells
        .iter()
        .zip(GOAL.cells.iter())
        .filter(|(a, b)| a != b)
        .count() as EightPuzzleCost
}

/// Sum of the distances of every tile (blank excluded) to its goal cell.
pub fn manhattan(s: &EightPuzzleState) -> EightPuzzleCost {
    s.cells
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t != BLANK)
        .map(|(i, &t)| {
            let (row, col) = (i / SIDE, i % SIDE);
            let goal = (t - 1) as usize;
            let (goal_row, goal_col) = (goal / SIDE, goal % SIDE);
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as EightPuzzleCost
        })
        .sum()
}

#[derive(Debug)]
pub struct EightPuzzleHeuristicHamming;

impl Heuristic<EightPuzzleState, EightPuzzleCost> for EightPuzzleHeuristicHamming {
    #[inline(always)]
    fn h(s: &EightPuzzleState) -> EightPuzzleCost {
        hamming(s)
    }
}

#[derive(Debug)]
pub struct EightPuzzleHeuristicManhattan;

impl Heuristic<EightPuzzleState, EightPuzzleCost> for EightPuzzleHeuristicManhattan {
    #[inline(always)]
    fn h(s: &EightPuzzleState) -> EightPuzzleCost {
        manhattan(s)
    }
}
