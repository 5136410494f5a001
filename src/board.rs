use std::fmt;

use crate::{HEIGHT, WIDTH};

/// One of the two players. Player one moves first.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// The occupancy grid.
///
/// Rows are addressed top to bottom (row 0 is the top); dropped pieces
/// settle toward the highest-indexed empty row of their column. Once a
/// cell is occupied it never reverts to empty.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Option<Player>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; WIDTH]; HEIGHT],
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        self.cells[row][column]
    }

    /// The row a dropped piece would come to rest in, scanning the column
    /// from the bottom up. `None` when the column is full.
    ///
    /// `column` must be less than [`WIDTH`](crate::WIDTH); the caller
    /// guarantees this.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_none())
    }

    /// Put a tile in an empty cell.
    pub fn place(&mut self, row: usize, column: usize, player: Player) {
        debug_assert!(self.cells[row][column].is_none());
        self.cells[row][column] = Some(player);
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
