//! Four-in-a-row detection
//!
//! Scans the whole board rather than only the neighbourhood of the last
//! move; at 6x7 the full scan is cheap and runs once per turn.

use crate::board::{Board, Player};
use crate::{CONNECT, HEIGHT, WIDTH};

// row and column steps for the four line orientations: horizontal,
// vertical, down-right diagonal, down-left diagonal
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether `player` has completed four in a row anywhere on the
/// board.
///
/// Every cell is treated as the anchor of one candidate line per
/// orientation; a line wins if all four of its cells are on the board and
/// owned by `player`. Lines running off an edge are excluded, there is no
/// wraparound.
pub fn connects_four(board: &Board, player: Player) -> bool {
    for row in 0..HEIGHT as i32 {
        for column in 0..WIDTH as i32 {
            for &(row_step, column_step) in DIRECTIONS.iter() {
                let complete = (0..CONNECT as i32).all(|i| {
                    let y = row + i * row_step;
                    let x = column + i * column_step;
                    y >= 0
                        && y < HEIGHT as i32
                        && x >= 0
                        && x < WIDTH as i32
                        && board.cell(y as usize, x as usize) == Some(player)
                });
                if complete {
                    return true;
                }
            }
        }
    }
    false
}
