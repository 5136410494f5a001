//! The rules engine for the two-player board game 'Connect 4'
//!
//! Players alternately drop pieces into one of seven columns; the engine
//! tracks occupancy, detects four-in-a-row alignments (horizontal,
//! vertical and both diagonals) or a full-board tie, and reports the
//! outcome. Rendering and input handling live in the binary; this library
//! is pure game logic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_core::board::Player;
//! use connect4_core::game::{Game, GameState};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::from_moves("112233")?;
//! game.drop_piece(3)?;
//!
//! assert!(game.state() == GameState::Won(Player::One));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod game;

pub mod win;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that wins the game
pub const CONNECT: usize = 4;

// a winning line must fit on the board in every direction
const_assert!(CONNECT <= WIDTH);
const_assert!(CONNECT <= HEIGHT);
