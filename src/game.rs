//! The turn engine
//!
//! One [`Game`] owns the board, the active player and the terminal-state
//! bookkeeping for a single game; a new game is a new `Game`.

use anyhow::{anyhow, Result};

use crate::board::{Board, Player};
use crate::win;
use crate::WIDTH;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    InProgress,
    Won(Player),
    Tied,
}

impl GameState {
    /// Terminal states accept no further moves.
    pub fn is_terminal(&self) -> bool {
        match self {
            GameState::InProgress => false,
            GameState::Won(_) | GameState::Tied => true,
        }
    }

    /// The end-of-game message for the presentation layer, `None` while
    /// the game is still going.
    pub fn announcement(&self) -> Option<String> {
        match self {
            GameState::InProgress => None,
            GameState::Won(player) => Some(format!("{} won!", player)),
            GameState::Tied => Some("Tie game!".to_string()),
        }
    }
}

/// A piece successfully dropped this turn, with everything the
/// presentation layer needs to paint it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// The outcome of a drop request. A drop into a full column, or any drop
/// after the game has ended, is ignored rather than treated as an error.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DropResult {
    Placed(Move),
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    state: GameState,
    moves: String,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            state: GameState::InProgress,
            moves: String::new(),
        }
    }

    /// Replay a game from a string of one-indexed column digits.
    ///
    /// Fails on anything that is not a digit between 1 and
    /// [`WIDTH`](crate::WIDTH), and on moves the engine would ignore
    /// (a full column, or a move after the game has ended).
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut game = Self::new();

        for column_char in moves.as_ref().chars() {
            let column = column_char
                .to_digit(10)
                .map(|column| column as usize)
                .filter(|column| (1..=WIDTH).contains(column))
                .ok_or_else(|| anyhow!("could not parse '{}' as a valid move", column_char))?;

            if let DropResult::Ignored = game.drop_piece(column - 1)? {
                return Err(anyhow!("invalid move, column {} cannot be played", column));
            }
        }
        Ok(game)
    }

    /// Resume from a prepared position with `current_player` to move.
    ///
    /// The board is assumed to contain no completed alignment; the game
    /// starts `InProgress` with an empty move record.
    pub fn from_parts(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            state: GameState::InProgress,
            moves: String::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The successfully played moves so far, as one-indexed column digits.
    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// Drop the current player's piece into a column.
    ///
    /// Returns the placed [`Move`] so the caller can render the piece;
    /// the resulting state is read back with [`state`](Game::state). A
    /// column index of [`WIDTH`](crate::WIDTH) or more is a contract
    /// violation and an error; a full column or a finished game gives
    /// [`DropResult::Ignored`] and mutates nothing.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult> {
        if column >= WIDTH {
            return Err(anyhow!(
                "column {} out of range, columns must be between 0 and {}",
                column,
                WIDTH - 1
            ));
        }
        if self.state.is_terminal() {
            return Ok(DropResult::Ignored);
        }
        let row = match self.board.landing_row(column) {
            Some(row) => row,
            None => return Ok(DropResult::Ignored),
        };

        let player = self.current_player;
        self.board.place(row, column, player);
        self.moves.push_str(&(column + 1).to_string());

        // a win is checked before fullness: the move that fills the last
        // cell can still win the game
        if win::connects_four(&self.board, player) {
            self.state = GameState::Won(player);
        } else if self.board.is_full() {
            self.state = GameState::Tied;
        } else {
            self.current_player = player.other();
        }

        Ok(DropResult::Placed(Move {
            row,
            column,
            player,
        }))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
