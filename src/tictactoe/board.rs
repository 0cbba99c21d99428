//! Board positions and move rules

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines;
use crate::{Error, Result};

/// A square of the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    fn parse(s: &str, label: &str) -> Result<Player> {
        match s {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(Error::InvalidPlayerString {
                player: s.to_string(),
                label: label.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Cells in row-major order plus the player to move.
///
/// Positions are numbered 0-8:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Empty board, X to move.
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Parse a board such as `"XO.X....."` or `"XO.X....._O"`.
    ///
    /// Whitespace is ignored, so rows may be separated by spaces or
    /// newlines. Without a `_X`/`_O` suffix the player to move follows from
    /// the piece counts with X opening.
    ///
    /// # Errors
    ///
    /// Returns an error for a wrong number of cells, an unknown cell
    /// character or player, or piece counts that no legal game produces.
    pub fn from_string(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board, suffix) = match cleaned.split_once('_') {
            Some((board, player)) => (board, Some(Player::parse(player, s)?)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board.chars().collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }
        let mut cells = [Cell::Empty; 9];
        for (position, (cell, &character)) in cells.iter_mut().zip(&chars).enumerate() {
            *cell = Cell::from_char(character).ok_or_else(|| Error::InvalidCellCharacter {
                character,
                position,
                context: s.to_string(),
            })?;
        }

        let (x_count, o_count) = count_pieces(&cells);
        let to_move = match suffix {
            Some(player) => {
                let consistent = match player {
                    Player::X => x_count == o_count || o_count == x_count + 1,
                    Player::O => x_count == o_count || x_count == o_count + 1,
                };
                if !consistent {
                    return Err(Error::InvalidConfiguration {
                        message: format!(
                            "piece counts (X={x_count}, O={o_count}) are inconsistent with {player} to move in '{s}'"
                        ),
                    });
                }
                player
            }
            None if x_count == o_count => Player::X,
            None if x_count == o_count + 1 => Player::O,
            None => return Err(Error::InvalidPieceCounts { x_count, o_count }),
        };

        Ok(BoardState { cells, to_move })
    }

    /// Place the mover's piece on `pos` and pass the turn.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if `pos` is off the board or occupied.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState> {
        if self.cells.get(pos) != Some(&Cell::Empty) {
            return Err(Error::InvalidMove { position: pos });
        }
        let mut next = *self;
        next.cells[pos] = self.to_move.to_cell();
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    /// Empty cells while the game is still running.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.has_won(player))
    }

    /// `"XO......._X"`: cells followed by the player to move.
    pub fn encode(&self) -> String {
        let cells: String = self.cells.iter().map(|&c| c.to_char()).collect();
        format!("{cells}_{}", self.to_move)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn count_pieces(cells: &[Cell; 9]) -> (usize, usize) {
    cells.iter().fold((0, 0), |(x, o), cell| match cell {
        Cell::X => (x + 1, o),
        Cell::O => (x, o + 1),
        Cell::Empty => (x, o),
    })
}
