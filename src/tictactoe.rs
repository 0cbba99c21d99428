//! Tic-Tac-Toe, used as a concrete [`Game`](crate::game::Game)

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player};
pub use game::{GameOutcome, GameRecord, Move, TicTacToe};
pub use lines::WINNING_LINES;
