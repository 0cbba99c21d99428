//! Tic-Tac-Toe as an adversary game

use serde::{Deserialize, Serialize};

use super::{
    board::{BoardState, Player},
    lines,
};
use crate::{Error, Result, game::Game, node::Node};

/// The rules of Tic-Tac-Toe; actions are board positions 0-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl TicTacToe {
    /// Final outcome from `player`'s point of view: 1 for a win, -1 for a
    /// loss and 0 otherwise.
    pub fn outcome_for(player: Player) -> impl Fn(&BoardState) -> f64 + Clone {
        move |board: &BoardState| match board.winner() {
            Some(winner) if winner == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    /// Like [`outcome_for`](Self::outcome_for) for finished games, and the
    /// difference in open lines scaled into `(-1, 1)` for positions cut off
    /// before the end.
    pub fn open_lines_for(player: Player) -> impl Fn(&BoardState) -> f64 + Clone {
        move |board: &BoardState| {
            if board.is_terminal() {
                return Self::outcome_for(player)(board);
            }
            let own = lines::open_line_score(&board.cells, player) as f64;
            let theirs = lines::open_line_score(&board.cells, player.opponent()) as f64;
            (own - theirs) / 25.0
        }
    }
}

impl Game for TicTacToe {
    type State = BoardState;
    type Action = usize;

    fn successors(&self, state: &BoardState) -> Vec<Node<BoardState, usize>> {
        let parent = Node::root(*state);
        state
            .legal_moves()
            .into_iter()
            .filter_map(|pos| {
                state
                    .make_move(pos)
                    .ok()
                    .map(|next| parent.child(next, pos, 1.0))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress with its move history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    current: BoardState,
}

impl GameRecord {
    pub fn new(initial: BoardState) -> Self {
        let mut record = Self {
            initial,
            moves: Vec::new(),
            outcome: None,
            current: initial,
        };
        record.update_outcome();
        record
    }

    pub fn current_state(&self) -> &BoardState {
        &self.current
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// # Errors
    ///
    /// Returns `InvalidMove` once the game is over or for an illegal
    /// position.
    pub fn play(&mut self, position: usize) -> Result<()> {
        if self.is_over() {
            return Err(Error::InvalidMove { position });
        }
        let player = self.current.to_move;
        self.current = self.current.make_move(position)?;
        self.moves.push(Move { position, player });
        self.update_outcome();
        Ok(())
    }

    fn update_outcome(&mut self) {
        if self.current.is_terminal() {
            self.outcome = Some(match self.current.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }
    }
}
