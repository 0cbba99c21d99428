//! α-β pruning adversary search
//!
//! Computes exactly the minimax decision, but stops examining a position's
//! remaining successors once the window `[alpha, beta]` shows they cannot
//! influence the choice at the root. `alpha` is the best value the
//! maximizer can already guarantee along the current path, `beta` the best
//! value for the minimizer.
//!
//! The recursion threads the ply through its calls instead of keeping a
//! depth counter in the search object, so one [`AlphaBetaPruning`] can be
//! shared freely. Recursion depth is bounded by `max_depth` and by the
//! length of the game; very deep look-aheads are limited by the call stack.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Game, UtilityFunction};
use crate::{Error, Result, config::AlphaBetaConfig, node::Node};

/// Decides whether a root option with value `v` replaces the incumbent
/// with value `w`.
pub type Preference = fn(f64, f64) -> bool;

/// Default preference: strictly better values only, so the first of several
/// equally good options is kept.
pub fn strictly_greater(v: f64, w: f64) -> bool {
    v > w
}

/// Work performed by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdversaryStats {
    /// Positions entered, including the root
    pub nodes_visited: usize,
    /// Calls to the utility function
    pub evaluations: usize,
    /// Times the remaining successors of a position were skipped
    pub cutoffs: usize,
}

/// Minimax search with α-β pruning and a fixed look-ahead.
///
/// The root is ply 0 and belongs to the maximizer; players alternate by ply
/// parity. A position at ply `k >= 1` is scored by the utility function
/// when `k >= max_depth` or when it has no successors.
///
/// # Examples
///
/// ```
/// use statespace::{AlphaBetaPruning, tictactoe::{BoardState, TicTacToe}};
///
/// let search = AlphaBetaPruning::new(9, TicTacToe::outcome_for(statespace::tictactoe::Player::X)).unwrap();
/// let board = BoardState::from_string("XX.OO....").unwrap();
/// let best = search.solve(&TicTacToe, &board).unwrap();
/// assert_eq!(best.action(), Some(&2));
/// assert_eq!(best.utility(), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct AlphaBetaPruning<U> {
    max_depth: usize,
    utility: U,
    preference: Preference,
}

impl<U> AlphaBetaPruning<U> {
    /// Create a search looking at most `max_depth` half-turns ahead.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMaxDepth` if `max_depth` is negative.
    pub fn new(max_depth: i32, utility: U) -> Result<Self> {
        Self::from_config(&AlphaBetaConfig::new(max_depth), utility)
    }

    pub fn from_config(config: &AlphaBetaConfig, utility: U) -> Result<Self> {
        config.validate()?;
        let max_depth = usize::try_from(config.max_depth).map_err(|_| Error::InvalidMaxDepth {
            depth: config.max_depth,
        })?;
        Ok(Self {
            max_depth,
            utility,
            preference: strictly_greater,
        })
    }

    /// Replace the root tie-break.
    #[must_use]
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn utility(&self) -> &U {
        &self.utility
    }

    /// Whether the maximizer moves at `ply`.
    pub fn is_our_turn(&self, ply: usize) -> bool {
        ply.is_multiple_of(2)
    }

    /// Whether to score a position at `ply` instead of expanding it.
    pub fn cut_off(&self, ply: usize) -> bool {
        ply >= self.max_depth
    }
}

impl<U> AlphaBetaPruning<U> {
    /// Choose the best move in `state`.
    ///
    /// The returned node carries the minimax value of `state` as utility.
    ///
    /// # Errors
    ///
    /// Returns `NoSuccessors` if `state` has no moves.
    pub fn solve<G>(&self, game: &G, state: &G::State) -> Result<Node<G::State, G::Action>>
    where
        G: Game,
        U: UtilityFunction<G::State>,
    {
        self.solve_with_stats(game, state).map(|(best, _)| best)
    }

    /// Like [`solve`](Self::solve), also reporting the work performed.
    pub fn solve_with_stats<G>(
        &self,
        game: &G,
        state: &G::State,
    ) -> Result<(Node<G::State, G::Action>, AdversaryStats)>
    where
        G: Game,
        U: UtilityFunction<G::State>,
    {
        let mut stats = AdversaryStats::default();
        let best = self.best_option(game, state, &mut stats)?;
        Ok((best, stats))
    }

    /// The maximizer step at the root, remembering which option won.
    fn best_option<G>(
        &self,
        game: &G,
        state: &G::State,
        stats: &mut AdversaryStats,
    ) -> Result<Node<G::State, G::Action>>
    where
        G: Game,
        U: UtilityFunction<G::State>,
    {
        stats.nodes_visited += 1;
        let beta = f64::INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let mut best: Option<Node<G::State, G::Action>> = None;

        for option in game.successors(state) {
            let v = self.minimax(game, option.state(), 1, alpha, beta, stats);
            if best.is_none() || (self.preference)(v, alpha) {
                trace!(value = v, incumbent = alpha, "root option preferred");
                alpha = v;
                best = Some(option);
            } else {
                trace!(value = v, incumbent = alpha, "root option not preferred");
            }
            if alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }

        best.map(|option| option.with_utility(alpha))
            .ok_or_else(|| Error::NoSuccessors {
                context: "adversary search needs at least one move at the root".to_string(),
            })
    }

    fn minimax<G>(
        &self,
        game: &G,
        state: &G::State,
        ply: usize,
        alpha: f64,
        beta: f64,
        stats: &mut AdversaryStats,
    ) -> f64
    where
        G: Game,
        U: UtilityFunction<G::State>,
    {
        if self.is_our_turn(ply) {
            self.max_value(game, state, ply, alpha, beta, stats)
        } else {
            self.min_value(game, state, ply, alpha, beta, stats)
        }
    }

    fn max_value<G>(
        &self,
        game: &G,
        state: &G::State,
        ply: usize,
        mut alpha: f64,
        beta: f64,
        stats: &mut AdversaryStats,
    ) -> f64
    where
        G: Game,
        U: UtilityFunction<G::State>,
    {
        stats.nodes_visited += 1;
        let successors = match self.expandable(game, state, ply) {
            Some(successors) => successors,
            None => return self.evaluate(state, stats),
        };
        for next in successors {
            alpha = alpha.max(self.minimax(game, next.state(), ply + 1, alpha, beta, stats));
            if alpha >= beta {
                stats.cutoffs += 1;
                return beta;
            }
        }
        alpha
    }

    fn min_value<G>(
        &self,
        game: &G,
        state: &G::State,
        ply: usize,
        alpha: f64,
        mut beta: f64,
        stats: &mut AdversaryStats,
    ) -> f64
    where
        G: Game,
        U: UtilityFunction<G::State>,
    {
        stats.nodes_visited += 1;
        let successors = match self.expandable(game, state, ply) {
            Some(successors) => successors,
            None => return self.evaluate(state, stats),
        };
        for next in successors {
            beta = beta.min(self.minimax(game, next.state(), ply + 1, alpha, beta, stats));
            if beta <= alpha {
                stats.cutoffs += 1;
                return alpha;
            }
        }
        beta
    }

    /// Successors of a position that is neither cut off nor terminal.
    fn expandable<G: Game>(
        &self,
        game: &G,
        state: &G::State,
        ply: usize,
    ) -> Option<Vec<Node<G::State, G::Action>>> {
        if self.cut_off(ply) {
            return None;
        }
        let successors = game.successors(state);
        (!successors.is_empty()).then_some(successors)
    }

    fn evaluate<S>(&self, state: &S, stats: &mut AdversaryStats) -> f64
    where
        U: UtilityFunction<S>,
    {
        stats.evaluations += 1;
        self.utility.evaluate(state)
    }
}
