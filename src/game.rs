//! Two-player adversary search
//!
//! A [`Game`] only has to enumerate the successors of a position. Whose turn
//! it is follows from the ply parity of the search, never from the state,
//! and positions at the look-ahead horizon are scored by a
//! [`UtilityFunction`] from the perspective of the player moving at the root.

pub mod alpha_beta;

pub use alpha_beta::{AdversaryStats, AlphaBetaPruning, Preference, strictly_greater};

use crate::node::Node;

/// A two-player, zero-sum, perfect-information game.
pub trait Game {
    type State: Clone;
    type Action: Clone;

    /// Positions reachable in one move from `state`, empty when the game
    /// is over.
    fn successors(&self, state: &Self::State) -> Vec<Node<Self::State, Self::Action>>;
}

impl<G: Game + ?Sized> Game for &G {
    type State = G::State;
    type Action = G::Action;

    fn successors(&self, state: &Self::State) -> Vec<Node<Self::State, Self::Action>> {
        (**self).successors(state)
    }
}

/// Utility of a state for the maximizing player.
pub trait UtilityFunction<S> {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> UtilityFunction<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}
