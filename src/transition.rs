//! Stochastic transition models and sampled paths through them

pub mod path;

pub use path::TransitionPath;

/// A transition model τ: for an action and a source state, a probability
/// distribution over destination states.
///
/// The probabilities returned for any `(action, state)` must be
/// non-negative and sum to one. Samplers check this and refuse to repair a
/// broken distribution.
pub trait TransitionModel {
    type State: Clone;
    type Action;

    /// Destination states of `action` in `state` with their probabilities.
    fn successors_of(&self, action: &Self::Action, state: &Self::State)
    -> Vec<(Self::State, f64)>;
}

impl<M: TransitionModel + ?Sized> TransitionModel for &M {
    type State = M::State;
    type Action = M::Action;

    fn successors_of(&self, action: &Self::Action, state: &Self::State) -> Vec<(Self::State, f64)> {
        (**self).successors_of(action, state)
    }
}
