//! Local optimizers - traversals that walk a single current node
//!
//! Instead of a frontier of open nodes, a local optimizer keeps one current
//! node. Expanding it proposes the children in random order and the walk
//! moves to the first child its [`Acceptance`] rule takes. If no child is
//! accepted the traversal ends.

pub mod hill_climbing;
pub mod simulated_annealing;
pub mod threshold;

pub use hill_climbing::{HillClimbing, ImprovementAcceptance};
pub use simulated_annealing::{AnnealingAcceptance, SimulatedAnnealing};
pub use threshold::{CoolingSchedule, LinearCooling, ThresholdAcceptance, ThresholdAccepting};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{node::Node, traversal::TraversalStrategy};

/// Decision rule of a local optimizer.
pub trait Acceptance<S, A> {
    /// Whether the walk should move from `current` to `proposed`.
    fn accept(&mut self, current: &Node<S, A>, proposed: &Node<S, A>) -> bool;

    /// Whether the rule has stopped accepting anything for good.
    fn is_frozen(&self) -> bool {
        false
    }
}

/// A fixed-seed RNG, or one seeded from the thread RNG.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Traversal strategy for local search over an [`Acceptance`] rule.
#[derive(Debug, Clone)]
pub struct LocalOptimizer<S, A, R> {
    current: Option<Node<S, A>>,
    pending: Option<Node<S, A>>,
    acceptance: R,
    rng: StdRng,
}

impl<S, A, R> LocalOptimizer<S, A, R> {
    pub fn new(acceptance: R, rng: StdRng) -> Self {
        Self {
            current: None,
            pending: None,
            acceptance,
            rng,
        }
    }

    pub fn acceptance(&self) -> &R {
        &self.acceptance
    }

    /// The node the walk currently stands on.
    pub fn current(&self) -> Option<&Node<S, A>> {
        self.current.as_ref()
    }
}

impl<S, A, R> TraversalStrategy<S, A> for LocalOptimizer<S, A, R>
where
    S: Clone,
    A: Clone,
    R: Acceptance<S, A>,
{
    fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    fn select(&mut self) -> Option<Node<S, A>> {
        self.pending.take()
    }

    fn add_frontier(&mut self, mut children: Vec<Node<S, A>>) -> bool {
        let Some(current) = self.current.as_ref() else {
            // the root is where the walk starts
            let Some(root) = children.into_iter().next() else {
                return false;
            };
            self.current = Some(root.clone());
            self.pending = Some(root);
            return true;
        };

        children.shuffle(&mut self.rng);
        let accepted = children
            .into_iter()
            .find(|proposed| self.acceptance.accept(current, proposed));
        match accepted {
            Some(next) => {
                self.current = Some(next.clone());
                self.pending = Some(next);
                true
            }
            None => false,
        }
    }

    fn is_halted(&self) -> bool {
        self.acceptance.is_frozen()
    }
}
