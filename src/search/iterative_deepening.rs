//! Iterative deepening (ID)
//!
//! Runs bounded depth-first search with depth bounds 0, 1, 2, ... until a
//! run finds a solution or a run prunes nothing. A run without pruning has
//! seen every reachable node, so a larger bound cannot reveal more.
//!
//! # Preconditions
//!
//! The "nothing pruned" test proves exhaustion only for finite, acyclic
//! state spaces. On a space with cycles every run keeps pruning the
//! revisited paths and the loop never ends unless a
//! [`DeepeningConfig::max_bound`] is configured.

use tracing::debug;

use super::{DepthFirstBoundingSearch, GeneralSearch};
use crate::{
    Result,
    config::DeepeningConfig,
    problem::{Depth, NodeOf, SearchProblem},
    traversal::{DepthFirst, Traversal},
};

/// Iterative deepening search. Complete and optimal for uniform step
/// costs, in O(b^d) time and O(b*d) space.
#[derive(Debug, Clone)]
pub struct IterativeDeepening {
    bounded: DepthFirstBoundingSearch<Depth>,
    config: DeepeningConfig,
    last_bound: Option<usize>,
}

impl IterativeDeepening {
    pub fn new() -> Self {
        Self::from_config(DeepeningConfig::default())
    }

    pub fn from_config(config: DeepeningConfig) -> Self {
        Self {
            // better solutions would already have appeared with earlier bounds
            bounded: DepthFirstBoundingSearch::with_depth_bound(0).with_continue_when_found(false),
            config,
            last_bound: None,
        }
    }

    pub fn with_max_bound(mut self, max_bound: usize) -> Self {
        self.config.max_bound = Some(max_bound);
        self
    }

    /// Depth bound of the last sweep of the last run.
    pub fn last_bound(&self) -> Option<usize> {
        self.last_bound
    }

    /// Whether the last sweep pruned, i.e. deeper nodes remain unexplored.
    pub fn have_pruned(&self) -> bool {
        self.bounded.have_pruned()
    }

    /// Expansions performed by the last sweep.
    pub fn expansions(&self) -> usize {
        self.bounded.expansions()
    }
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> GeneralSearch<P> for IterativeDeepening {
    type Strategy = DepthFirst<P::State, P::Action>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        Traversal::new(problem, DepthFirst::new())
    }

    fn is_optimal(&self) -> bool {
        true
    }

    fn solve(&mut self, problem: &P) -> Result<Option<NodeOf<P>>> {
        self.last_bound = None;
        let mut bound = 0usize;
        loop {
            if self.config.max_bound.is_some_and(|max| bound > max) {
                debug!(bound, "maximum depth bound reached");
                return Ok(None);
            }

            self.bounded.set_bound(bound as f64)?;
            let mut traversal = self.create_traversal(problem);
            let solution = self.bounded.search_bounded(&mut traversal)?;
            self.last_bound = Some(bound);
            debug!(
                bound,
                pruned = self.bounded.have_pruned(),
                expansions = self.bounded.expansions(),
                "iterative deepening sweep"
            );

            if solution.is_some() {
                return Ok(solution);
            }
            if !self.bounded.have_pruned() {
                return Ok(None);
            }
            bound += 1;
        }
    }
}
