//! Search drivers built on traversal iterators
//!
//! Every driver follows the same scheme: create a traversal over the
//! problem's state space, pull nodes from it and return the first node the
//! problem accepts as a solution. Algorithms differ in the traversal they
//! create and, for bounding searches, in which nodes they prune.

pub mod bounding;
pub mod branch_and_bound;
pub mod iterative_deepening;
pub mod uninformed;

pub use bounding::DepthFirstBoundingSearch;
pub use branch_and_bound::BranchAndBound;
pub use iterative_deepening::IterativeDeepening;
pub use uninformed::{BreadthFirstSearch, DepthFirstSearch};

use tracing::debug;

use crate::{
    Result,
    problem::{NodeOf, SearchProblem},
    traversal::{Traversal, TraversalStrategy},
};

/// A problem-independent search algorithm.
pub trait GeneralSearch<P: SearchProblem> {
    type Strategy: TraversalStrategy<P::State, P::Action>;

    /// Define the traversal order for a run over `problem`.
    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy>;

    /// Whether solutions found are guaranteed to be optimal.
    fn is_optimal(&self) -> bool;

    /// Solve `problem`, returning `Ok(None)` when the explored space holds
    /// no solution.
    fn solve(&mut self, problem: &P) -> Result<Option<NodeOf<P>>> {
        let mut traversal = self.create_traversal(problem);
        let solution = search(&mut traversal)?;
        debug_assert!(
            solution.as_ref().is_none_or(|node| problem.is_solution(node)),
            "returned node must satisfy the goal test"
        );
        Ok(solution)
    }
}

/// Pull nodes from `nodes` until one is a solution or the traversal ends.
pub fn search<P, F>(nodes: &mut Traversal<'_, P, F>) -> Result<Option<NodeOf<P>>>
where
    P: SearchProblem,
    F: TraversalStrategy<P::State, P::Action>,
{
    let problem = nodes.problem();
    while nodes.has_next() {
        let node = nodes.advance()?;
        if problem.is_solution(&node) {
            debug!(
                depth = node.depth(),
                cost = node.cost(),
                expansions = nodes.expansions(),
                "solution found"
            );
            return Ok(Some(node));
        }
    }
    debug!(expansions = nodes.expansions(), "search space exhausted");
    Ok(None)
}
