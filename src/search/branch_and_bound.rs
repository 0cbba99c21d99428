//! Depth-first branch and bound

use super::{DepthFirstBoundingSearch, GeneralSearch};
use crate::{
    Result,
    problem::{CostPlusHeuristic, EvaluationFunction, NodeOf, SearchProblem},
    traversal::{DepthFirst, Traversal},
};

/// Branch and bound: a bounding search with f(n) = g(n) + h(n) that keeps
/// tightening its bound to the best solution found so far.
///
/// Optimal as long as the heuristic never overestimates the remaining cost
/// and an optimal solution lies within `max_bound`.
#[derive(Debug, Clone)]
pub struct BranchAndBound<H> {
    bounded: DepthFirstBoundingSearch<CostPlusHeuristic<H>>,
    max_bound: f64,
}

impl<H> BranchAndBound<H> {
    /// # Errors
    ///
    /// Returns `InvalidBound` if `max_bound` is NaN.
    pub fn new(heuristic: H, max_bound: f64) -> Result<Self> {
        let bounded = DepthFirstBoundingSearch::new(CostPlusHeuristic::new(heuristic), max_bound)?
            .with_continue_when_found(true);
        Ok(Self { bounded, max_bound })
    }

    pub fn max_bound(&self) -> f64 {
        self.max_bound
    }

    /// The bound reached by the last run, which is the cost of the best
    /// solution if one was found.
    pub fn bound(&self) -> f64 {
        self.bounded.bound()
    }
}

impl<P, H> GeneralSearch<P> for BranchAndBound<H>
where
    P: SearchProblem,
    H: EvaluationFunction<P::State, P::Action>,
{
    type Strategy = DepthFirst<P::State, P::Action>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        Traversal::new(problem, DepthFirst::new())
    }

    fn is_optimal(&self) -> bool {
        true
    }

    fn solve(&mut self, problem: &P) -> Result<Option<NodeOf<P>>> {
        let mut traversal = self.create_traversal(problem);
        self.bounded.search_bounded(&mut traversal)
    }
}
