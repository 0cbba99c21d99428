//! Blind searches without a bound

use super::GeneralSearch;
use crate::{
    problem::SearchProblem,
    traversal::{BreadthFirst, DepthFirst, Traversal},
};

/// Depth-first search. Neither complete on infinite spaces nor optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl<P: SearchProblem> GeneralSearch<P> for DepthFirstSearch {
    type Strategy = DepthFirst<P::State, P::Action>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        Traversal::new(problem, DepthFirst::new())
    }

    fn is_optimal(&self) -> bool {
        false
    }
}

/// Breadth-first search. Optimal for uniform step costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl<P: SearchProblem> GeneralSearch<P> for BreadthFirstSearch {
    type Strategy = BreadthFirst<P::State, P::Action>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        Traversal::new(problem, BreadthFirst::new())
    }

    fn is_optimal(&self) -> bool {
        true
    }
}
