//! Hill climbing
//!
//! The walk moves to a randomly proposed child only if it strictly lowers the
//! heuristic cost, and ends on the first node none of whose children does.
//! Plateaus end the walk as well.

use tracing::trace;

use super::{Acceptance, LocalOptimizer, seeded_rng};
use crate::{
    config::LocalSearchConfig,
    node::Node,
    problem::{EvaluationFunction, SearchProblem},
    search::GeneralSearch,
    traversal::Traversal,
};

/// Accepts strict improvements of a heuristic cost.
#[derive(Debug, Clone)]
pub struct ImprovementAcceptance<H> {
    heuristic: H,
    current_value: Option<f64>,
}

impl<H> ImprovementAcceptance<H> {
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            current_value: None,
        }
    }

    pub fn current_value(&self) -> Option<f64> {
        self.current_value
    }
}

impl<S, A, H> Acceptance<S, A> for ImprovementAcceptance<H>
where
    H: EvaluationFunction<S, A>,
{
    fn accept(&mut self, current: &Node<S, A>, proposed: &Node<S, A>) -> bool {
        let current_value = match self.current_value {
            Some(value) => value,
            None => self.heuristic.evaluate(current),
        };
        let value = self.heuristic.evaluate(proposed);
        if value < current_value {
            trace!(from = current_value, to = value, "hill climbing step");
            self.current_value = Some(value);
            true
        } else {
            self.current_value = Some(current_value);
            false
        }
    }
}

/// Hill climbing search with heuristic cost `h`.
///
/// # Examples
///
/// ```
/// use statespace::{GeneralSearch, Node, local::HillClimbing, problems::GraphProblem};
///
/// let chain = GraphProblem::chain(4);
/// let mut search = HillClimbing::new(|n: &Node<usize, usize>| 4.0 - *n.state() as f64).with_seed(1);
/// let goal = search.solve(&chain).unwrap().unwrap();
/// assert_eq!(*goal.state(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbing<H> {
    heuristic: H,
    config: LocalSearchConfig,
}

impl<H> HillClimbing<H> {
    pub fn new(heuristic: H) -> Self {
        Self::from_config(heuristic, LocalSearchConfig::default())
    }

    pub fn from_config(heuristic: H, config: LocalSearchConfig) -> Self {
        Self { heuristic, config }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Hill climbing may stop on a local minimum that is no solution.
    pub fn is_correct(&self) -> bool {
        false
    }
}

impl<P, H> GeneralSearch<P> for HillClimbing<H>
where
    P: SearchProblem,
    H: EvaluationFunction<P::State, P::Action> + Clone,
{
    type Strategy = LocalOptimizer<P::State, P::Action, ImprovementAcceptance<H>>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        let acceptance = ImprovementAcceptance::new(self.heuristic.clone());
        Traversal::new(problem, LocalOptimizer::new(acceptance, seeded_rng(self.config.seed)))
    }

    fn is_optimal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::GraphProblem;

    #[test]
    fn only_strict_improvements_are_taken() {
        let current = Node::root(5usize);
        let h = |n: &Node<usize, usize>| *n.state() as f64;

        let mut rule = ImprovementAcceptance::new(h);
        assert!(!rule.accept(&current, &current.child(6, 6, 1.0)));
        assert!(!rule.accept(&current, &current.child(5, 5, 1.0)));
        assert!(rule.accept(&current, &current.child(4, 4, 1.0)));
        assert_eq!(rule.current_value(), Some(4.0));
    }

    #[test]
    fn climbs_a_convex_line_to_the_goal() {
        let mut graph = GraphProblem::new(0, [10]);
        for v in 0..10 {
            graph.add_edge(v, v + 1, 1.0);
            graph.add_edge(v + 1, v, 1.0);
        }
        let h = |n: &Node<usize, usize>| 10.0 - *n.state() as f64;
        for seed in 0..5 {
            let goal = HillClimbing::new(h).with_seed(seed).solve(&graph).unwrap().unwrap();
            assert_eq!(*goal.state(), 10);
            assert_eq!(goal.depth(), 10);
        }
    }

    #[test]
    fn plateau_ends_the_walk() {
        let graph = GraphProblem::new(0, [2]).with_edge(0, 1, 1.0).with_edge(1, 2, 1.0);
        let flat = |n: &Node<usize, usize>| if *n.state() == 2 { 0.0 } else { 1.0 };
        let mut search = HillClimbing::new(flat).with_seed(4);
        assert!(search.solve(&graph).unwrap().is_none());
        assert!(!search.is_correct());
        assert!(!GeneralSearch::<GraphProblem>::is_optimal(&search));
    }
}
