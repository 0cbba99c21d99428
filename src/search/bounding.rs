//! Bounded depth-first search
//!
//! The bounding layer evaluates every node it pulls before the traversal
//! expands it. Nodes whose evaluation exceeds the bound are pruned, and the
//! run remembers that it pruned something: that flag is what lets
//! iterative deepening tell a cut-off space from an exhausted one.

use tracing::debug;

use super::GeneralSearch;
use crate::{
    Result,
    config::BoundingConfig,
    node::Node,
    problem::{Depth, EvaluationFunction, NodeOf, SearchProblem},
    traversal::{DepthFirst, Traversal, TraversalStrategy},
};

/// Depth-first search that prunes nodes with `evaluation(node) > bound`.
///
/// With `continue_when_found` set, finding a solution tightens the bound to
/// that solution's evaluation and the search carries on, returning the
/// cheapest solution once the space is exhausted.
///
/// # Examples
///
/// ```
/// use statespace::{DepthFirstBoundingSearch, GeneralSearch, problems::GraphProblem};
///
/// let chain = GraphProblem::chain(5);
/// let mut shallow = DepthFirstBoundingSearch::with_depth_bound(4);
/// assert!(shallow.solve(&chain).unwrap().is_none());
/// assert!(shallow.have_pruned());
///
/// let mut deep = DepthFirstBoundingSearch::with_depth_bound(5);
/// let goal = deep.solve(&chain).unwrap().unwrap();
/// assert_eq!(goal.cost(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstBoundingSearch<E = Depth> {
    evaluation: E,
    config: BoundingConfig,
    pruned: bool,
    expansions: usize,
    // evaluation of the best solution of the current run
    incumbent: Option<f64>,
}

impl DepthFirstBoundingSearch<Depth> {
    /// Bound the search by path length.
    pub fn with_depth_bound(bound: usize) -> Self {
        Self {
            evaluation: Depth,
            config: BoundingConfig::new().with_bound(bound as f64),
            pruned: false,
            expansions: 0,
            incumbent: None,
        }
    }
}

impl<E> DepthFirstBoundingSearch<E> {
    /// Create a bounding search over an arbitrary evaluation function.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBound` if `bound` is NaN.
    pub fn new(evaluation: E, bound: f64) -> Result<Self> {
        Self::from_config(evaluation, BoundingConfig::new().with_bound(bound))
    }

    pub fn from_config(evaluation: E, config: BoundingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            evaluation,
            config,
            pruned: false,
            expansions: 0,
            incumbent: None,
        })
    }

    pub fn with_continue_when_found(mut self, continue_when_found: bool) -> Self {
        self.config.continue_when_found = continue_when_found;
        self
    }

    /// The bound in force: the configured one, tightened by the best
    /// solution of the last run when `continue_when_found` is set. Every run
    /// starts again from the configured bound.
    pub fn bound(&self) -> f64 {
        let configured = self.config.effective_bound();
        self.incumbent.map_or(configured, |value| value.min(configured))
    }

    pub fn set_bound(&mut self, bound: f64) -> Result<()> {
        let config = self.config.clone().with_bound(bound);
        config.validate()?;
        self.config = config;
        self.incumbent = None;
        Ok(())
    }

    pub fn evaluation(&self) -> &E {
        &self.evaluation
    }

    pub fn is_continued_when_found(&self) -> bool {
        self.config.continue_when_found
    }

    /// Whether the last run pruned at least one node.
    pub fn have_pruned(&self) -> bool {
        self.pruned
    }

    /// Number of expansions performed by the last run.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Whether `node` lies beyond the bound. Records the pruning.
    pub fn is_out_of_bounds<S, A>(&mut self, node: &Node<S, A>) -> bool
    where
        E: EvaluationFunction<S, A>,
    {
        let out = self.evaluation.evaluate(node) > self.bound();
        if out {
            self.pruned = true;
        }
        out
    }

    /// Run the bounded search over any traversal order.
    pub fn search_bounded<P, F>(&mut self, nodes: &mut Traversal<'_, P, F>) -> Result<Option<NodeOf<P>>>
    where
        P: SearchProblem,
        F: TraversalStrategy<P::State, P::Action>,
        E: EvaluationFunction<P::State, P::Action>,
    {
        self.pruned = false;
        self.incumbent = None;
        let problem = nodes.problem();
        let mut best: Option<(NodeOf<P>, f64)> = None;

        while nodes.has_next() {
            let node = nodes.advance()?;
            if self.is_out_of_bounds(&node) {
                nodes.prune()?;
                continue;
            }
            if !problem.is_solution(&node) {
                continue;
            }
            if !self.config.continue_when_found {
                self.expansions = nodes.expansions();
                return Ok(Some(node));
            }

            let value = self.evaluation.evaluate(&node);
            if best.as_ref().is_none_or(|(_, incumbent)| value < *incumbent) {
                debug!(value, depth = node.depth(), "bound tightened by solution");
                self.incumbent = Some(value);
                best = Some((node, value));
            }
        }

        self.expansions = nodes.expansions();
        Ok(best.map(|(node, _)| node))
    }
}

impl<P, E> GeneralSearch<P> for DepthFirstBoundingSearch<E>
where
    P: SearchProblem,
    E: EvaluationFunction<P::State, P::Action>,
{
    type Strategy = DepthFirst<P::State, P::Action>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        Traversal::new(problem, DepthFirst::new())
    }

    fn is_optimal(&self) -> bool {
        false
    }

    fn solve(&mut self, problem: &P) -> Result<Option<NodeOf<P>>> {
        let mut traversal = self.create_traversal(problem);
        self.search_bounded(&mut traversal)
    }
}
