//! Traversal iterators - lazy, single-pass node sequences
//!
//! A traversal order is defined by a [`TraversalStrategy`]: a frontier with
//! three primitives (`is_empty`, `select`, `add_frontier`). [`Traversal`]
//! wraps a strategy and a problem and supplies the shared iterator logic:
//! the node returned last is expanded lazily, at most once, right before
//! the next node is requested, unless the caller prunes it first.

pub mod breadth_first;
pub mod depth_first;

pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;

use crate::{Error, Result, node::Node, problem::SearchProblem};

/// Frontier primitives that determine a traversal order.
pub trait TraversalStrategy<S, A> {
    /// Whether the frontier currently holds no nodes.
    fn is_empty(&self) -> bool;

    /// Remove and return the next node to visit, `None` if empty.
    fn select(&mut self) -> Option<Node<S, A>>;

    /// Merge newly discovered children into the frontier.
    ///
    /// Returns whether the frontier changed.
    fn add_frontier(&mut self, children: Vec<Node<S, A>>) -> bool;

    /// Whether the strategy refuses to produce further nodes regardless of
    /// its frontier. Local optimizers use this to stop once frozen.
    fn is_halted(&self) -> bool {
        false
    }
}

/// Expansion bookkeeping for the node handed out last.
#[derive(Debug, Clone)]
struct LastReturned<S, A> {
    node: Option<Node<S, A>>,
    expanded: bool,
}

impl<S, A> LastReturned<S, A> {
    fn none() -> Self {
        Self {
            node: None,
            expanded: false,
        }
    }

    /// The node still awaiting expansion, if any.
    fn pending(&self) -> Option<&Node<S, A>> {
        if self.expanded {
            None
        } else {
            self.node.as_ref()
        }
    }
}

/// A lazy traversal over a problem's state space.
///
/// Not restartable: each run of a search needs a fresh traversal.
pub struct Traversal<'p, P: SearchProblem, F> {
    problem: &'p P,
    strategy: F,
    last: LastReturned<P::State, P::Action>,
    expansions: usize,
}

impl<'p, P, F> Traversal<'p, P, F>
where
    P: SearchProblem,
    F: TraversalStrategy<P::State, P::Action>,
{
    /// Create a traversal whose frontier starts with the problem's root node.
    pub fn new(problem: &'p P, mut strategy: F) -> Self {
        strategy.add_frontier(vec![Node::root(problem.initial_state())]);
        Self {
            problem,
            strategy,
            last: LastReturned::none(),
            expansions: 0,
        }
    }

    pub fn problem(&self) -> &'p P {
        self.problem
    }

    pub fn strategy(&self) -> &F {
        &self.strategy
    }

    /// Number of nodes handed to `SearchProblem::expand` so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Whether another node can be produced.
    ///
    /// May expand the node returned last if the frontier is empty, since
    /// only its children can tell.
    pub fn has_next(&mut self) -> bool {
        if self.strategy.is_halted() {
            return false;
        }
        let more = if !self.strategy.is_empty() {
            true
        } else {
            self.expand_pending()
        };
        more && !self.strategy.is_halted()
    }

    /// Expand the node returned last, then select the next node.
    pub fn advance(&mut self) -> Result<Node<P::State, P::Action>> {
        self.expand_pending();
        let node = self.strategy.select().ok_or(Error::TraversalExhausted)?;
        self.last = LastReturned {
            node: Some(node.clone()),
            expanded: false,
        };
        Ok(node)
    }

    /// Explicitly expand the node returned last.
    ///
    /// Returns whether the frontier changed.
    ///
    /// # Errors
    ///
    /// `NoNodeReturned` if no node is pending (none returned yet, or pruned),
    /// `AlreadyExpanded` if it was expanded before.
    pub fn expand_last(&mut self) -> Result<bool> {
        if self.last.node.is_none() {
            return Err(Error::NoNodeReturned);
        }
        if self.last.expanded {
            return Err(Error::AlreadyExpanded);
        }
        Ok(self.expand_pending())
    }

    /// Prune the node returned last so that it is never expanded.
    ///
    /// # Errors
    ///
    /// `NoNodeReturned` if `advance` has not been called since the last prune.
    pub fn prune(&mut self) -> Result<()> {
        if self.last.node.take().is_none() {
            return Err(Error::NoNodeReturned);
        }
        self.last.expanded = false;
        Ok(())
    }

    fn expand_pending(&mut self) -> bool {
        let Some(node) = self.last.pending() else {
            return false;
        };
        let children = self.problem.expand(node);
        self.last.expanded = true;
        self.expansions += 1;
        self.strategy.add_frontier(children)
    }
}

impl<P, F> Iterator for Traversal<'_, P, F>
where
    P: SearchProblem,
    F: TraversalStrategy<P::State, P::Action>,
{
    type Item = Node<P::State, P::Action>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.advance().ok()
        } else {
            None
        }
    }
}
