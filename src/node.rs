//! Search tree nodes

use serde::{Deserialize, Serialize};

/// A vertex of the search tree: a state, the action that reached it and the
/// cost accumulated along the way.
///
/// Nodes are created by the root constructor or by a problem's expansion
/// operator and are immutable afterwards, except for the single utility
/// assignment an adversary search performs on the move it finally chooses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<S, A> {
    state: S,
    action: Option<A>,
    cost: f64,
    depth: usize,
    utility: Option<f64>,
}

impl<S, A> Node<S, A> {
    /// Create the root node for an initial state.
    pub fn root(state: S) -> Self {
        Self {
            state,
            action: None,
            cost: 0.0,
            depth: 0,
            utility: None,
        }
    }

    /// Create a node with explicit path bookkeeping.
    pub fn new(state: S, action: Option<A>, cost: f64, depth: usize) -> Self {
        Self {
            state,
            action,
            cost,
            depth,
            utility: None,
        }
    }

    /// Create a successor of this node reached by `action` at `step_cost`.
    #[must_use = "child returns a new node; the parent is unchanged"]
    pub fn child(&self, state: S, action: A, step_cost: f64) -> Self {
        Self {
            state,
            action: Some(action),
            cost: self.cost + step_cost,
            depth: self.depth + 1,
            utility: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// The action that produced this node, `None` for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated path cost g(n).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of actions between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Utility assigned by an adversary search, if any.
    pub fn utility(&self) -> Option<f64> {
        self.utility
    }

    pub fn is_root(&self) -> bool {
        self.action.is_none()
    }

    /// Finalize this node's utility.
    ///
    /// Consumes the node, so the assignment can happen at most once per
    /// value that leaves the search.
    #[must_use = "with_utility returns the annotated node"]
    pub fn with_utility(mut self, utility: f64) -> Self {
        self.utility = Some(utility);
        self
    }

    pub fn into_state(self) -> S {
        self.state
    }
}
