//! Explicit problem and model implementations
//!
//! Small table-driven collaborators for driving the search templates:
//! a weighted directed graph as a [`SearchProblem`] and a finite Markov
//! transition table as a [`TransitionModel`].

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    hash::Hash,
};

use serde::{Deserialize, Serialize};

use crate::{node::Node, problem::SearchProblem, transition::TransitionModel};

/// A weighted directed graph with a start vertex and a set of goal vertices.
///
/// Actions are the destination vertex of the edge taken. Successors are
/// produced in edge insertion order. Cycles are allowed; searches that
/// cannot cope with them must be bounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphProblem {
    start: usize,
    goals: BTreeSet<usize>,
    edges: BTreeMap<usize, Vec<(usize, f64)>>,
}

impl GraphProblem {
    pub fn new(start: usize, goals: impl IntoIterator<Item = usize>) -> Self {
        Self {
            start,
            goals: goals.into_iter().collect(),
            edges: BTreeMap::new(),
        }
    }

    /// A chain `0 -> 1 -> ... -> length` with unit costs and the last
    /// vertex as goal.
    pub fn chain(length: usize) -> Self {
        (0..length).fold(Self::new(0, [length]), |graph, v| graph.with_edge(v, v + 1, 1.0))
    }

    #[must_use]
    pub fn with_edge(mut self, from: usize, to: usize, cost: f64) -> Self {
        self.add_edge(from, to, cost);
        self
    }

    pub fn add_edge(&mut self, from: usize, to: usize, cost: f64) {
        self.edges.entry(from).or_default().push((to, cost));
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn goals(&self) -> &BTreeSet<usize> {
        &self.goals
    }

    /// Outgoing edges of `vertex` as `(destination, cost)`.
    pub fn edges_from(&self, vertex: usize) -> &[(usize, f64)] {
        self.edges.get(&vertex).map(Vec::as_slice).unwrap_or_default()
    }
}

impl SearchProblem for GraphProblem {
    type State = usize;
    type Action = usize;

    fn initial_state(&self) -> usize {
        self.start
    }

    fn expand(&self, node: &Node<usize, usize>) -> Vec<Node<usize, usize>> {
        self.edges_from(*node.state())
            .iter()
            .map(|&(to, cost)| node.child(to, to, cost))
            .collect()
    }

    fn is_solution(&self, node: &Node<usize, usize>) -> bool {
        self.goals.contains(node.state())
    }
}

/// A finite transition table `(action, state) -> [(state, probability)]`.
///
/// Pairs without an entry have no destinations, which any sampler reports
/// as an inconsistent distribution.
#[derive(Debug, Clone)]
pub struct MarkovTable<S, A> {
    table: HashMap<(A, S), Vec<(S, f64)>>,
}

impl<S, A> MarkovTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_transition(mut self, action: A, from: S, destinations: Vec<(S, f64)>) -> Self {
        self.table.insert((action, from), destinations);
        self
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S, A> Default for MarkovTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> TransitionModel for MarkovTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    type State = S;
    type Action = A;

    fn successors_of(&self, action: &A, state: &S) -> Vec<(S, f64)> {
        self.table
            .get(&(action.clone(), state.clone()))
            .cloned()
            .unwrap_or_default()
    }
}
