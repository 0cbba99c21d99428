//! Common test utilities for the statespace test suite.
//!
//! Explicit game trees and search problems small enough to check against
//! brute force.

#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap};

use rand::{Rng, SeedableRng, rngs::StdRng};
use statespace::{Game, Node, SearchProblem};

/// A game tree stored as adjacency lists, with a value for every position.
#[derive(Debug, Clone)]
pub struct ExplicitTree {
    pub children: Vec<Vec<usize>>,
    pub values: Vec<f64>,
}

impl ExplicitTree {
    /// Random tree with the given depth; inner positions have between one
    /// and `max_branching` children.
    pub fn random(seed: u64, depth: usize, max_branching: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = Self {
            children: vec![Vec::new()],
            values: vec![rng.random_range(-10.0..10.0)],
        };
        let mut layer = vec![0];
        for _ in 0..depth {
            let mut next_layer = Vec::new();
            for parent in layer {
                for _ in 0..rng.random_range(1..=max_branching) {
                    let id = tree.values.len();
                    tree.values.push(rng.random_range(-10.0..10.0));
                    tree.children.push(Vec::new());
                    tree.children[parent].push(id);
                    next_layer.push(id);
                }
            }
            layer = next_layer;
        }
        tree
    }

    pub fn value(&self, state: usize) -> f64 {
        self.values[state]
    }
}

impl Game for ExplicitTree {
    type State = usize;
    type Action = usize;

    fn successors(&self, state: &usize) -> Vec<Node<usize, usize>> {
        let parent = Node::root(*state);
        self.children[*state]
            .iter()
            .map(|&child| parent.child(child, child, 1.0))
            .collect()
    }
}

/// Minimax by full enumeration with the same horizon rules as the α-β
/// search: positions at ply >= 1 are scored once cut off or terminal.
pub fn minimax<G, U>(game: &G, state: &G::State, ply: usize, max_depth: usize, utility: &U) -> f64
where
    G: Game,
    U: Fn(&G::State) -> f64,
{
    let successors = game.successors(state);
    if ply >= 1 && (ply >= max_depth || successors.is_empty()) {
        return utility(state);
    }
    let values = successors
        .iter()
        .map(|next| minimax(game, next.state(), ply + 1, max_depth, utility));
    if ply.is_multiple_of(2) {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

/// Root decision of plain minimax: first action with the maximal value.
pub fn minimax_decision<G, U>(game: &G, state: &G::State, max_depth: usize, utility: &U) -> (G::Action, f64)
where
    G: Game,
    U: Fn(&G::State) -> f64,
{
    let mut best: Option<(G::Action, f64)> = None;
    for option in game.successors(state) {
        let value = minimax(game, option.state(), 1, max_depth, utility);
        if best.as_ref().is_none_or(|(_, incumbent)| value > *incumbent) {
            let action = option.action().cloned();
            best = action.map(|a| (a, value));
        }
    }
    best.expect("root must have successors")
}

/// Complete `branching`-ary tree of the given depth, where states are
/// heap indices, that counts how often each state is expanded.
pub struct CountingTree {
    pub branching: u64,
    pub depth: usize,
    pub goal: Option<u64>,
    pub expansions: RefCell<HashMap<u64, usize>>,
}

impl CountingTree {
    pub fn new(branching: u64, depth: usize, goal: Option<u64>) -> Self {
        Self {
            branching,
            depth,
            goal,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    pub fn max_expansions_of_any_state(&self) -> usize {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }

    pub fn total_expansions(&self) -> usize {
        self.expansions.borrow().values().sum()
    }
}

impl SearchProblem for CountingTree {
    type State = u64;
    type Action = u64;

    fn initial_state(&self) -> u64 {
        0
    }

    fn expand(&self, node: &Node<u64, u64>) -> Vec<Node<u64, u64>> {
        *self.expansions.borrow_mut().entry(*node.state()).or_default() += 1;
        if node.depth() >= self.depth {
            return Vec::new();
        }
        (1..=self.branching)
            .map(|k| {
                let child = node.state() * self.branching + k;
                node.child(child, k, 1.0)
            })
            .collect()
    }

    fn is_solution(&self, node: &Node<u64, u64>) -> bool {
        self.goal == Some(*node.state())
    }
}
