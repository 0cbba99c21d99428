//! Problem-independent state-space search
//!
//! This crate provides:
//! - A lazily expanding node traversal with pluggable frontier strategies
//! - Bounded depth-first search, iterative deepening and branch and bound
//! - α-β pruning for two-player zero-sum games
//! - Hill climbing, simulated annealing and threshold accepting local search
//! - Randomized paths through probabilistic transition models
//! - Small concrete problems (graphs, Markov tables, Tic-Tac-Toe) to drive them
//!
//! A problem only has to say where it starts, how a node expands and what
//! counts as a solution:
//!
//! ```
//! use statespace::{DepthFirstBoundingSearch, GeneralSearch, problems::GraphProblem};
//!
//! let graph = GraphProblem::new(0, [3])
//!     .with_edge(0, 1, 1.0)
//!     .with_edge(1, 3, 1.0)
//!     .with_edge(0, 3, 5.0);
//!
//! let mut search = DepthFirstBoundingSearch::with_depth_bound(2);
//! let goal = search.solve(&graph).unwrap().unwrap();
//! assert_eq!(*goal.state(), 3);
//! assert_eq!(goal.depth(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod local;
pub mod node;
pub mod problem;
pub mod problems;
pub mod search;
pub mod tictactoe;
pub mod transition;
pub mod traversal;

pub use config::SearchConfig;
pub use error::{Error, Result};
pub use game::{AlphaBetaPruning, Game, UtilityFunction};
pub use local::{HillClimbing, SimulatedAnnealing, ThresholdAccepting};
pub use node::Node;
pub use problem::{CostPlusHeuristic, Depth, EvaluationFunction, NodeOf, PathCost, SearchProblem};
pub use search::{
    BranchAndBound, BreadthFirstSearch, DepthFirstBoundingSearch, DepthFirstSearch, GeneralSearch,
    IterativeDeepening,
};
pub use transition::{TransitionModel, TransitionPath};
pub use traversal::{Traversal, TraversalStrategy};
