//! Threshold accepting (TA)
//!
//! A probabilistic local optimizer close to simulated annealing: improving
//! or equal moves are always taken, worsening moves only while their loss
//! stays within a threshold that a cooling schedule lowers over time. At
//! threshold zero the search degenerates to hill climbing and stops.
//!
//! TA is neither complete nor optimal.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Acceptance, LocalOptimizer, seeded_rng};
use crate::{
    config::LocalSearchConfig,
    node::Node,
    problem::{EvaluationFunction, SearchProblem},
    search::GeneralSearch,
    traversal::Traversal,
};

/// Mapping from elapsed steps to acceptance threshold.
///
/// Schedules are expected to trend toward zero; the search stops once the
/// threshold is exactly zero.
pub trait CoolingSchedule {
    fn value_at(&self, step: u64) -> f64;
}

impl<F> CoolingSchedule for F
where
    F: Fn(u64) -> f64,
{
    fn value_at(&self, step: u64) -> f64 {
        self(step)
    }
}

/// `max(0, initial - decrement * t)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCooling {
    pub initial: f64,
    pub decrement: f64,
}

impl LinearCooling {
    pub fn new(initial: f64, decrement: f64) -> Self {
        Self { initial, decrement }
    }
}

impl CoolingSchedule for LinearCooling {
    fn value_at(&self, step: u64) -> f64 {
        (self.initial - self.decrement * step as f64).max(0.0)
    }
}

/// Threshold accepting decision rule over a heuristic cost function.
#[derive(Debug, Clone)]
pub struct ThresholdAcceptance<H, C> {
    heuristic: H,
    schedule: C,
    step: u64,
    threshold: f64,
    current_value: Option<f64>,
}

impl<H, C> ThresholdAcceptance<H, C> {
    pub fn new(heuristic: H, schedule: C) -> Self {
        Self {
            heuristic,
            schedule,
            step: 0,
            // anything but zero until the schedule is first consulted
            threshold: f64::INFINITY,
            current_value: None,
        }
    }

    /// Number of acceptance decisions taken so far.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Threshold used by the latest decision.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Heuristic value of the node the walk stands on.
    pub fn current_value(&self) -> Option<f64> {
        self.current_value
    }
}

impl<S, A, H, C> Acceptance<S, A> for ThresholdAcceptance<H, C>
where
    H: EvaluationFunction<S, A>,
    C: CoolingSchedule,
{
    fn accept(&mut self, current: &Node<S, A>, proposed: &Node<S, A>) -> bool {
        self.threshold = self.schedule.value_at(self.step);
        self.step += 1;

        let current_value = match self.current_value {
            Some(value) => value,
            None => self.heuristic.evaluate(current),
        };
        let value = self.heuristic.evaluate(proposed);
        let delta = value - current_value;

        if delta <= self.threshold {
            trace!(
                from = current_value,
                to = value,
                delta,
                threshold = self.threshold,
                "threshold accepting update"
            );
            self.current_value = Some(value);
            true
        } else {
            self.current_value = Some(current_value);
            false
        }
    }

    fn is_frozen(&self) -> bool {
        self.threshold == 0.0
    }
}

/// Threshold accepting search with heuristic cost `h` and a cooling
/// schedule.
///
/// # Examples
///
/// ```
/// use statespace::{GeneralSearch, Node, local::ThresholdAccepting, problems::GraphProblem};
///
/// let chain = GraphProblem::chain(3);
/// let distance = |n: &Node<usize, usize>| 3.0 - *n.state() as f64;
/// let mut search = ThresholdAccepting::new(distance, |_t: u64| 0.5).with_seed(1);
/// let goal = search.solve(&chain).unwrap().unwrap();
/// assert_eq!(*goal.state(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdAccepting<H, C> {
    heuristic: H,
    schedule: C,
    config: LocalSearchConfig,
}

impl<H, C> ThresholdAccepting<H, C> {
    pub fn new(heuristic: H, schedule: C) -> Self {
        Self::from_config(heuristic, schedule, LocalSearchConfig::default())
    }

    pub fn from_config(heuristic: H, schedule: C, config: LocalSearchConfig) -> Self {
        Self {
            heuristic,
            schedule,
            config,
        }
    }

    /// Fix the order in which neighbours are proposed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    pub fn schedule(&self) -> &C {
        &self.schedule
    }

    /// Whether every solution returned is a real solution. Local search
    /// may stop on a node that merely was the last one accepted.
    pub fn is_correct(&self) -> bool {
        false
    }
}

impl<P, H, C> GeneralSearch<P> for ThresholdAccepting<H, C>
where
    P: SearchProblem,
    H: EvaluationFunction<P::State, P::Action> + Clone,
    C: CoolingSchedule + Clone,
{
    type Strategy = LocalOptimizer<P::State, P::Action, ThresholdAcceptance<H, C>>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        let acceptance = ThresholdAcceptance::new(self.heuristic.clone(), self.schedule.clone());
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

    fn distance_to(target: usize) -> impl Fn(&Node<usize, usize>) -> f64 + Clone {
        move |n: &Node<usize, usize>| (*n.state() as f64 - target as f64).abs()
    }

    /// Integers 0..=20 as a path graph with edges in both directions.
    fn line() -> GraphProblem {
        let mut graph = GraphProblem::new(0, [20]);
        for v in 0..20 {
            graph.add_edge(v, v + 1, 1.0);
            graph.add_edge(v + 1, v, 1.0);
        }
        graph
    }

    #[test]
    fn linear_cooling_reaches_zero() {
        let schedule = LinearCooling::new(2.0, 0.5);
        assert_eq!(schedule.value_at(0), 2.0);
        assert_eq!(schedule.value_at(3), 0.5);
        assert_eq!(schedule.value_at(4), 0.0);
        assert_eq!(schedule.value_at(100), 0.0);
    }

    #[test]
    fn worsening_moves_need_headroom() {
        let current = Node::root(5usize);
        let worse: Node<usize, usize> = current.child(6, 6, 1.0);
        let better = current.child(4, 4, 1.0);

        let mut rule = ThresholdAcceptance::new(distance_to(0), |_t: u64| 0.5);
        assert!(!rule.accept(&current, &worse));
        assert!(rule.accept(&current, &better));
        assert_eq!(rule.current_value(), Some(4.0));
        assert_eq!(rule.step(), 2);

        let mut generous = ThresholdAcceptance::new(distance_to(0), |_t: u64| 1.0);
        assert!(generous.accept(&current, &worse));
    }

    #[test]
    fn frozen_schedule_stops_traversal() {
        let graph = line();
        let mut search = ThresholdAccepting::new(distance_to(20), |t: u64| (10.0 - t as f64).max(0.0))
            .with_seed(7);
        let mut traversal = search.create_traversal(&graph);

        let mut visited = 0;
        while traversal.has_next() {
            traversal.advance().unwrap();
            visited += 1;
        }

        let rule = traversal.strategy().acceptance();
        assert_eq!(rule.threshold(), 0.0);
        assert!(visited <= 11, "visited {visited} nodes");
    }

    #[test]
    fn hill_climbing_phase_finds_goal_on_convex_line() {
        let graph = line();
        let mut search = ThresholdAccepting::new(distance_to(20), |_t: u64| 0.5).with_seed(3);
        let goal = search.solve(&graph).unwrap().unwrap();
        assert_eq!(*goal.state(), 20);
        assert_eq!(goal.depth(), 20);
    }

    #[test]
    fn local_minimum_without_headroom_ends_search() {
        // 0 -> 1 is worse than staying, and 1 is the only way to the goal.
        let graph = GraphProblem::new(0, [2]).with_edge(0, 1, 1.0).with_edge(1, 2, 1.0);
        let bump = |n: &Node<usize, usize>| if *n.state() == 1 { 10.0 } else { 0.0 };
        let mut search = ThresholdAccepting::new(bump, |_t: u64| 1.0).with_seed(1);
        assert!(search.solve(&graph).unwrap().is_none());
        assert!(!GeneralSearch::<GraphProblem>::is_optimal(&search));
    }
}
