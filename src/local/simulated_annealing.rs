//! Simulated annealing (SA)
//!
//! Improving or equal moves are always taken. A move that worsens the
//! heuristic cost by `delta` is taken with probability `exp(-delta / T)`,
//! where the temperature `T` follows a cooling schedule. At temperature zero
//! the walk is frozen and stops.
//!
//! SA is neither complete nor optimal.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::trace;

use super::{Acceptance, CoolingSchedule, LocalOptimizer, seeded_rng};
use crate::{
    config::LocalSearchConfig,
    node::Node,
    problem::{EvaluationFunction, SearchProblem},
    search::GeneralSearch,
    traversal::Traversal,
};

/// Metropolis decision rule over a heuristic cost function.
#[derive(Debug, Clone)]
pub struct AnnealingAcceptance<H, C> {
    heuristic: H,
    schedule: C,
    rng: StdRng,
    step: u64,
    temperature: f64,
    current_value: Option<f64>,
}

impl<H, C> AnnealingAcceptance<H, C> {
    pub fn new(heuristic: H, schedule: C, rng: StdRng) -> Self {
        Self {
            heuristic,
            schedule,
            rng,
            step: 0,
            temperature: f64::INFINITY,
            current_value: None,
        }
    }

    /// Number of acceptance decisions taken so far.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Temperature used by the latest decision.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current_value(&self) -> Option<f64> {
        self.current_value
    }
}

impl<S, A, H, C> Acceptance<S, A> for AnnealingAcceptance<H, C>
where
    H: EvaluationFunction<S, A>,
    C: CoolingSchedule,
{
    fn accept(&mut self, current: &Node<S, A>, proposed: &Node<S, A>) -> bool {
        self.temperature = self.schedule.value_at(self.step);
        self.step += 1;

        let current_value = match self.current_value {
            Some(value) => value,
            None => self.heuristic.evaluate(current),
        };
        let value = self.heuristic.evaluate(proposed);
        let delta = value - current_value;

        let accepted = if delta <= 0.0 {
            true
        } else if self.temperature > 0.0 {
            self.rng.random::<f64>() < (-delta / self.temperature).exp()
        } else {
            false
        };

        if accepted {
            trace!(
                from = current_value,
                to = value,
                delta,
                temperature = self.temperature,
                "simulated annealing update"
            );
            self.current_value = Some(value);
        } else {
            self.current_value = Some(current_value);
        }
        accepted
    }

    fn is_frozen(&self) -> bool {
        self.temperature == 0.0
    }
}

/// Simulated annealing search with heuristic cost `h` and a cooling
/// schedule.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<H, C> {
    heuristic: H,
    schedule: C,
    config: LocalSearchConfig,
}

impl<H, C> SimulatedAnnealing<H, C> {
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

    /// Fix the proposal order and the acceptance draws.
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

    pub fn is_correct(&self) -> bool {
        false
    }
}

impl<P, H, C> GeneralSearch<P> for SimulatedAnnealing<H, C>
where
    P: SearchProblem,
    H: EvaluationFunction<P::State, P::Action> + Clone,
    C: CoolingSchedule + Clone,
{
    type Strategy = LocalOptimizer<P::State, P::Action, AnnealingAcceptance<H, C>>;

    fn create_traversal<'p>(&mut self, problem: &'p P) -> Traversal<'p, P, Self::Strategy> {
        let mut proposals = seeded_rng(self.config.seed);
        let draws = StdRng::from_rng(&mut proposals);
        let acceptance = AnnealingAcceptance::new(self.heuristic.clone(), self.schedule.clone(), draws);
        Traversal::new(problem, LocalOptimizer::new(acceptance, proposals))
    }

    fn is_optimal(&self) -> bool {
        false
    }
}
