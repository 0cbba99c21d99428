//! Randomized paths through a transition model

use std::iter::Peekable;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::trace;

use super::TransitionModel;
use crate::{Error, Result, config::SamplerConfig};

/// A randomized path through a transition model under a fixed sequence of
/// actions.
///
/// Each step draws `r` uniformly from `[0, 1)` and walks the destination
/// distribution of the next action, accumulating probability mass until it
/// reaches `r`. The random source is owned by the path, so a seed fixes the
/// whole trajectory.
///
/// # Examples
///
/// ```
/// use statespace::{problems::MarkovTable, transition::TransitionPath};
///
/// let model = MarkovTable::new()
///     .with_transition("go", 0, vec![(1, 0.5), (2, 0.5)])
///     .with_transition("go", 1, vec![(0, 1.0)])
///     .with_transition("go", 2, vec![(0, 1.0)]);
///
/// let path: Vec<u8> = TransitionPath::new(&model, ["go", "go"], 0)
///     .with_seed(3)
///     .collect::<statespace::Result<_>>()
///     .unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1], 0);
/// ```
pub struct TransitionPath<'m, M: TransitionModel, I: Iterator> {
    model: &'m M,
    actions: Peekable<I>,
    state: M::State,
    rng: StdRng,
    tolerance: f64,
}

impl<'m, M, I> TransitionPath<'m, M, I>
where
    M: TransitionModel,
    I: Iterator<Item = M::Action>,
{
    /// Create a path from `initial_state`, seeded from the thread RNG.
    pub fn new(
        model: &'m M,
        actions: impl IntoIterator<IntoIter = I>,
        initial_state: M::State,
    ) -> Self {
        Self {
            model,
            actions: actions.into_iter().peekable(),
            state: initial_state,
            rng: StdRng::from_rng(&mut rand::rng()),
            tolerance: SamplerConfig::default().tolerance,
        }
    }

    /// Create a path using a sampler configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a negative or non-finite tolerance.
    pub fn from_config(
        model: &'m M,
        actions: impl IntoIterator<IntoIter = I>,
        initial_state: M::State,
        config: &SamplerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let mut path = Self::new(model, actions, initial_state);
        path.tolerance = config.tolerance;
        if let Some(seed) = config.seed {
            path.reseed(seed);
        }
        Ok(path)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn set_rng(&mut self, rng: StdRng) {
        self.rng = rng;
    }

    pub fn rng(&self) -> &StdRng {
        &self.rng
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The state the path is currently in.
    pub fn state(&self) -> &M::State {
        &self.state
    }

    /// Whether another action remains.
    pub fn has_next(&mut self) -> bool {
        self.actions.peek().is_some()
    }

    /// Perform the next action and return the resulting state.
    ///
    /// # Errors
    ///
    /// `PathExhausted` when no action remains; `InvalidProbability`,
    /// `InconsistentDistribution` or `UnreachedThreshold` when the model's
    /// distribution is broken.
    pub fn advance(&mut self) -> Result<M::State> {
        let action = self.actions.next().ok_or(Error::PathExhausted)?;
        self.transition(&action)
    }

    fn transition(&mut self, action: &M::Action) -> Result<M::State> {
        let successors = self.model.successors_of(action, &self.state);

        let mut total = 0.0;
        for &(_, probability) in &successors {
            if !probability.is_finite() || !(0.0..=1.0 + self.tolerance).contains(&probability) {
                return Err(Error::InvalidProbability { probability });
            }
            total += probability;
        }
        if (total - 1.0).abs() > self.tolerance {
            return Err(Error::InconsistentDistribution {
                total,
                tolerance: self.tolerance,
            });
        }

        let draw: f64 = self.rng.random();
        let mut mass = 0.0;
        let mut last_positive = None;
        for (next, probability) in successors {
            if probability <= 0.0 {
                continue;
            }
            mass += probability;
            if mass >= draw {
                trace!(draw, mass, probability, "sampled transition");
                return Ok(self.move_to(next));
            }
            last_positive = Some(next);
        }
        // a total short of 1 but within tolerance leaves the top of [0, 1)
        // to the last destination carrying mass
        match last_positive {
            Some(next) => {
                trace!(draw, mass, "draw above accumulated mass");
                Ok(self.move_to(next))
            }
            None => Err(Error::UnreachedThreshold { draw, total: mass }),
        }
    }

    fn move_to(&mut self, next: M::State) -> M::State {
        self.state = next.clone();
        next
    }
}

impl<M, I> Iterator for TransitionPath<'_, M, I>
where
    M: TransitionModel,
    I: Iterator<Item = M::Action>,
{
    type Item = Result<M::State>;

    fn next(&mut self) -> Option<Self::Item> {
        let action = self.actions.next()?;
        Some(self.transition(&action))
    }
}
