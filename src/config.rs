//! Configuration types for the search algorithms
//!
//! Every algorithm can be built directly from its constructor arguments.
//! These types add a builder-style, serializable form of the same
//! parameters so a harness can load them from a file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default tolerance for transition probabilities summing to one.
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-4;

/// Configuration for a bounding search.
///
/// # Examples
///
/// ```
/// use statespace::config::BoundingConfig;
///
/// let config = BoundingConfig::new().with_bound(5.0).with_continue_when_found(true);
/// assert_eq!(config.effective_bound(), 5.0);
/// assert!(BoundingConfig::new().effective_bound().is_infinite());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundingConfig {
    /// Nodes evaluating above this bound are pruned; `None` means unbounded
    pub bound: Option<f64>,
    /// Keep searching for cheaper solutions after the first one is found
    pub continue_when_found: bool,
}

impl BoundingConfig {
    pub fn new() -> Self {
        Self {
            bound: None,
            continue_when_found: false,
        }
    }

    pub fn with_bound(mut self, bound: f64) -> Self {
        self.bound = Some(bound);
        self
    }

    pub fn with_continue_when_found(mut self, continue_when_found: bool) -> Self {
        self.continue_when_found = continue_when_found;
        self
    }

    /// The bound as a number, positive infinity when unset.
    pub fn effective_bound(&self) -> f64 {
        self.bound.unwrap_or(f64::INFINITY)
    }

    /// Reject bounds that cannot be compared.
    pub fn validate(&self) -> Result<()> {
        match self.bound {
            Some(bound) if bound.is_nan() => Err(Error::InvalidBound { bound }),
            _ => Ok(()),
        }
    }
}

impl Default for BoundingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for iterative deepening.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeepeningConfig {
    /// Give up (report no solution) after the sweep with this depth bound
    pub max_bound: Option<usize>,
}

impl DeepeningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bound(mut self, max_bound: usize) -> Self {
        self.max_bound = Some(max_bound);
        self
    }
}

/// Configuration for alpha-beta adversary search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphaBetaConfig {
    /// Maximum number of half-turns to look ahead
    pub max_depth: i32,
}

impl AlphaBetaConfig {
    pub fn new(max_depth: i32) -> Self {
        Self { max_depth }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth < 0 {
            return Err(Error::InvalidMaxDepth {
                depth: self.max_depth,
            });
        }
        Ok(())
    }
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Configuration for transition path sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Allowed deviation of a distribution's total mass from one
    pub tolerance: f64,
}

impl SamplerConfig {
    pub fn new() -> Self {
        Self {
            seed: None,
            tolerance: DEFAULT_PROBABILITY_TOLERANCE,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "probability tolerance {} must be non-negative and finite",
                    self.tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for local optimizers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSearchConfig {
    /// Random seed for the order in which neighbours are proposed
    pub seed: Option<u64>,
}

impl LocalSearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// All algorithm configurations in one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub bounding: BoundingConfig,
    pub deepening: DeepeningConfig,
    pub alpha_beta: AlphaBetaConfig,
    pub sampler: SamplerConfig,
    pub local: LocalSearchConfig,
}

impl SearchConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read configuration {}", path.display()),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounding.validate()?;
        self.alpha_beta.validate()?;
        self.sampler.validate()
    }
}
