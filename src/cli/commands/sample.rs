//! Sample command - Random walk through a three-state weather chain

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        config::CommonArgs,
        output::{or_dash, print_json, print_kv, print_section},
    },
    config::SamplerConfig,
    problems::MarkovTable,
    transition::TransitionPath,
};

const STATES: [&str; 3] = ["sunny", "cloudy", "rainy"];

#[derive(Parser, Debug)]
#[command(about = "Sample a path through a three-state Markov chain")]
pub struct SampleArgs {
    /// Random seed (defaults to the configuration value, then to entropy)
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Number of transitions to take
    #[arg(long, short = 'k', default_value_t = 10)]
    pub steps: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
struct SampleReport {
    seed: Option<u64>,
    path: Vec<&'static str>,
    visits: [usize; 3],
}

/// `day -> tomorrow` probabilities; each row sums to one.
pub fn weather() -> MarkovTable<usize, &'static str> {
    MarkovTable::new()
        .with_transition("day", 0, vec![(0, 0.5), (1, 0.3), (2, 0.2)])
        .with_transition("day", 1, vec![(0, 0.3), (1, 0.4), (2, 0.3)])
        .with_transition("day", 2, vec![(0, 0.2), (1, 0.3), (2, 0.5)])
}

pub fn execute(args: SampleArgs) -> Result<()> {
    let config = args.common.load_config()?;
    let sampler = SamplerConfig {
        seed: args.seed.or(config.sampler.seed),
        ..config.sampler
    };

    let model = weather();
    let path = TransitionPath::from_config(
        &model,
        std::iter::repeat_n("day", args.steps),
        0,
        &sampler,
    )?;
    let states = path.collect::<crate::Result<Vec<usize>>>()?;

    let mut visits = [0; 3];
    for &state in &states {
        visits[state] += 1;
    }
    let report = SampleReport {
        seed: sampler.seed,
        path: states.iter().map(|&s| STATES[s]).collect(),
        visits,
    };
    info!(steps = args.steps, seed = ?sampler.seed, "path sampled");

    if args.common.json {
        return print_json(&report);
    }

    print_section(&format!("{} days from {}", args.steps, STATES[0]));
    print_kv("Seed", &or_dash(report.seed));
    print_kv("Path", &report.path.join(" "));
    for (name, count) in STATES.iter().zip(report.visits) {
        print_kv(name, &count.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionModel;

    #[test]
    fn weather_rows_are_distributions() {
        let model = weather();
        for state in 0..3 {
            let total: f64 = model.successors_of(&"day", &state).iter().map(|(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn execute_samples_with_seed() {
        execute(SampleArgs {
            seed: Some(42),
            steps: 5,
            common: CommonArgs {
                config: None,
                json: true,
            },
        })
        .unwrap();
    }
}
