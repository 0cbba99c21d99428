//! Deepen command - Depth-bounded search over a chain of states

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        config::CommonArgs,
        output::{or_dash, print_json, print_kv, print_section},
    },
    config::BoundingConfig,
    problems::GraphProblem,
    search::{DepthFirstBoundingSearch, GeneralSearch, IterativeDeepening},
};

#[derive(Parser, Debug)]
#[command(about = "Search a chain 0 -> 1 -> ... -> N for its last state")]
pub struct DeepenArgs {
    /// Number of edges in the chain
    #[arg(long, short = 'n', default_value_t = 5)]
    pub length: usize,

    /// Run a single bounded depth-first search with this depth bound
    /// instead of iterative deepening
    #[arg(long, short = 'b')]
    pub bound: Option<usize>,

    /// Side edges back to the start, making the space cyclic
    #[arg(long)]
    pub cyclic: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
struct DeepenReport {
    algorithm: &'static str,
    length: usize,
    bound: Option<usize>,
    solution_depth: Option<usize>,
    solution_cost: Option<f64>,
    path: Vec<usize>,
    pruned: bool,
    expansions: usize,
}

pub fn execute(args: DeepenArgs) -> Result<()> {
    let config = args.common.load_config()?;
    let problem = chain(args.length, args.cyclic);

    let report = match args.bound {
        Some(bound) => {
            let bounding = BoundingConfig {
                bound: Some(bound as f64),
                ..config.bounding
            };
            let mut search = DepthFirstBoundingSearch::from_config(crate::Depth, bounding)?;
            let solution = search.solve(&problem)?;
            DeepenReport {
                algorithm: "bounded depth-first",
                length: args.length,
                bound: Some(bound),
                solution_depth: solution.as_ref().map(|n| n.depth()),
                solution_cost: solution.as_ref().map(|n| n.cost()),
                path: solution.map(|n| path_to(*n.state())).unwrap_or_default(),
                pruned: search.have_pruned(),
                expansions: search.expansions(),
            }
        }
        None => {
            let mut search = IterativeDeepening::from_config(config.deepening);
            let solution = search.solve(&problem)?;
            DeepenReport {
                algorithm: "iterative deepening",
                length: args.length,
                bound: search.last_bound(),
                solution_depth: solution.as_ref().map(|n| n.depth()),
                solution_cost: solution.as_ref().map(|n| n.cost()),
                path: solution.map(|n| path_to(*n.state())).unwrap_or_default(),
                pruned: search.have_pruned(),
                expansions: search.expansions(),
            }
        }
    };
    info!(
        algorithm = report.algorithm,
        found = report.solution_depth.is_some(),
        "search finished"
    );

    if args.common.json {
        return print_json(&report);
    }

    print_section(&format!("{} over a chain of {}", report.algorithm, report.length));
    print_kv("Bound", &or_dash(report.bound));
    print_kv("Solution depth", &or_dash(report.solution_depth));
    print_kv("Solution cost", &or_dash(report.solution_cost));
    if !report.path.is_empty() {
        let path: Vec<String> = report.path.iter().map(ToString::to_string).collect();
        print_kv("Path", &path.join(" -> "));
    }
    print_kv("Pruned", &report.pruned.to_string());
    print_kv("Expansions", &report.expansions.to_string());
    Ok(())
}

fn chain(length: usize, cyclic: bool) -> GraphProblem {
    let mut graph = GraphProblem::chain(length);
    if cyclic {
        for v in 1..length {
            graph.add_edge(v, 0, 1.0);
        }
    }
    graph
}

/// States along the only forward path to `state`.
fn path_to(state: usize) -> Vec<usize> {
    (0..=state).collect()
}
