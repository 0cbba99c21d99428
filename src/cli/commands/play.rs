//! Play command - α-β move choice for a Tic-Tac-Toe position

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        config::CommonArgs,
        output::{print_json, print_kv, print_section},
    },
    config::AlphaBetaConfig,
    game::{AdversaryStats, AlphaBetaPruning},
    tictactoe::{BoardState, GameOutcome, GameRecord, TicTacToe},
};

#[derive(Parser, Debug)]
#[command(about = "Choose a Tic-Tac-Toe move with alpha-beta search")]
pub struct PlayArgs {
    /// Board such as "XO.X....." with an optional "_X"/"_O" turn suffix
    #[arg(long, default_value = ".........")]
    pub board: String,

    /// Half-turns to look ahead (defaults to the configuration value)
    #[arg(long, short = 'd')]
    pub max_depth: Option<i32>,

    /// Keep choosing moves for both sides until the game ends
    #[arg(long)]
    pub self_play: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
struct MoveReport {
    board: String,
    to_move: String,
    best_move: usize,
    value: f64,
    stats: AdversaryStats,
}

#[derive(Debug, Serialize)]
struct PlayReport {
    max_depth: i32,
    moves: Vec<MoveReport>,
    outcome: Option<GameOutcome>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.common.load_config()?;
    let alpha_beta = match args.max_depth {
        Some(max_depth) => AlphaBetaConfig::new(max_depth),
        None => config.alpha_beta,
    };
    alpha_beta.validate()?;

    let board = BoardState::from_string(&args.board)?;
    if board.legal_moves().is_empty() {
        bail!("position '{}' is already decided", board.encode());
    }

    let mut record = GameRecord::new(board);
    let mut moves = Vec::new();
    loop {
        let state = *record.current_state();
        let search = AlphaBetaPruning::from_config(
            &alpha_beta,
            TicTacToe::open_lines_for(state.to_move),
        )?;
        let (best, stats) = search.solve_with_stats(&TicTacToe, &state)?;
        let position = best.action().copied().unwrap_or_default();
        info!(board = %state.encode(), position, "move chosen");

        moves.push(MoveReport {
            board: state.encode(),
            to_move: state.to_move.to_string(),
            best_move: position,
            value: best.utility().unwrap_or_default(),
            stats,
        });
        record.play(position)?;

        if !args.self_play || record.is_over() {
            break;
        }
    }

    let report = PlayReport {
        max_depth: alpha_beta.max_depth,
        moves,
        outcome: record.outcome,
    };

    if args.common.json {
        return print_json(&report);
    }

    print_section(&format!("Alpha-beta, {} half-turn look-ahead", report.max_depth));
    for mv in &report.moves {
        println!();
        print_kv("Position", &mv.board);
        print_kv("To move", &mv.to_move);
        print_kv("Best move", &mv.best_move.to_string());
        print_kv("Value", &format!("{:.3}", mv.value));
        print_kv(
            "Work",
            &format!(
                "{} positions, {} evaluations, {} cut-offs",
                mv.stats.nodes_visited, mv.stats.evaluations, mv.stats.cutoffs
            ),
        );
    }
    println!("\n{}", record.current_state());
    match report.outcome {
        Some(GameOutcome::Win(player)) => print_kv("Outcome", &format!("{player} wins")),
        Some(GameOutcome::Draw) => print_kv("Outcome", "draw"),
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(board: &str, max_depth: i32, self_play: bool) -> PlayArgs {
        PlayArgs {
            board: board.to_string(),
            max_depth: Some(max_depth),
            self_play,
            common: CommonArgs {
                config: None,
                json: true,
            },
        }
    }

    #[test]
    fn finished_positions_are_rejected() {
        assert!(execute(args("XXXOO....", 4, false)).is_err());
        assert!(execute(args("XXX......", 4, false)).is_err());
        assert!(execute(args(".........", -2, false)).is_err());
    }

    #[test]
    fn self_play_runs_to_the_end() {
        execute(args("XO.......", 3, true)).unwrap();
    }
}
