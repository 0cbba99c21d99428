mod common;

use common::{ExplicitTree, minimax, minimax_decision};
use proptest::prelude::*;
use statespace::{
    AlphaBetaPruning,
    tictactoe::{BoardState, Player, TicTacToe},
};

#[test]
fn empty_board_is_a_draw_with_perfect_play() {
    let utility = TicTacToe::outcome_for(Player::X);
    let board = BoardState::new();

    let search = AlphaBetaPruning::new(9, utility.clone()).unwrap();
    let (best, stats) = search.solve_with_stats(&TicTacToe, &board).unwrap();
    let (reference_move, reference_value) = minimax_decision(&TicTacToe, &board, 9, &utility);

    assert_eq!(best.utility(), Some(0.0));
    assert_eq!(reference_value, 0.0);
    assert_eq!(best.action(), Some(&reference_move));

    // the full tree has 549,946 positions; pruning must skip most of them
    assert!(stats.nodes_visited < 100_000, "visited {}", stats.nodes_visited);
}

#[test]
fn takes_an_immediate_win_and_blocks_a_threat() {
    let search = AlphaBetaPruning::new(9, TicTacToe::outcome_for(Player::X)).unwrap();
    let win = BoardState::from_string("XX.OO....").unwrap();
    let best = search.solve(&TicTacToe, &win).unwrap();
    assert_eq!(best.action(), Some(&2));
    assert_eq!(best.utility(), Some(1.0));

    // O to move must block the top row
    let search = AlphaBetaPruning::new(9, TicTacToe::outcome_for(Player::O)).unwrap();
    let threat = BoardState::from_string("XX..O....").unwrap();
    let best = search.solve(&TicTacToe, &threat).unwrap();
    assert_eq!(best.action(), Some(&2));
    assert_eq!(best.utility(), Some(0.0));
}

#[test]
fn shallow_look_ahead_matches_shallow_minimax() {
    let utility = TicTacToe::open_lines_for(Player::O);
    let board = BoardState::from_string("X........").unwrap();
    for max_depth in 0..=3 {
        let search = AlphaBetaPruning::new(max_depth, utility.clone()).unwrap();
        let best = search.solve(&TicTacToe, &board).unwrap();
        let (action, value) = minimax_decision(&TicTacToe, &board, max_depth as usize, &utility);
        assert_eq!(best.action(), Some(&action), "max_depth {max_depth}");
        assert_eq!(best.utility(), Some(value), "max_depth {max_depth}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn pruning_never_changes_the_decision(
        seed in any::<u64>(),
        depth in 1usize..6,
        branching in 1usize..4,
        max_depth in 0i32..7,
    ) {
        let tree = ExplicitTree::random(seed, depth, branching);
        let utility = |s: &usize| tree.value(*s);

        let search = AlphaBetaPruning::new(max_depth, utility).unwrap();
        let (best, stats) = search.solve_with_stats(&tree, &0).unwrap();
        let (action, value) = minimax_decision(&tree, &0, max_depth as usize, &utility);

        prop_assert_eq!(best.utility(), Some(value));
        prop_assert_eq!(best.action(), Some(&action));
        prop_assert_eq!(minimax(&tree, &0, 0, max_depth as usize, &utility), value);
        prop_assert!(stats.evaluations <= tree.values.len());
    }
}
