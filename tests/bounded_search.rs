use std::collections::VecDeque;

use proptest::prelude::*;
use statespace::{
    BranchAndBound, BreadthFirstSearch, DepthFirstBoundingSearch, DepthFirstSearch, GeneralSearch,
    Node, PathCost, problems::GraphProblem,
};

/// Smallest number of edges from the start to a goal, by breadth-first
/// enumeration of the graph.
fn shortest_goal_depth(graph: &GraphProblem, vertices: usize) -> Option<usize> {
    let mut depth = vec![None; vertices];
    let mut queue = VecDeque::from([graph.start()]);
    depth[graph.start()] = Some(0);
    while let Some(v) = queue.pop_front() {
        let d = depth[v]?;
        if graph.goals().contains(&v) {
            return Some(d);
        }
        for &(to, _) in graph.edges_from(v) {
            if depth[to].is_none() {
                depth[to] = Some(d + 1);
                queue.push_back(to);
            }
        }
    }
    None
}

#[test]
fn linear_chain_needs_a_bound_of_five() {
    let chain = GraphProblem::chain(5);

    let mut short = DepthFirstBoundingSearch::with_depth_bound(4);
    assert!(short.solve(&chain).unwrap().is_none());

    let mut exact = DepthFirstBoundingSearch::with_depth_bound(5);
    let goal = exact.solve(&chain).unwrap().expect("goal within bound 5");
    assert_eq!(*goal.state(), 5);
    assert_eq!(goal.cost(), 5.0);
}

#[test]
fn cyclic_graph_terminates_by_exhausting_the_bound() {
    // 0 <-> 1 <-> 2 <-> 0, goal never reachable
    let cycle = GraphProblem::new(0, [99])
        .with_edge(0, 1, 1.0)
        .with_edge(1, 0, 1.0)
        .with_edge(1, 2, 1.0)
        .with_edge(2, 1, 1.0)
        .with_edge(2, 0, 1.0)
        .with_edge(0, 2, 1.0);

    let mut search = DepthFirstBoundingSearch::with_depth_bound(3);
    assert!(search.solve(&cycle).unwrap().is_none());
    assert!(search.have_pruned());
    // two choices per vertex: every path of length <= 3 gets expanded
    assert_eq!(search.expansions(), 1 + 2 + 4 + 8);

    let reachable = cycle.clone().with_edge(2, 99, 1.0);
    let goal = search.solve(&reachable).unwrap().unwrap();
    assert_eq!(*goal.state(), 99);
    assert!(goal.depth() <= 3);
}

#[test]
fn uninformed_orders_differ_in_which_solution_they_meet() {
    // 0 -> 1 -> 2 -> 3 (goal) is met first depth-first, 0 -> 3 first breadth-first.
    let graph = GraphProblem::new(0, [3])
        .with_edge(0, 1, 1.0)
        .with_edge(0, 3, 10.0)
        .with_edge(1, 2, 1.0)
        .with_edge(2, 3, 1.0);

    let deep = DepthFirstSearch.solve(&graph).unwrap().unwrap();
    assert_eq!(deep.depth(), 3);
    assert!(!GeneralSearch::<GraphProblem>::is_optimal(&DepthFirstSearch));

    let shallow = BreadthFirstSearch.solve(&graph).unwrap().unwrap();
    assert_eq!(shallow.depth(), 1);
    assert!(GeneralSearch::<GraphProblem>::is_optimal(&BreadthFirstSearch));

    let cheapest = BranchAndBound::new(|_: &Node<usize, usize>| 0.0, 100.0)
        .unwrap()
        .solve(&graph)
        .unwrap()
        .unwrap();
    assert_eq!(cheapest.cost(), 3.0);
}

#[test]
fn cost_bound_prunes_expensive_edges() {
    let graph = GraphProblem::new(0, [2])
        .with_edge(0, 2, 7.0)
        .with_edge(0, 1, 2.0)
        .with_edge(1, 2, 2.0);

    let mut search = DepthFirstBoundingSearch::new(PathCost, 5.0).unwrap();
    let goal = search.solve(&graph).unwrap().unwrap();
    assert_eq!(goal.cost(), 4.0);
    assert!(search.have_pruned());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bounded_search_respects_the_bound_on_dags(
        edges in prop::collection::vec((0usize..8, 0usize..8), 0..24),
        goal in 0usize..8,
        bound in 0usize..6,
    ) {
        let mut graph = GraphProblem::new(0, [goal]);
        for (from, to) in edges {
            if from < to {
                graph.add_edge(from, to, 1.0);
            }
        }

        let mut search = DepthFirstBoundingSearch::with_depth_bound(bound);
        let found = search.solve(&graph).unwrap();
        let shortest = shortest_goal_depth(&graph, 8);

        match found {
            Some(node) => {
                prop_assert!(node.depth() <= bound);
                prop_assert_eq!(*node.state(), goal);
            }
            None => prop_assert!(shortest.is_none_or(|d| d > bound)),
        }
    }
}
