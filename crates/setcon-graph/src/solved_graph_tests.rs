use super::*;
use crate::EdgeLabel::Pred;

fn chain_graph() -> SolvedGraph {
    // 0 --Pred--> 1 --Pred--> 2
    SolvedGraph::from_edges(vec![0, 1, 2], vec![(0, 1, Pred), (1, 2, Pred)])
}

#[test]
fn dfs_predecessors_walks_backward_transitively() {
    let g = chain_graph();
    let mut visited = Vec::new();
    g.dfs_predecessors(2, |v| visited.push(v.node()));
    assert_eq!(visited, vec![2, 1, 0]);
}

#[test]
fn dfs_predecessors_visits_each_node_once() {
    // 0 --Pred--> 2, 1 --Pred--> 2, 0 --Pred--> 1 (diamond into 2)
    let g = SolvedGraph::from_edges(
        vec![0, 1, 2],
        vec![(0, 2, Pred), (1, 2, Pred), (0, 1, Pred)],
    );
    let mut visited = Vec::new();
    g.dfs_predecessors(2, |v| visited.push(v.node()));
    assert_eq!(visited.len(), 3);
    assert!(visited.contains(&0));
    assert!(visited.contains(&1));
    assert!(visited.contains(&2));
}

#[test]
fn visit_context_exposes_neighbourhoods() {
    let g = chain_graph();
    let mut seen_preds_of_1 = Vec::new();
    g.dfs_predecessors(2, |v| {
        if v.node() == 1 {
            seen_preds_of_1 = v.preds().collect();
        }
    });
    assert_eq!(seen_preds_of_1, vec![(0, Pred)]);
}

#[test]
fn no_predecessors_terminates_immediately() {
    let g = chain_graph();
    let mut visited = Vec::new();
    g.dfs_predecessors(0, |v| visited.push(v.node()));
    assert_eq!(visited, vec![0]);
}
