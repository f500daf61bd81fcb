use super::*;
use crate::EdgeLabel::{Pred, Succ};

#[test]
fn insert_node_is_idempotent() {
    let mut g = IfGraph::empty();
    g.insert_node(0);
    g.insert_node(0);
    assert_eq!(g.node_count(), 1);
}

#[test]
fn edge_exists_true_regardless_of_label() {
    let mut g = IfGraph::empty();
    g.insert_node(0);
    g.insert_node(1);
    g.insert_edge(0, 1, Pred);
    assert!(g.edge_exists(0, 1));
    assert!(!g.edge_exists(1, 0));
}

#[test]
fn both_labels_can_coexist_on_one_ordered_pair() {
    let mut g = IfGraph::empty();
    g.insert_node(0);
    g.insert_node(1);
    g.insert_edge(0, 1, Pred);
    g.insert_edge(0, 1, Succ);
    assert!(g.edge_labelled(0, 1, Pred));
    assert!(g.edge_labelled(0, 1, Succ));
    assert_eq!(g.edge_count(), 2);
}

#[test]
#[should_panic(expected = "duplicate edge")]
fn duplicate_same_label_edge_panics() {
    let mut g = IfGraph::empty();
    g.insert_node(0);
    g.insert_node(1);
    g.insert_edge(0, 1, Pred);
    g.insert_edge(0, 1, Pred);
}

#[test]
#[should_panic(expected = "self-loops are forbidden")]
fn self_loop_panics() {
    let mut g = IfGraph::empty();
    g.insert_node(0);
    g.insert_edge(0, 0, Pred);
}

#[test]
fn remove_node_drops_incident_edges() {
    let mut g = IfGraph::empty();
    for id in 0..3 {
        g.insert_node(id);
    }
    g.insert_edge(0, 1, Pred);
    g.insert_edge(1, 2, Succ);
    g.remove_node(1);
    assert_eq!(g.node_count(), 2);
    assert!(!g.edge_exists(0, 1));
    assert!(!g.edge_exists(1, 2));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn fold_pred_and_fold_succ_see_the_right_side() {
    let mut g = IfGraph::empty();
    for id in 0..3 {
        g.insert_node(id);
    }
    g.insert_edge(0, 2, Pred);
    g.insert_edge(1, 2, Succ);

    let preds = g.fold_pred(2, Vec::new(), |mut acc, n, l| {
        acc.push((n, l));
        acc
    });
    assert_eq!(preds.len(), 2);
    assert!(preds.contains(&(0, Pred)));
    assert!(preds.contains(&(1, Succ)));

    let succs = g.fold_succ(0, Vec::new(), |mut acc, n, l| {
        acc.push((n, l));
        acc
    });
    assert_eq!(succs, vec![(2, Pred)]);
}

#[test]
fn freeze_copies_nodes_and_edges() {
    let mut g = IfGraph::empty();
    for id in 0..2 {
        g.insert_node(id);
    }
    g.insert_edge(0, 1, Pred);
    let frozen = g.freeze();
    assert_eq!(frozen.node_count(), 2);
    assert!(frozen.edge_exists(0, 1));
    assert_eq!(frozen.edges().len(), 1);
}
