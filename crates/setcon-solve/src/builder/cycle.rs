use std::collections::BTreeSet;

use setcon_graph::{EdgeLabel, IfGraph, NodeId};

/// Search for a chain of `target_label`-labelled edges from `id1` back to
/// `id2`, walking only predecessor links (`spec.md` §4.4.4).
///
/// Returns the set of node ids along the successful branch (including
/// `id1`) if one is found, or `None` if not — including when the search
/// is truncated by an exhausted `budget`, which must degrade to "no
/// chain" without affecting correctness (§7, §9).
pub(crate) fn check_chain(
    graph: &IfGraph,
    target_label: EdgeLabel,
    id1: NodeId,
    id2: NodeId,
    budget: Option<usize>,
) -> Option<Vec<NodeId>> {
    let mut visited = BTreeSet::new();
    let mut remaining = budget;
    let mut path = vec![id1];
    if dfs(graph, target_label, id1, id2, &mut visited, &mut remaining, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn dfs(
    graph: &IfGraph,
    target_label: EdgeLabel,
    current: NodeId,
    goal: NodeId,
    visited: &mut BTreeSet<NodeId>,
    budget: &mut Option<usize>,
    path: &mut Vec<NodeId>,
) -> bool {
    if current == goal {
        return true;
    }
    if !visited.insert(current) {
        return false;
    }
    if let Some(remaining) = budget {
        if *remaining == 0 {
            return false;
        }
        *remaining -= 1;
    }

    let predecessors = graph.fold_pred(current, Vec::new(), |mut acc, n, label| {
        if label == target_label {
            acc.push(n);
        }
        acc
    });

    for next in predecessors {
        path.push(next);
        if dfs(graph, target_label, next, goal, visited, budget, path) {
            return true;
        }
        path.pop();
    }
    false
}
