use indexmap::IndexMap;
use std::collections::HashSet;

use crate::{EdgeLabel, NodeId};

/// An immutable, frozen snapshot of an [`IfGraph`](crate::IfGraph) (§4.5).
///
/// Freely shareable across threads for read-only queries once built (§5):
/// nothing here takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct SolvedGraph {
    nodes: Vec<NodeId>,
    out: IndexMap<NodeId, Vec<(NodeId, EdgeLabel)>>,
    inn: IndexMap<NodeId, Vec<(NodeId, EdgeLabel)>>,
}

impl SolvedGraph {
    pub fn from_edges(nodes: Vec<NodeId>, edges: Vec<(NodeId, NodeId, EdgeLabel)>) -> Self {
        let mut out: IndexMap<NodeId, Vec<(NodeId, EdgeLabel)>> = IndexMap::new();
        let mut inn: IndexMap<NodeId, Vec<(NodeId, EdgeLabel)>> = IndexMap::new();
        for &id in &nodes {
            out.entry(id).or_default();
            inn.entry(id).or_default();
        }
        for (src, dst, label) in edges {
            out.entry(src).or_default().push((dst, label));
            inn.entry(dst).or_default().push((src, label));
        }
        SolvedGraph { nodes, out, inn }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> Vec<(NodeId, NodeId, EdgeLabel)> {
        self.out
            .iter()
            .flat_map(|(&src, dsts)| dsts.iter().map(move |&(dst, label)| (src, dst, label)))
            .collect()
    }

    pub fn preds(&self, id: NodeId) -> &[(NodeId, EdgeLabel)] {
        self.inn.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn succs(&self, id: NodeId) -> &[(NodeId, EdgeLabel)] {
        self.out.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_exists(&self, src: NodeId, dst: NodeId) -> bool {
        self.succs(src).iter().any(|&(d, _)| d == dst)
    }

    /// Context-based DFS walk following predecessor edges from `start`,
    /// visiting each node at most once (§4.5 `least_solution`).
    ///
    /// `visit` is called once per newly-visited node with a [`Visit`]
    /// giving access to that node's predecessor and successor
    /// neighbourhoods, per the "context-based DFS walks" collaborator
    /// interface in `spec.md` §6.
    pub fn dfs_predecessors(&self, start: NodeId, mut visit: impl FnMut(Visit<'_>)) {
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            visit(Visit { graph: self, node });
            for &(pred, _) in self.preds(node) {
                if !visited.contains(&pred) {
                    stack.push(pred);
                }
            }
        }
    }
}

/// The context handed to a [`SolvedGraph::dfs_predecessors`] callback:
/// the node just visited plus its predecessor/successor neighbourhoods.
pub struct Visit<'g> {
    graph: &'g SolvedGraph,
    node: NodeId,
}

impl<'g> Visit<'g> {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn preds(&self) -> impl Iterator<Item = (NodeId, EdgeLabel)> + 'g {
        self.graph.preds(self.node).iter().copied()
    }

    pub fn succs(&self) -> impl Iterator<Item = (NodeId, EdgeLabel)> + 'g {
        self.graph.succs(self.node).iter().copied()
    }
}
