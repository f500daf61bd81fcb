use indexmap::IndexMap;

use crate::{EdgeLabel, NodeId};

/// A mutable labelled multigraph over dense integer node ids (§4.3).
///
/// Adjacency is stored as one `IndexMap<NodeId, u8>` per node in each
/// direction, where the `u8` is a bitmask over the (at most two) edge
/// labels between a given ordered pair — this is what gives
/// `edge_exists` its O(1) lookup while still letting a single ordered
/// pair carry both a `Pred` and a `Succ` edge, which §3 permits ("no
/// duplicate `(src, dst, label)` triple", not "no duplicate `(src, dst)`
/// pair"). `IndexMap` (rather than a plain `HashMap`) keeps `fold_succ`/
/// `fold_pred` iteration order equal to insertion order, which is what
/// makes saturation's worklist order deterministic (§8, Determinism).
#[derive(Debug, Clone, Default)]
pub struct IfGraph {
    alive: Vec<bool>,
    out: Vec<IndexMap<NodeId, u8>>,
    inn: Vec<IndexMap<NodeId, u8>>,
}

impl IfGraph {
    pub fn empty() -> Self {
        IfGraph::default()
    }

    fn ensure_capacity(&mut self, id: NodeId) {
        if id >= self.alive.len() {
            self.alive.resize(id + 1, false);
            self.out.resize_with(id + 1, IndexMap::new);
            self.inn.resize_with(id + 1, IndexMap::new);
        }
    }

    /// Insert a node. Idempotent.
    pub fn insert_node(&mut self, id: NodeId) {
        self.ensure_capacity(id);
        self.alive[id] = true;
    }

    fn assert_alive(&self, id: NodeId) {
        assert!(
            id < self.alive.len() && self.alive[id],
            "node {id} is not present in the graph"
        );
    }

    /// Insert an edge `src --label--> dst`. The caller guarantees no
    /// duplicate `(src, dst, label)` triple and no self-loop; both are
    /// asserted here (§3, §7: invariant violations abort).
    pub fn insert_edge(&mut self, src: NodeId, dst: NodeId, label: EdgeLabel) {
        assert_ne!(src, dst, "self-loops are forbidden");
        self.assert_alive(src);
        self.assert_alive(dst);

        let bit = label.bit();
        let out_mask = self.out[src].entry(dst).or_insert(0);
        assert_eq!(
            *out_mask & bit,
            0,
            "duplicate edge ({src}, {dst}, {label:?})"
        );
        *out_mask |= bit;

        let in_mask = self.inn[dst].entry(src).or_insert(0);
        *in_mask |= bit;
    }

    /// True if any labelled edge exists from `src` to `dst`.
    pub fn edge_exists(&self, src: NodeId, dst: NodeId) -> bool {
        src < self.out.len() && self.out[src].contains_key(&dst)
    }

    /// True if the specific `(src, dst, label)` edge exists.
    pub fn edge_labelled(&self, src: NodeId, dst: NodeId, label: EdgeLabel) -> bool {
        src < self.out.len()
            && self
                .out[src]
                .get(&dst)
                .is_some_and(|mask| mask & label.bit() != 0)
    }

    /// Remove a node and all edges incident to it.
    pub fn remove_node(&mut self, id: NodeId) {
        self.assert_alive(id);
        let outgoing: Vec<NodeId> = self.out[id].keys().copied().collect();
        for dst in outgoing {
            self.inn[dst].shift_remove(&id);
        }
        let incoming: Vec<NodeId> = self.inn[id].keys().copied().collect();
        for src in incoming {
            self.out[src].shift_remove(&id);
        }
        self.out[id].clear();
        self.inn[id].clear();
        self.alive[id] = false;
    }

    /// Fold over `(neighbour, label)` pairs for edges *into* `id`.
    pub fn fold_pred<A>(&self, id: NodeId, init: A, mut f: impl FnMut(A, NodeId, EdgeLabel) -> A) -> A {
        let mut acc = init;
        if id >= self.inn.len() {
            return acc;
        }
        for (&src, &mask) in &self.inn[id] {
            if mask & EdgeLabel::Pred.bit() != 0 {
                acc = f(acc, src, EdgeLabel::Pred);
            }
            if mask & EdgeLabel::Succ.bit() != 0 {
                acc = f(acc, src, EdgeLabel::Succ);
            }
        }
        acc
    }

    /// Fold over `(neighbour, label)` pairs for edges *out of* `id`.
    pub fn fold_succ<A>(&self, id: NodeId, init: A, mut f: impl FnMut(A, NodeId, EdgeLabel) -> A) -> A {
        let mut acc = init;
        if id >= self.out.len() {
            return acc;
        }
        for (&dst, &mask) in &self.out[id] {
            if mask & EdgeLabel::Pred.bit() != 0 {
                acc = f(acc, dst, EdgeLabel::Pred);
            }
            if mask & EdgeLabel::Succ.bit() != 0 {
                acc = f(acc, dst, EdgeLabel::Succ);
            }
        }
        acc
    }

    /// Snapshot of the currently-alive node ids, in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        (0..self.alive.len()).filter(|&id| self.alive[id]).collect()
    }

    /// Snapshot of `(src, dst, label)` for every edge currently present.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, EdgeLabel)> {
        let mut out = Vec::new();
        for src in self.nodes() {
            for (&dst, &mask) in &self.out[src] {
                if mask & EdgeLabel::Pred.bit() != 0 {
                    out.push((src, dst, EdgeLabel::Pred));
                }
                if mask & EdgeLabel::Succ.bit() != 0 {
                    out.push((src, dst, EdgeLabel::Succ));
                }
            }
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn is_alive(&self, id: NodeId) -> bool {
        id < self.alive.len() && self.alive[id]
    }

    /// Copy nodes and edges into a frozen, read-only snapshot graph
    /// (§4.5: "the graph's nodes and labelled edges are copied into a
    /// frozen labelled-graph container").
    pub fn freeze(&self) -> crate::SolvedGraph {
        crate::SolvedGraph::from_edges(self.nodes(), self.edges())
    }
}
