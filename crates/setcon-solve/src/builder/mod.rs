//! The Builder: owns the id-assignment map, the id table, the mutable IF
//! graph, and drives online cycle collapse and saturation (`spec.md`
//! §4.4 — "heart of the core").

mod cycle;
mod saturate;

#[cfg(test)]
mod builder_tests;

use std::collections::{BTreeMap, BTreeSet};

use setcon_expr::{Inclusion, SetExpression};
use setcon_graph::{EdgeLabel, IfGraph, NodeId};

use crate::options::SolveOptions;

/// A `(src, dst)` pair whose downstream `Succ` neighbours may produce new
/// inclusions once saturation next runs (§4.4.6, §9).
pub(crate) type Affected = BTreeSet<(NodeId, NodeId)>;

/// The stateful core of the solver (§4.4). Exposed as `pub` (see
/// `SPEC_FULL.md` §C.4) so advanced callers can drive insertion and
/// saturation as separate steps instead of only through
/// [`crate::solve_system`].
pub struct Builder<V, C> {
    expr_to_id: BTreeMap<SetExpression<V, C>, NodeId>,
    id_to_expr: Vec<SetExpression<V, C>>,
    graph: IfGraph,
    options: SolveOptions,
}

impl<V, C> Builder<V, C>
where
    V: Ord + Clone,
    C: Ord + Clone,
{
    pub fn new(options: SolveOptions) -> Self {
        Builder {
            expr_to_id: BTreeMap::new(),
            id_to_expr: Vec::new(),
            graph: IfGraph::empty(),
            options,
        }
    }

    pub fn graph(&self) -> &IfGraph {
        &self.graph
    }

    pub fn expr(&self, id: NodeId) -> &SetExpression<V, C> {
        &self.id_to_expr[id]
    }

    pub fn id_to_expr(&self) -> &[SetExpression<V, C>] {
        &self.id_to_expr
    }

    pub fn lookup(&self, e: &SetExpression<V, C>) -> Option<NodeId> {
        self.expr_to_id.get(e).copied()
    }

    /// The full expression→id map, including entries rebound to a
    /// representative by cycle collapse (§4.4.5). [`Builder::id_to_expr`]
    /// alone is not enough to reconstruct this: several ids in that table
    /// may have been collapsed away and no longer resolve to themselves.
    pub fn expr_to_id(&self) -> &BTreeMap<SetExpression<V, C>, NodeId> {
        &self.expr_to_id
    }

    /// §4.4.1: return `e`'s id, allocating a fresh one (and registering
    /// the node in the graph) on first sight.
    pub(crate) fn get_eid(&mut self, e: &SetExpression<V, C>) -> NodeId {
        if let Some(&id) = self.expr_to_id.get(e) {
            return id;
        }
        let id = self.id_to_expr.len();
        self.id_to_expr.push(e.clone());
        self.graph.insert_node(id);
        self.expr_to_id.insert(e.clone(), id);
        id
    }

    /// §4.4.2: dispatch an atomic inclusion to the right labelled edge.
    pub(crate) fn add_inclusion(
        &mut self,
        remove_cycles: bool,
        affected: &mut Affected,
        i: &Inclusion<V, C>,
    ) {
        match (&i.lhs, &i.rhs) {
            (SetExpression::SetVariable(v1), SetExpression::SetVariable(v2)) => {
                assert!(
                    v1 != v2,
                    "invariant violation: `A ⊆ A` reached the edge inserter"
                );
                let label = if v1 < v2 {
                    EdgeLabel::Pred
                } else {
                    EdgeLabel::Succ
                };
                self.add_edge(remove_cycles, affected, label, &i.lhs, &i.rhs);
            }
            (SetExpression::ConstructedTerm { .. }, SetExpression::SetVariable(_)) => {
                self.add_edge(remove_cycles, affected, EdgeLabel::Pred, &i.lhs, &i.rhs);
            }
            (SetExpression::SetVariable(_), SetExpression::ConstructedTerm { .. }) => {
                self.add_edge(remove_cycles, affected, EdgeLabel::Succ, &i.lhs, &i.rhs);
            }
            _ => panic!(
                "invariant violation: ill-formed atomic inclusion reached the builder \
                 (expected Var⊆Var, Term⊆Var, or Var⊆Term)"
            ),
        }
    }

    /// §4.4.3.
    fn add_edge(
        &mut self,
        remove_cycles: bool,
        affected: &mut Affected,
        label: EdgeLabel,
        e1: &SetExpression<V, C>,
        e2: &SetExpression<V, C>,
    ) {
        let id1 = self.get_eid(e1);
        let id2 = self.get_eid(e2);

        if id1 == id2 || self.graph.edge_exists(id1, id2) {
            return;
        }

        if remove_cycles {
            let budget = self.options.cycle_budget;
            if let Some(chain) = cycle::check_chain(&self.graph, label.opposite(), id1, id2, budget)
            {
                self.collapse(chain, affected);
                return;
            }
        }

        self.simple_add_edge(label, id1, id2, affected);
    }

    /// §4.4.6.
    fn simple_add_edge(
        &mut self,
        label: EdgeLabel,
        id1: NodeId,
        id2: NodeId,
        affected: &mut Affected,
    ) {
        self.graph.insert_edge(id1, id2, label);
        match label {
            EdgeLabel::Pred => {
                affected.insert((id1, id2));
            }
            EdgeLabel::Succ => {
                let preds = self.graph.fold_pred(id1, Vec::new(), |mut acc, p, l| {
                    if l == EdgeLabel::Pred {
                        acc.push(p);
                    }
                    acc
                });
                for p in preds {
                    affected.insert((p, id1));
                }
            }
        }
    }

    /// §4.4.5: collapse a chain of ids known to be equivalent into a
    /// single representative, rewriting the collapsed neighbourhood back
    /// into inclusions re-inserted with cycle detection disabled.
    fn collapse(&mut self, chain: Vec<NodeId>, affected: &mut Affected) {
        let rep = *chain.iter().min().expect("chain is non-empty");
        let chain_set: BTreeSet<NodeId> = chain.iter().copied().collect();
        let rest: Vec<NodeId> = chain_set.iter().copied().filter(|&id| id != rep).collect();

        let mut emitted = Vec::new();
        for &r in &rest {
            let preds: BTreeSet<NodeId> =
                self.graph
                    .fold_pred(r, BTreeSet::new(), |mut acc, s, _| {
                        acc.insert(s);
                        acc
                    });
            for s in preds {
                if !chain_set.contains(&s) {
                    emitted.push(Inclusion::new(self.id_to_expr[s].clone(), self.id_to_expr[rep].clone()));
                }
            }
            let succs: BTreeSet<NodeId> =
                self.graph
                    .fold_succ(r, BTreeSet::new(), |mut acc, d, _| {
                        acc.insert(d);
                        acc
                    });
            for d in succs {
                if !chain_set.contains(&d) {
                    emitted.push(Inclusion::new(self.id_to_expr[rep].clone(), self.id_to_expr[d].clone()));
                }
            }
        }

        for &r in &rest {
            self.graph.remove_node(r);
        }

        // Rebind every `expr_to_id` entry currently resolving to a dying
        // id, not just the one originally allocated to it: an earlier
        // collapse may have already pointed some other expression's entry
        // at `r` (e.g. `r` was itself a previous collapse's
        // representative), and that entry must be redirected to `rep` too
        // or it goes on resolving to a node `remove_node` just deleted.
        // Same collect-then-redirect shape as a predecessor-map-driven
        // node redirect: gather every key whose value lands in `rest`,
        // then rewrite it to `rep`.
        let rest_set: BTreeSet<NodeId> = rest.iter().copied().collect();
        let stale: Vec<SetExpression<V, C>> = self
            .expr_to_id
            .iter()
            .filter(|(_, id)| rest_set.contains(id))
            .map(|(expr, _)| expr.clone())
            .collect();
        for expr in stale {
            self.expr_to_id.insert(expr, rep);
        }

        for incl in &emitted {
            self.add_inclusion(false, affected, incl);
        }
    }

    /// Insert every atomic inclusion from a simplified system into the
    /// graph, collapsing cycles as it goes if `options.remove_cycles` is
    /// set (§4.4.2–§4.4.6). Does not saturate; call [`Builder::saturate`]
    /// afterwards to drive the graph to a fixed point (§4.4.7).
    pub fn insert_all(&mut self, inclusions: &[Inclusion<V, C>]) {
        let mut scratch = Affected::new();
        for i in inclusions {
            self.add_inclusion(self.options.remove_cycles, &mut scratch, i);
        }
    }

    /// §4.4.7: saturate the graph to a fixed point.
    pub fn saturate(&mut self) -> Result<(), crate::error::ConstraintError<V, C>> {
        saturate::saturate(self)
    }

    pub fn into_graph(self) -> IfGraph {
        self.graph
    }
}
