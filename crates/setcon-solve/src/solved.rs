use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use setcon_expr::{ConstraintSystem, SetExpression};
use setcon_graph::{EdgeLabel, NodeId, SolvedGraph};

use crate::builder::Builder;
use crate::error::ConstraintError;
use crate::options::SolveOptions;
use crate::simplify::simplify;

/// A frozen, read-only solved constraint system (§4.5).
///
/// Produced once by [`solve_system`] / [`solve_system_with_options`] and
/// freely queryable afterwards via [`least_solution`] — nothing here takes
/// `&mut self`, so a `SolvedSystem` is shareable across threads (§5).
pub struct SolvedSystem<V, C> {
    graph: SolvedGraph,
    expr_to_id: BTreeMap<SetExpression<V, C>, NodeId>,
    id_to_expr: Vec<SetExpression<V, C>>,
}

impl<V, C> SolvedSystem<V, C>
where
    V: Ord + Clone,
    C: Ord + Clone,
{
    pub fn graph(&self) -> &SolvedGraph {
        &self.graph
    }

    pub fn id_of(&self, v: &V) -> Option<NodeId> {
        self.expr_to_id.get(&SetExpression::SetVariable(v.clone())).copied()
    }

    pub fn expr(&self, id: NodeId) -> &SetExpression<V, C> {
        &self.id_to_expr[id]
    }
}

/// Solve `system` with [`SolveOptions::default`] (§4.1, §6).
pub fn solve_system<V, C>(
    system: ConstraintSystem<V, C>,
) -> Result<SolvedSystem<V, C>, ConstraintError<V, C>>
where
    V: Ord + Clone,
    C: Ord + Clone,
{
    solve_system_with_options(system, SolveOptions::default())
}

/// Solve `system`, tuning online cycle detection via `options` (§9).
///
/// The pipeline is: simplify the input system into atomic inclusions
/// (§4.2), feed them to a fresh [`Builder`] (§4.4), saturate to a fixed
/// point (§4.4.7), then freeze the result (§4.5).
pub fn solve_system_with_options<V, C>(
    system: ConstraintSystem<V, C>,
    options: SolveOptions,
) -> Result<SolvedSystem<V, C>, ConstraintError<V, C>>
where
    V: Ord + Clone,
    C: Ord + Clone,
{
    let atomic = simplify(system)?;

    let mut builder = Builder::new(options);
    builder.insert_all(&atomic);
    builder.saturate()?;

    // Must come from the Builder's own map, not be rebuilt from
    // `id_to_expr` by position: cycle collapse (§4.4.5) rebinds a
    // collapsed expression's entry to its representative's id, which
    // differs from the id it was originally allocated (and which
    // `id_to_expr` still records at that original position).
    let expr_to_id = builder.expr_to_id().clone();
    let id_to_expr = builder.id_to_expr().to_vec();
    let graph = builder.into_graph().freeze();

    Ok(SolvedSystem {
        graph,
        expr_to_id,
        id_to_expr,
    })
}

/// The least solution for `v`: every constructed term reachable by
/// walking backward through `Pred` edges from `v`'s node (§4.5).
///
/// Returned in a deterministic (structurally sorted) order regardless of
/// the DFS's branching order (§8, Determinism).
pub fn least_solution<V, C>(
    solved: &SolvedSystem<V, C>,
    v: V,
) -> Result<Vec<SetExpression<V, C>>, ConstraintError<V, C>>
where
    V: Ord + Clone,
    C: Ord + Clone,
{
    let Some(start) = solved.id_of(&v) else {
        return Err(ConstraintError::NoVariableLabel(v));
    };

    let mut terms: BTreeSet<SetExpression<V, C>> = BTreeSet::new();
    solved.graph.dfs_predecessors(start, |visit| {
        let expr = solved.expr(visit.node());
        if matches!(expr, SetExpression::ConstructedTerm { .. }) {
            terms.insert(expr.clone());
        }
    });

    Ok(terms.into_iter().collect())
}

/// Debug accessor exposing every `(id, expr)` and `(src, dst, label)` in a
/// solved system's graph, for inspection and snapshot tests.
pub fn solved_system_graph_elems<V, C>(
    solved: &SolvedSystem<V, C>,
) -> (Vec<(NodeId, SetExpression<V, C>)>, Vec<(NodeId, NodeId, EdgeLabel)>)
where
    V: Clone,
    C: Clone,
{
    let nodes = solved
        .graph
        .nodes()
        .iter()
        .map(|&id| (id, solved.id_to_expr[id].clone()))
        .collect();
    let edges = solved.graph.edges();
    (nodes, edges)
}

/// Render a solved system's inclusion edges as one `lhs ⊆ rhs` line per
/// edge, sorted for deterministic output. A convenience for debugging and
/// documentation examples, not a stable machine-readable format.
pub fn render<V, C>(solved: &SolvedSystem<V, C>) -> String
where
    V: Clone + fmt::Display,
    C: Clone + fmt::Display,
{
    let mut lines: Vec<String> = solved
        .graph
        .edges()
        .into_iter()
        .map(|(src, dst, label)| {
            let lhs = &solved.id_to_expr[src];
            let rhs = &solved.id_to_expr[dst];
            format!("{lhs} \u{2286} {rhs}  ({label})")
        })
        .collect();
    lines.sort();
    lines.join("\n")
}
