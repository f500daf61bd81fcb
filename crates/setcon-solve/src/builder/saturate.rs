use std::collections::BTreeSet;

use setcon_expr::{ConstraintSystem, Inclusion};
use setcon_graph::{EdgeLabel, NodeId};

use super::{Affected, Builder};
use crate::error::ConstraintError;
use crate::simplify::simplify;

/// §4.4.7: transitive-closure saturation to fixed point.
///
/// Seeds the worklist from every `Pred` edge in the initial graph, then
/// repeatedly composes `Pred`-segments with their `Succ` neighbours into
/// candidate inclusions, simplifies them, and re-inserts whatever
/// survives — with cycle detection enabled, so saturation and collapse
/// interleave — until a round produces nothing new.
pub(crate) fn saturate<V, C>(builder: &mut Builder<V, C>) -> Result<(), ConstraintError<V, C>>
where
    V: Ord + Clone,
    C: Ord + Clone,
{
    let mut worklist: Affected = builder
        .graph
        .edges()
        .into_iter()
        .filter(|&(_, _, label)| label == EdgeLabel::Pred)
        .map(|(src, dst, _)| (src, dst))
        .collect();

    loop {
        if worklist.is_empty() {
            return Ok(());
        }

        let mut candidates: BTreeSet<(NodeId, NodeId)> = BTreeSet::new();
        for &(l, x) in &worklist {
            let succs = builder.graph.fold_succ(x, Vec::new(), |mut acc, r, label| {
                if label == EdgeLabel::Succ {
                    acc.push(r);
                }
                acc
            });
            for r in succs {
                if !builder.graph.edge_exists(l, r) {
                    candidates.insert((l, r));
                }
            }
        }

        if candidates.is_empty() {
            return Ok(());
        }

        let pending: Vec<Inclusion<V, C>> = candidates
            .iter()
            .map(|&(l, r)| Inclusion::new(builder.expr(l).clone(), builder.expr(r).clone()))
            .collect();

        let atomic = simplify(ConstraintSystem::new(pending))?;

        if atomic.is_empty() {
            return Ok(());
        }

        let mut next_affected = Affected::new();
        for incl in &atomic {
            builder.add_inclusion(true, &mut next_affected, incl);
        }
        worklist = next_affected;
    }
}
