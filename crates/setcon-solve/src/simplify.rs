use setcon_expr::{ConstraintSystem, Inclusion, SetExpression, Variance, compatible_terms};

use crate::error::ConstraintError;

/// Rewrite a [`ConstraintSystem`] into atomic inclusions (`spec.md` §4.2).
///
/// Applies the rewrite table until every surviving inclusion is atomic,
/// accumulating results. The rules are tried in the order given in §4.2 —
/// first match wins — and the traversal order over the input system is a
/// plain left-to-right pass: §4.2 states order is "immaterial to
/// correctness" as long as it is deterministic, and left-to-right is the
/// simplest deterministic choice.
pub fn simplify<V, C>(
    system: ConstraintSystem<V, C>,
) -> Result<Vec<Inclusion<V, C>>, ConstraintError<V, C>>
where
    V: Clone + PartialEq,
    C: Clone + PartialEq,
{
    let mut out = Vec::new();
    for inclusion in system {
        simplify_one(inclusion, &mut out)?;
    }
    Ok(out)
}

fn simplify_one<V, C>(
    inclusion: Inclusion<V, C>,
    out: &mut Vec<Inclusion<V, C>>,
) -> Result<(), ConstraintError<V, C>>
where
    V: Clone + PartialEq,
    C: Clone + PartialEq,
{
    use SetExpression::*;

    // `Var v ⊆ Var v` / `Var v1 ⊆ Var v2`.
    if let (SetVariable(v1), SetVariable(v2)) = (&inclusion.lhs, &inclusion.rhs) {
        if v1 == v2 {
            return Ok(());
        }
        out.push(inclusion);
        return Ok(());
    }

    // `U ⊆ ∅`.
    if matches!(inclusion.lhs, UniversalSet) && matches!(inclusion.rhs, EmptySet) {
        return Err(ConstraintError::NoSolution(inclusion));
    }

    // `U ⊆ Term …`.
    if matches!(inclusion.lhs, UniversalSet) && matches!(inclusion.rhs, ConstructedTerm { .. }) {
        return Err(ConstraintError::NoSolution(inclusion));
    }

    // `Term … ⊆ ∅`.
    if matches!(inclusion.lhs, ConstructedTerm { .. }) && matches!(inclusion.rhs, EmptySet) {
        return Err(ConstraintError::NoSolution(inclusion));
    }

    // `_ ⊆ U`.
    if matches!(inclusion.rhs, UniversalSet) {
        return Ok(());
    }

    // `∅ ⊆ _`.
    if matches!(inclusion.lhs, EmptySet) {
        return Ok(());
    }

    // `Term(c1,σ1,x) ⊆ Term(c2,σ2,y)`.
    if let (
        ConstructedTerm {
            constructor: c1,
            signature: sig1,
            children: xs,
        },
        ConstructedTerm {
            constructor: c2,
            signature: sig2,
            children: ys,
        },
    ) = (&inclusion.lhs, &inclusion.rhs)
    {
        if !compatible_terms(c1, sig1, c2, sig2) || xs.len() != ys.len() || xs.len() != sig1.len()
        {
            return Err(ConstraintError::NoSolution(inclusion));
        }
        for ((x, y), variance) in xs.iter().zip(ys.iter()).zip(sig1.iter()) {
            let decomposed = match variance {
                Variance::Covariant => Inclusion::new(x.clone(), y.clone()),
                Variance::Contravariant => Inclusion::new(y.clone(), x.clone()),
            };
            simplify_one(decomposed, out)?;
        }
        return Ok(());
    }

    // Otherwise: keep as-is. Covers shapes the rewrite table does not
    // name (e.g. `Var ⊆ ∅`, `U ⊆ Var`) — these are not atomic per §3 and
    // will trip the Builder's invariant assertion if they ever reach it
    // (§7, §9's Open Question on absorbing vs. asserting on malformed
    // shapes).
    out.push(inclusion);
    Ok(())
}
