use setcon_expr::Inclusion;

/// Recoverable failures at the solver's boundary (`spec.md` §6, §7).
///
/// Both variants carry the offending inclusion or variable verbatim.
/// Anything else that can go wrong — an ill-formed atomic inclusion
/// reaching the builder, a duplicate edge, `A ⊆ A` reaching the edge
/// inserter — is a programmer error and panics instead of returning this
/// type (§7).
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConstraintError<V, C> {
    /// An inclusion was proven unsatisfiable during simplification or
    /// saturation.
    #[error("unsatisfiable inclusion")]
    NoSolution(Inclusion<V, C>),
    /// `least_solution` was asked about a variable with no corresponding
    /// node in the solved system.
    #[error("no such variable in the solved system")]
    NoVariableLabel(V),
}

impl<V: PartialEq, C: PartialEq> PartialEq for ConstraintError<V, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoSolution(a), Self::NoSolution(b)) => a == b,
            (Self::NoVariableLabel(a), Self::NoVariableLabel(b)) => a == b,
            _ => false,
        }
    }
}
