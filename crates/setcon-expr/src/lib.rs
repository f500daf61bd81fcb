//! Set-expression and inclusion-constraint data model.
//!
//! Pure data, no behaviour beyond equality, ordering, and the handful of
//! total constructor functions named in the engine's public surface
//! (`empty_set`, `universal_set`, `set_variable`, `atom`, `term`).

mod expr;
mod inclusion;


pub use expr::{
    SetExpression, TermConstructor, Variance, atom, compatible_terms, empty_set, set_variable,
    term, universal_set,
};
pub use inclusion::{ConstraintSystem, Inclusion, constraint_system, inclusion};
