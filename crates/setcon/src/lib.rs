//! A set-constraint solver over inductive-form constraint graphs.
//!
//! Feed it a system of inclusion constraints between set expressions —
//! variables, constructed terms, and the universally empty/full sets —
//! and it computes the least solution: for a given variable, every
//! constructed term provably a member of that variable's set.
//!
//! # Example
//!
//! ```
//! use setcon::{atom, inclusion, constraint_system, set_variable, solve_system, least_solution};
//!
//! // atom("a") ⊆ x, x ⊆ y
//! let system = constraint_system(vec![
//!     inclusion(atom("a"), set_variable("x")),
//!     inclusion(set_variable("x"), set_variable("y")),
//! ]);
//!
//! let solved = solve_system(system).expect("satisfiable");
//! assert_eq!(least_solution(&solved, "y").unwrap(), vec![atom("a")]);
//! ```

pub use setcon_expr::{
    atom, compatible_terms, constraint_system, empty_set, inclusion, set_variable, term,
    universal_set, ConstraintSystem, Inclusion, SetExpression, TermConstructor, Variance,
};
pub use setcon_graph::{EdgeLabel, IfGraph, NodeId, SolvedGraph, Visit};
pub use setcon_solve::{
    least_solution, render, solve_system, solve_system_with_options, solved_system_graph_elems,
    Builder, ConstraintError, SolveOptions, SolvedSystem,
};
