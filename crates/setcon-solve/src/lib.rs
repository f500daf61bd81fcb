//! Set-constraint solving: simplification, the graph builder, and the
//! solved-system query surface (`spec.md` §4).

mod builder;
mod error;
mod options;
mod simplify;
mod solved;


pub use builder::Builder;
pub use error::ConstraintError;
pub use options::SolveOptions;
pub use simplify::simplify;
pub use solved::{
    least_solution, render, solve_system, solve_system_with_options, solved_system_graph_elems,
    SolvedSystem,
};
