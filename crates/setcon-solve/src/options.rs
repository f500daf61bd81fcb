/// Tunables for [`crate::solve_system_with_options`] / [`crate::Builder`].
///
/// `spec.md` §9 notes the original source "oscillated between enabling
/// and disabling cycle detection", and that an implementation is free to
/// budget it "provided correctness is preserved; the default should lean
/// toward detection enabled."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Whether online cycle detection (§4.4.3, §4.4.4) runs at all.
    /// Cycle collapse is purely an optimisation (§8, Cycle-collapse
    /// equivalence) — disabling it must never change a `least_solution`
    /// result, only the shape of the intermediate graph.
    pub remove_cycles: bool,
    /// Caps the total number of nodes visited by a single `check_chain`
    /// search (§4.4.4, §9). `None` means unlimited. Exhausting the
    /// budget silently degrades to "no chain found" (§7).
    pub cycle_budget: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            remove_cycles: true,
            cycle_budget: Some(4096),
        }
    }
}
