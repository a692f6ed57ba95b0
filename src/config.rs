/// Configuration for a minimization run.
///
/// Degenerate numeric settings are not rejected: a zero or non-finite
/// `initial_step` collapses bracketing to a trivial interval, and an
/// unsatisfiable `tolerance` simply exhausts `max_iters`. Both surface as a
/// non-converged [`Solution`](crate::Solution) rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Stop refining once the bracket width falls below this value.
    pub tolerance: f64,

    /// Step size for the outward bracketing search. The sign selects the
    /// search direction.
    pub initial_step: f64,

    /// Lower edge of the search domain.
    pub lower_bound: f64,

    /// Upper edge of the search domain.
    pub upper_bound: f64,

    /// Hard cap on refinement iterations.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            initial_step: 1.0,
            lower_bound: f64::NEG_INFINITY,
            upper_bound: f64::INFINITY,
            max_iters: 100,
        }
    }
}
