/// Indicates how a search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The objective returned NaN at a probe point.
    NonFiniteObjective,
}

/// The result of a minimization run.
///
/// A non-converged solution still carries the last computed midpoint and
/// objective average; callers should treat those as diagnostics, not as a
/// minimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Refinement iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the search converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
