use thiserror::Error;

use crate::bracket::{Bracket, bracket};
use crate::config::Config;
use crate::golden::search;
use crate::solution::Solution;

/// Errors that can occur when validating a caller-supplied bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Finds a local minimum of `f`.
///
/// If both bounds in `config` are finite, golden section refinement runs
/// directly on `[lower_bound, upper_bound]`. Otherwise an outward
/// bracketing search runs first, starting from `lower_bound` when finite
/// and from `0.0` when not, stepping by `initial_step`.
///
/// This entry point never fails: degenerate configuration and NaN
/// objectives surface through [`Solution::status`].
#[must_use]
pub fn minimize<F>(f: F, config: &Config) -> Solution
where
    F: Fn(f64) -> f64,
{
    if config.lower_bound.is_finite() && config.upper_bound.is_finite() {
        let interval = Bracket::new(config.lower_bound, config.upper_bound);
        return search(&f, interval, config);
    }

    let start = if config.lower_bound.is_finite() {
        config.lower_bound
    } else {
        0.0
    };
    let interval = bracket(&f, start, config.initial_step);

    search(&f, interval, config)
}

/// Refines a caller-supplied bracket to a local minimum of `f`.
///
/// A reversed pair is normalized rather than rejected. The configured
/// bounds are ignored; only `tolerance` and `max_iters` apply.
///
/// # Errors
///
/// Returns an error if either endpoint is non-finite or the pair has zero
/// width.
pub fn minimize_bracketed<F>(
    f: F,
    endpoints: [f64; 2],
    config: &Config,
) -> Result<Solution, BracketError>
where
    F: Fn(f64) -> f64,
{
    let [a, b] = endpoints;

    if !a.is_finite() || !b.is_finite() {
        return Err(BracketError::NonFinite);
    }

    #[allow(clippy::float_cmp)]
    if a == b {
        return Err(BracketError::ZeroWidth);
    }

    Ok(search(&f, Bracket::new(a, b), config))
}

/// Finds a local maximum of `f` by minimizing its negation.
///
/// The reported `objective` is the un-negated maximum value.
#[must_use]
pub fn maximize<F>(f: F, config: &Config) -> Solution
where
    F: Fn(f64) -> f64,
{
    let mut solution = minimize(|x| -f(x), config);
    solution.objective = -solution.objective;
    solution
}
