//! Derivative-free one-dimensional minimization.
//!
//! # Algorithm
//!
//! Minimization runs in two stages. An outward bracketing search expands
//! from a starting point in fixed steps until it has walked past a rise in
//! the objective, establishing an interval believed to contain a local
//! minimum. Golden section search then shrinks that interval: it maintains
//! two interior points positioned by the golden ratio, compares their
//! objectives, and discards the worse end, reusing one evaluation per step.
//!
//! The bracketing stage is deliberately linear and single-direction. The
//! intended objectives are time-indexed physical curves (e.g. negated
//! satellite elevation over time), where expanding exponentially or in both
//! directions could skip over the nearest minimum and change which local
//! minimum is reported.
//!
//! # When to Use
//!
//! - The objective is a plain `Fn(f64) -> f64` with no derivative available
//! - The objective is unimodal near the region of interest
//! - Function evaluations are relatively cheap
//!
//! # Limitations
//!
//! - **Single variable only**: the domain is a real interval
//! - **Derivative-free**: linear convergence, slower than gradient methods
//! - **Local**: only the minimum reachable from the starting point (or
//!   within the supplied bounds) is found
//!
//! # Example
//!
//! ```
//! use linemin::{Config, Status, minimize};
//!
//! let solution = minimize(|x| (x - 3.0) * (x - 3.0), &Config::default());
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 3.0).abs() < 1e-6);
//! ```

mod bracket;
mod config;
mod golden;
mod minimize;
mod point;
mod solution;

pub use bracket::{Bracket, bracket};
pub use config::Config;
pub use minimize::{BracketError, maximize, minimize, minimize_bracketed};
pub use solution::{Solution, Status};
