use crate::bracket::Bracket;
use crate::config::Config;
use crate::point::Point;
use crate::solution::{Solution, Status};

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ, also equal to 2 / (1 + √5).
const INV_PHI: f64 = PHI - 1.0;

/// Golden section refinement over an established bracket.
///
/// Shrinks the interval until its width falls below `config.tolerance` or
/// `config.max_iters` is reached, reusing one interior evaluation per step.
/// On convergence the midpoint estimate is checked against the original
/// bracket edges: the iteration can settle near, but not at, a minimum that
/// sits on an edge, so an edge that beats the midpoint wins.
///
/// A NaN at either final probe or an exhausted iteration budget yields a
/// non-converged solution whose `x` and `objective` are diagnostic only.
pub(crate) fn search<F>(f: F, interval: Bracket, config: &Config) -> Solution
where
    F: Fn(f64) -> f64,
{
    let lower_edge = Point::new(interval.lower(), f(interval.lower()));
    let upper_edge = Point::new(interval.upper(), f(interval.upper()));

    let mut x_lower = interval.lower();
    let mut x_upper = interval.upper();
    let mut x1 = x_upper - INV_PHI * (x_upper - x_lower);
    let mut x2 = x_lower + INV_PHI * (x_upper - x_lower);
    let mut f1 = f(x1);
    let mut f2 = f(x2);

    let mut iters = 0;
    while (x_upper - x_lower).abs() > config.tolerance && iters < config.max_iters {
        if f2 > f1 {
            // Minimum lies in the left sub-interval; x1 is reused as the
            // new right probe. Ties take the other branch.
            x_upper = x2;
            x2 = x1;
            f2 = f1;
            x1 = x_upper - INV_PHI * (x_upper - x_lower);
            f1 = f(x1);
        } else {
            x_lower = x1;
            x1 = x2;
            f1 = f2;
            x2 = x_lower + INV_PHI * (x_upper - x_lower);
            f2 = f(x2);
        }
        iters += 1;
    }

    let x_mid = 0.5 * (x_upper + x_lower);
    let f_mid = 0.5 * (f1 + f2);

    if f1.is_nan() || f2.is_nan() {
        return Solution {
            status: Status::NonFiniteObjective,
            x: x_mid,
            objective: f_mid,
            iters,
        };
    }

    if (x_upper - x_lower).abs() > config.tolerance {
        return Solution {
            status: Status::MaxIters,
            x: x_mid,
            objective: f_mid,
            iters,
        };
    }

    let best = if lower_edge.objective < f_mid {
        lower_edge
    } else if upper_edge.objective < f_mid {
        upper_edge
    } else {
        Point::new(x_mid, f_mid)
    };

    Solution {
        status: Status::Converged,
        x: best.x,
        objective: best.objective,
        iters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn converges_to_interior_minimum() {
        let config = Config::default();
        let solution = search(|x: f64| (x - 2.0).powi(2), Bracket::new(0.0, 4.0), &config);

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
        assert!(solution.objective < 1e-10);
        assert!(solution.iters > 0);
    }

    #[test]
    fn decreasing_objective_returns_right_edge() {
        let config = Config::default();
        let solution = search(|x: f64| -x, Bracket::new(-2.0, 5.0), &config);

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 5.0);
        assert_relative_eq!(solution.objective, -5.0);
    }

    #[test]
    fn increasing_objective_returns_left_edge() {
        let config = Config::default();
        let solution = search(|x: f64| x, Bracket::new(-2.0, 5.0), &config);

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, -2.0);
        assert_relative_eq!(solution.objective, -2.0);
    }

    #[test]
    fn tight_bracket_converges_without_iterating() {
        let config = Config::default();
        let solution = search(|x: f64| x, Bracket::new(1.0, 1.0 + 1e-12), &config);

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn iteration_cap_reports_max_iters() {
        let config = Config {
            max_iters: 1,
            ..Config::default()
        };
        let solution = search(|x: f64| (x - 2.0).powi(2), Bracket::new(0.0, 10.0), &config);

        assert_eq!(solution.status, Status::MaxIters);
        assert!(!solution.converged());
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn nan_objective_reports_non_finite() {
        let f = |x: f64| if x > 0.5 { f64::NAN } else { x };
        let solution = search(f, Bracket::new(0.0, 1.0), &Config::default());

        assert_eq!(solution.status, Status::NonFiniteObjective);
        assert!(solution.objective.is_nan());
    }
}
