/// Search interval believed to contain a local minimum.
///
/// Bounds are stored in `lower <= upper` order; a reversed pair is swapped
/// on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
}

impl Bracket {
    /// Creates a bracket, swapping the endpoints if they are reversed.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        Self { lower, upper }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }
}

/// Searches outward from `x0` in steps of `dx` for an interval containing a
/// local minimum of `f`.
///
/// The search is linear and single-direction: the sign of `dx` selects the
/// direction, and expansion stops at the first observed rise in the
/// objective. A tie between the running minimum and the starting value also
/// stops expansion, on the grounds that the curve is flat at the start and
/// the minimum is already at hand.
///
/// A `dx` of zero or a non-finite `dx` yields a trivial bracket around `x0`
/// rather than an error.
#[must_use]
pub fn bracket<F>(f: F, x0: f64, dx: f64) -> Bracket
where
    F: Fn(f64) -> f64,
{
    // A non-finite step cannot expand the search; the trivial bracket
    // around the start stands in.
    if !dx.is_finite() {
        return Bracket::new(x0, x0);
    }

    let f_start = f(x0);
    let mut x_upper = x0;
    let mut f_min = f_start;

    loop {
        x_upper += dx;
        let f_upper = f(x_upper);
        f_min = f_min.min(f_upper);

        #[allow(clippy::float_cmp)]
        let flat_at_start = f_start == f_min;
        if f_upper > f_min || flat_at_start {
            break;
        }
    }

    // Step back two increments from the overshoot point. If that lands on
    // the first probe, widen back to the starting point instead.
    let mut x_lower = x_upper - 2.0 * dx;
    #[allow(clippy::float_cmp)]
    if x_lower == x0 + dx {
        x_lower = x0;
    }

    Bracket::new(x_lower, x_upper)
}
