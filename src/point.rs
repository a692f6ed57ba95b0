/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Point {
    /// The x value.
    pub(crate) x: f64,

    /// The objective value at x.
    pub(crate) objective: f64,
}

impl Point {
    /// Creates a new point.
    pub(crate) fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}
