use crate::manifolds::space::Space;

/// Objective function to be minimized.
///
/// - `S::Point` represents points on the space
/// - only the value is required; the solver estimates gradients
///   numerically (see `problems::finite_diff`)
///
/// The objective is assumed pure: repeated evaluation at the same point
/// returns the same value, and every probed point (finite-difference
/// perturbations, line-search trials) must yield a defined `f64`.
/// Non-finite values are propagated, not masked.
pub trait Objective<S: Space> {
    /// Function value f(x) at x.
    fn value(&self, x: &S::Point) -> f64;
}

impl<S, F> Objective<S> for F
where
    S: Space,
    F: Fn(&S::Point) -> f64,
{
    fn value(&self, x: &S::Point) -> f64 {
        self(x)
    }
}
