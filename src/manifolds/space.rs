//! Space abstractions with manifold-style retraction updates.

/// Trait that represents an abstract optimization space.
///
/// The interface is intentionally small. The solver works with:
/// - points (`x`) on the space
/// - local update vectors (gradients, descent directions, velocity)
///   used by `retract_into`
pub trait Space {
    type Point: Clone;
    type Tangent: Clone;

    fn zero_like(&self, x: &Self::Point) -> Self::Point;

    /// Tangent/local zero vector at `x`.
    fn zero_tangent_like(&self, x: &Self::Point) -> Self::Tangent;

    /// Euclidean norm of a local update vector.
    fn tangent_norm(&self, v: &Self::Tangent) -> f64;

    // --- core ops (allocation-free if impl does it right) ---
    fn scale_into(&self, out: &mut Self::Tangent, v: &Self::Tangent, alpha: f64);
    fn add_into(&self, out: &mut Self::Point, x: &Self::Point, v: &Self::Tangent);

    /// v *= alpha, in place.
    fn scale_in_place(&self, v: &mut Self::Tangent, alpha: f64);

    /// y += alpha * v, in place. Used for the momentum blend.
    fn axpy_in_place(&self, y: &mut Self::Tangent, alpha: f64, v: &Self::Tangent);

    /// out = Retr_x(alpha * direction)
    fn retract_into(
        &self,
        out: &mut Self::Point,
        x: &Self::Point,
        direction: &Self::Tangent,
        alpha: f64,
        tmp: &mut Self::Tangent,
    ) {
        self.scale_into(tmp, direction, alpha);
        self.add_into(out, x, tmp);
    }

    /// In-place step update: x <- Retr_x(alpha * direction)
    fn retract_step_into(
        &self,
        x: &mut Self::Point,
        direction: &Self::Tangent,
        alpha: f64,
        x_next: &mut Self::Point,
        tmp: &mut Self::Tangent,
    ) {
        self.retract_into(x_next, x, direction, alpha, tmp);
        std::mem::swap(x, x_next);
    }
}

// Compatibility re-export: existing code can still import
// `manifolds::space::EuclideanSpace`.
pub use super::euclidean::EuclideanSpace;
