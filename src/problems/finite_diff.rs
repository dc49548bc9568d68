//! Central-difference gradient estimation.

/// Symmetric finite-difference gradient estimator.
///
/// Each partial derivative is approximated from two probes per
/// dimension: `(f(x + step/2 e_i) - f(x - step/2 e_i)) / step`, for
/// `2 d` objective evaluations per gradient. Nothing is cached between
/// calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentralDifference {
    /// Perturbation width. The default `1e-8` trades truncation error
    /// (grows with `step`) against floating-point cancellation
    /// (grows as `step` shrinks).
    pub step: f64,
}

impl CentralDifference {
    pub const DEFAULT_STEP: f64 = 1e-8;

    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// Write the estimated gradient of `value_fn` at `x` into `grad`.
    ///
    /// `probe` is a scratch point reused for every perturbation; it is
    /// left equal to `x` on return. `grad` is resized to `x.len()`.
    /// Non-finite objective values flow into the result unmasked.
    pub fn gradient_into<F>(
        &self,
        value_fn: &mut F,
        x: &Vec<f64>,
        grad: &mut Vec<f64>,
        probe: &mut Vec<f64>,
    ) where
        F: FnMut(&Vec<f64>) -> f64,
    {
        grad.resize(x.len(), 0.0);
        probe.clear();
        probe.extend_from_slice(x);

        let half = 0.5 * self.step;
        for i in 0..x.len() {
            let xi = x[i];
            probe[i] = xi + half;
            let f_plus = value_fn(probe);
            probe[i] = xi - half;
            let f_minus = value_fn(probe);
            probe[i] = xi;
            grad[i] = (f_plus - f_minus) / self.step;
        }
    }

    /// Convenience wrapper that allocates the gradient (OK for tests
    /// and examples).
    pub fn gradient<F>(&self, mut value_fn: F, x: &Vec<f64>) -> Vec<f64>
    where
        F: FnMut(&Vec<f64>) -> f64,
    {
        let mut grad = vec![0.0; x.len()];
        let mut probe = x.clone();
        self.gradient_into(&mut value_fn, x, &mut grad, &mut probe);
        grad
    }
}

impl Default for CentralDifference {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
        }
    }
}
