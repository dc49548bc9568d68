/// Outcome of a step search policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchResult {
    pub accepted: bool,
    pub alpha: f64,
}

/// Per-iteration context passed to a step search policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchContext {
    pub iter: usize,
    /// Initial trial step size.
    pub alpha0: f64,
    /// Objective value at the current point, computed once per search.
    pub cost0: f64,
    /// Directional derivative along the search direction at alpha = 0.
    /// For the steepest-descent direction this is -||grad||^2.
    pub dphi0: Option<f64>,
}

/// Policy interface for selecting a step size.
///
/// `eval_cost(alpha)` must return trial cost at step size `alpha`.
/// Returning `None` means the trial is invalid (e.g., non-finite).
pub trait LineSearchPolicy {
    /// Whether this policy needs directional derivative at alpha = 0.
    fn requires_directional_derivative(&self) -> bool {
        false
    }

    /// Pick a step size using the provided trial-cost evaluator.
    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_cost: &mut dyn FnMut(f64) -> Option<f64>,
    ) -> LineSearchResult;
}

/// Policy that accepts `alpha0` whenever the trial cost is finite.
///
/// Together with zero momentum this gives plain fixed-step descent.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedStep;

impl LineSearchPolicy for FixedStep {
    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_cost: &mut dyn FnMut(f64) -> Option<f64>,
    ) -> LineSearchResult {
        let accepted = eval_cost(ctx.alpha0).is_some();
        LineSearchResult {
            accepted,
            alpha: ctx.alpha0,
        }
    }
}

/// Armijo backtracking policy.
///
/// Starting from `alpha0`, the trial step is shrunk geometrically by
/// `beta` until the sufficient-decrease condition
/// `f(x + alpha p) <= f(x) + c_armijo * alpha * dphi0` holds. With a
/// zero gradient `dphi0 = 0` and the first trial is accepted, which is
/// the terminal case for a converged solve. `max_steps` caps the number
/// of shrinks so the search always terminates, even on numerically flat
/// or ascending slices; exhaustion is reported as `accepted = false`.
#[derive(Clone, Copy, Debug)]
pub struct ArmijoBacktracking {
    /// Geometric shrink factor applied to alpha on each rejection.
    pub beta: f64,
    /// Safety cap on backtracking iterations.
    pub max_steps: usize,
    /// Sufficient-decrease constant.
    pub c_armijo: f64,
}

impl ArmijoBacktracking {
    pub fn new(beta: f64, max_steps: usize, c_armijo: f64) -> Self {
        Self {
            beta,
            max_steps,
            c_armijo,
        }
    }
}

impl Default for ArmijoBacktracking {
    fn default() -> Self {
        Self {
            beta: 0.4,
            max_steps: 30,
            c_armijo: 0.7,
        }
    }
}

impl LineSearchPolicy for ArmijoBacktracking {
    fn requires_directional_derivative(&self) -> bool {
        true
    }

    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_cost: &mut dyn FnMut(f64) -> Option<f64>,
    ) -> LineSearchResult {
        let Some(dphi0) = ctx.dphi0 else {
            return LineSearchResult {
                accepted: false,
                alpha: ctx.alpha0,
            };
        };

        let mut alpha = ctx.alpha0;
        for _ in 0..self.max_steps {
            let Some(cost_trial) = eval_cost(alpha) else {
                alpha *= self.beta;
                continue;
            };

            let rhs = ctx.cost0 + self.c_armijo * alpha * dphi0;
            if rhs.is_finite() && cost_trial <= rhs {
                return LineSearchResult {
                    accepted: true,
                    alpha,
                };
            }
            alpha *= self.beta;
        }

        LineSearchResult {
            accepted: false,
            alpha,
        }
    }
}
