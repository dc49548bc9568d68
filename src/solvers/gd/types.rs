use crate::manifolds::{space::Space, EuclideanSpace};
use crate::problems::finite_diff::CentralDifference;
use crate::report::Trajectory;
use crate::solvers::SolverTraceRecord;

/// Configuration error reported before any objective evaluation.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("initial point must have at least one dimension")]
    EmptyInitialPoint,
    #[error("momentum coefficient must lie in [0, 1], got {0}")]
    MomentumOutOfRange(f64),
    #[error("gradient tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    #[error("initial line-search step must be positive and finite, got {0}")]
    InvalidStepSize(f64),
    #[error("finite-difference step must be positive and finite, got {0}")]
    InvalidFdStep(f64),
}

/// How a solve run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// L1 gradient norm fell to the tolerance.
    Converged,
    /// Iteration cap reached before the tolerance.
    MaxIterations,
    /// Backtracking exhausted its shrink budget without a step
    /// satisfying sufficient decrease.
    LineSearchStalled,
    /// The objective or the estimated gradient became non-finite at the
    /// current iterate.
    EvaluationFailed,
}

/// Configuration for gradient descent with momentum.
///
/// Gradients are estimated by central finite differences; the user
/// supplies only objective values. Convergence is tested on the **L1**
/// norm of the gradient (`sum |g_i|`).
#[derive(Clone, Debug)]
pub struct GradientDescent<S: Space = EuclideanSpace> {
    /// Space to operate on (fixed to EuclideanSpace in practice).
    pub space: S,
    /// Momentum (friction) coefficient `mu` in [0, 1]; 0 disables
    /// momentum entirely.
    pub momentum: f64,
    /// Initial line-search trial step.
    pub step_size: f64,
    /// Considered converged when the L1 gradient norm falls to this
    /// threshold.
    pub tol_grad: f64,
    /// Safety cap on iterations; momentum can oscillate and delay
    /// convergence indefinitely without one.
    pub max_iters: usize,
    /// Perturbation width for the finite-difference gradient.
    pub fd_step: f64,
    /// If true, prints per-iteration diagnostics (f, L1 grad, alpha).
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the result.
    pub collect_trace: bool,
    /// If true, records the (point, ln f) trajectory into the result
    /// for the reporting layer.
    pub record_trajectory: bool,
}

impl<S: Space> GradientDescent<S> {
    /// Build a solver on an explicitly provided space.
    pub fn with_space(space: S) -> Self {
        Self {
            space,
            momentum: 0.5,
            step_size: 0.1,
            tol_grad: 1e-3,
            max_iters: 10_000,
            fd_step: CentralDifference::DEFAULT_STEP,
            verbose: false,
            collect_trace: false,
            record_trajectory: false,
        }
    }

    pub(super) fn validate(&self) -> Result<(), SolveError> {
        if !(0.0..=1.0).contains(&self.momentum) {
            return Err(SolveError::MomentumOutOfRange(self.momentum));
        }
        if !(self.tol_grad.is_finite() && self.tol_grad > 0.0) {
            return Err(SolveError::InvalidTolerance(self.tol_grad));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(SolveError::InvalidStepSize(self.step_size));
        }
        if !(self.fd_step.is_finite() && self.fd_step > 0.0) {
            return Err(SolveError::InvalidFdStep(self.fd_step));
        }
        Ok(())
    }
}

impl GradientDescent<EuclideanSpace> {
    /// Build a solver with Euclidean space defaults.
    pub fn new() -> Self {
        Self::with_space(EuclideanSpace)
    }
}

impl Default for GradientDescent<EuclideanSpace> {
    fn default() -> Self {
        Self::new()
    }
}

/// Struct that holds the optimization result.
#[derive(Clone, Debug)]
pub struct OptimizeResult<P> {
    pub x: P,
    pub f: f64,
    pub iters: usize,
    /// L1 gradient norm from the last completed search pass.
    pub grad_l1: f64,
    pub termination: Termination,
    pub trace: Option<Vec<SolverTraceRecord>>,
    pub trajectory: Option<Trajectory>,
}

impl<P> OptimizeResult<P> {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
