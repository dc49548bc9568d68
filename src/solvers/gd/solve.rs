use crate::manifolds::space::Space;
use crate::problems::finite_diff::CentralDifference;
use crate::problems::objective::Objective;
use crate::report::Trajectory;
use crate::solvers::common::step::retract_step;
use crate::solvers::common::step_policy::{
    ArmijoBacktracking, LineSearchContext, LineSearchPolicy,
};
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::{GradientDescent, OptimizeResult, SolveError, Termination};
use super::workspace::GdWorkspace;

/// Outcome of one line-search pass at the current iterate: the
/// estimated gradient lands in the workspace, the scalars come back
/// here.
struct SearchPass {
    alpha: f64,
    accepted: bool,
    f0: f64,
    grad_l1: f64,
}

/// Convergence is tested on sum |g_i|, not the Euclidean norm.
fn l1_norm(v: &[f64]) -> f64 {
    v.iter().map(|vi| vi.abs()).sum()
}

impl<S: Space<Point = Vec<f64>, Tangent = Vec<f64>>> GradientDescent<S> {
    fn make_tracer(&self) -> SolverTracer {
        if self.collect_trace {
            SolverTracer::gd_with_history(self.verbose)
        } else {
            SolverTracer::gd(self.verbose)
        }
    }

    fn attach_trace(
        &self,
        mut result: OptimizeResult<Vec<f64>>,
        trace: SolverTracer,
    ) -> OptimizeResult<Vec<f64>> {
        result.trace = if self.collect_trace {
            Some(trace.into_history())
        } else {
            None
        };
        result
    }

    /// Estimate the gradient at `x`, evaluate f(x) once, and run the
    /// step-size policy along the steepest-descent direction.
    ///
    /// Returns `None` when the objective or the gradient estimate is
    /// non-finite at `x` itself; non-finite *trial* points are handled
    /// inside the policy by shrinking past them.
    fn search_at<F, LS>(
        &self,
        iter: usize,
        x: &Vec<f64>,
        value_fn: &mut F,
        line_search: &mut LS,
        fd: &CentralDifference,
        ws: &mut GdWorkspace,
    ) -> Option<SearchPass>
    where
        F: FnMut(&Vec<f64>) -> f64,
        LS: LineSearchPolicy,
    {
        let GdWorkspace {
            grad,
            direction,
            x_trial,
            tmp,
            probe,
            ..
        } = ws;

        fd.gradient_into(value_fn, x, grad, probe);
        let f0 = value_fn(x);
        let grad_l1 = l1_norm(grad);
        if !f0.is_finite() || !grad_l1.is_finite() {
            return None;
        }

        // direction = -grad; for steepest descent the directional
        // derivative at alpha = 0 is -||grad||^2.
        self.space.scale_into(direction, grad, -1.0);
        let grad_norm = self.space.tangent_norm(grad);
        let ctx = LineSearchContext {
            iter,
            alpha0: self.step_size,
            cost0: f0,
            dphi0: Some(-(grad_norm * grad_norm)),
        };

        let mut eval_cost = |alpha_trial: f64| {
            self.space
                .retract_into(x_trial, x, direction, alpha_trial, tmp);
            let f_trial = value_fn(x_trial);
            f_trial.is_finite().then_some(f_trial)
        };
        let ls = line_search.search(&ctx, &mut eval_cost);

        Some(SearchPass {
            alpha: ls.alpha,
            accepted: ls.accepted,
            f0,
            grad_l1,
        })
    }

    fn run_with_fn<F, LS>(
        &self,
        mut x: Vec<f64>,
        mut value_fn: F,
        line_search: &mut LS,
        trace: &SolverTracer,
    ) -> OptimizeResult<Vec<f64>>
    where
        F: FnMut(&Vec<f64>) -> f64,
        LS: LineSearchPolicy,
    {
        let fd = CentralDifference::new(self.fd_step);
        let mut ws = GdWorkspace::new(x.len());
        let mut trajectory = self.record_trajectory.then(Trajectory::new);
        let mut iters = 0usize;
        let mut grad_l1 = f64::NAN;

        // Entry search pass: the first convergence check runs on the
        // gradient at the starting point, before any step is taken.
        let mut pass_opt = self.search_at(iters, &x, &mut value_fn, line_search, &fd, &mut ws);
        if let (Some(traj), Some(pass)) = (trajectory.as_mut(), pass_opt.as_ref()) {
            traj.push(x.clone(), pass.f0.ln());
        }

        let termination = loop {
            let Some(pass) = pass_opt.take() else {
                trace.emit(TraceRow::iter(iters).note("non-finite evaluation"));
                break Termination::EvaluationFailed;
            };
            grad_l1 = pass.grad_l1;
            trace.emit(
                TraceRow::iter(iters)
                    .f(pass.f0)
                    .grad_l1(pass.grad_l1)
                    .alpha(pass.alpha),
            );
            if pass.grad_l1 <= self.tol_grad {
                trace.emit(
                    TraceRow::iter(iters)
                        .f(pass.f0)
                        .grad_l1(pass.grad_l1)
                        .note("converged"),
                );
                break Termination::Converged;
            }
            if iters >= self.max_iters {
                trace.emit(TraceRow::iter(iters).note("max iterations"));
                break Termination::MaxIterations;
            }

            // Fresh search at the current iterate; its gradient drives
            // this step and the next convergence check.
            let Some(step) = self.search_at(iters, &x, &mut value_fn, line_search, &fd, &mut ws)
            else {
                trace.emit(TraceRow::iter(iters).note("non-finite evaluation"));
                break Termination::EvaluationFailed;
            };
            if !step.accepted {
                trace.emit(TraceRow::iter(iters).alpha(step.alpha).note("stalled"));
                break Termination::LineSearchStalled;
            }

            // velocity <- mu * velocity - alpha * grad
            self.space.scale_in_place(&mut ws.velocity, self.momentum);
            self.space
                .axpy_in_place(&mut ws.velocity, -step.alpha, &ws.grad);

            // x <- Retr_x(velocity)
            retract_step(
                &self.space,
                &mut x,
                &ws.velocity,
                1.0,
                &mut ws.x_trial,
                &mut ws.tmp,
            );
            iters += 1;

            if let Some(traj) = trajectory.as_mut() {
                traj.push(x.clone(), value_fn(&x).ln());
            }
            pass_opt = Some(step);
        };

        let f = value_fn(&x);
        OptimizeResult {
            x,
            f,
            iters,
            grad_l1,
            termination,
            trace: None,
            trajectory,
        }
    }

    /// Minimize an objective from `x` with the default Armijo
    /// backtracking search.
    pub fn minimize<O>(&self, obj: &O, x: Vec<f64>) -> Result<OptimizeResult<Vec<f64>>, SolveError>
    where
        O: Objective<S>,
    {
        self.minimize_with_fn(x, |p| obj.value(p))
    }

    /// Minimize using a user-provided value function.
    pub fn minimize_with_fn<F>(
        &self,
        x: Vec<f64>,
        value_fn: F,
    ) -> Result<OptimizeResult<Vec<f64>>, SolveError>
    where
        F: FnMut(&Vec<f64>) -> f64,
    {
        let mut line_search = ArmijoBacktracking::default();
        self.minimize_with_fn_and_line_search(x, value_fn, &mut line_search)
    }

    /// Minimize using an explicit line-search policy.
    pub fn minimize_with_line_search<O, LS>(
        &self,
        obj: &O,
        x: Vec<f64>,
        line_search: &mut LS,
    ) -> Result<OptimizeResult<Vec<f64>>, SolveError>
    where
        O: Objective<S>,
        LS: LineSearchPolicy,
    {
        self.minimize_with_fn_and_line_search(x, |p| obj.value(p), line_search)
    }

    /// Minimize callbacks using an explicit line-search policy.
    pub fn minimize_with_fn_and_line_search<F, LS>(
        &self,
        x: Vec<f64>,
        value_fn: F,
        line_search: &mut LS,
    ) -> Result<OptimizeResult<Vec<f64>>, SolveError>
    where
        F: FnMut(&Vec<f64>) -> f64,
        LS: LineSearchPolicy,
    {
        if x.is_empty() {
            return Err(SolveError::EmptyInitialPoint);
        }
        self.validate()?;

        let trace = self.make_tracer();
        let result = self.run_with_fn(x, value_fn, line_search, &trace);
        Ok(self.attach_trace(result, trace))
    }
}
