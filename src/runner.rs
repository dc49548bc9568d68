//! Top-level invocation surface.
//!
//! One call wires together the solver, console progress output and the
//! reporting layer, mirroring how the solver is meant to be driven
//! interactively: pass an objective, a starting point, the momentum
//! coefficient, the gradient tolerance and whether to record a
//! trajectory report.

use crate::manifolds::EuclideanSpace;
use crate::report::{ContourGrid, TrajectoryReport};
use crate::solvers::gd::{GradientDescent, OptimizeResult, SolveError};

/// Solver result plus the assembled report, when one was requested and
/// possible.
pub struct RunOutcome {
    pub result: OptimizeResult<Vec<f64>>,
    pub report: Option<TrajectoryReport>,
}

/// Run a full optimization with console progress and summary output.
///
/// `report` asks for trajectory recording plus a contour overlay; that
/// is only supported for 2-D problems, and for any other dimension a
/// notice is printed and the optimization continues without reporting.
pub fn minimize<F>(
    value_fn: F,
    x0: Vec<f64>,
    momentum: f64,
    tol_grad: f64,
    report: bool,
) -> Result<RunOutcome, SolveError>
where
    F: Fn(&Vec<f64>) -> f64,
{
    let mut record = report;
    if record && x0.len() != 2 {
        println!("trajectory reporting is only available for 2 dimensions, disabling");
        record = false;
    }

    let solver = GradientDescent {
        momentum,
        tol_grad,
        verbose: true,
        record_trajectory: record,
        ..GradientDescent::with_space(EuclideanSpace)
    };
    let result = solver.minimize_with_fn(x0, |p| value_fn(p))?;

    println!("optimum at {:?}", result.x);
    println!("function value at optimum: {:.6e}", result.f);
    println!("iterations: {}", result.iters);
    if !result.converged() {
        println!("did not converge: {:?}", result.termination);
    }

    let trajectory_report = match result.trajectory.clone() {
        Some(trajectory) => {
            match TrajectoryReport::from_trajectory(
                |p| value_fn(p),
                trajectory,
                true,
                ContourGrid::DEFAULT_RESOLUTION,
            ) {
                Ok(report) => Some(report),
                Err(err) => {
                    println!("reporting disabled: {err}");
                    None
                }
            }
        }
        None => None,
    };

    Ok(RunOutcome {
        result,
        report: trajectory_report,
    })
}
