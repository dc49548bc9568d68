//! Trajectory recording and reporting for solve runs.
//!
//! The solver only produces data here; rendering is left to external
//! consumers. A report bundles the padded bounding box of the observed
//! iterates, the trajectory itself with its log-objective series, and
//! (for 2-D problems) a contour-grid evaluation of the objective over
//! the box.

mod contour;
mod trajectory;

pub use contour::ContourGrid;
pub use trajectory::{Bounds, Trajectory};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("contour reporting is only available for 2 dimensions, got {0}")]
    UnsupportedDimension(usize),
    #[error("contour grid needs at least 2 samples per axis, got {0}")]
    InvalidResolution(usize),
    #[error("trajectory is empty, nothing to report")]
    EmptyTrajectory,
}

/// Everything an external plotting collaborator needs for one run.
#[derive(Clone, Debug)]
pub struct TrajectoryReport {
    pub bounds: Bounds,
    pub trajectory: Trajectory,
    pub contour: Option<ContourGrid>,
}

impl TrajectoryReport {
    /// Assemble a report from a recorded trajectory.
    ///
    /// With `contour` set the objective is re-evaluated over the padded
    /// bounding box; that overlay is only defined for 2-D trajectories
    /// and any other dimensionality is an error for the caller to
    /// degrade on (the optimization result itself is unaffected).
    pub fn from_trajectory<F>(
        value_fn: F,
        trajectory: Trajectory,
        contour: bool,
        resolution: usize,
    ) -> Result<Self, ReportError>
    where
        F: FnMut(&Vec<f64>) -> f64,
    {
        let bounds = Bounds::from_trajectory(&trajectory, Bounds::DEFAULT_PAD)
            .ok_or(ReportError::EmptyTrajectory)?;
        let contour = if contour {
            Some(ContourGrid::sample(value_fn, &bounds, resolution)?)
        } else {
            None
        };
        Ok(Self {
            bounds,
            trajectory,
            contour,
        })
    }
}
