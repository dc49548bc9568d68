use super::trajectory::Bounds;
use super::ReportError;

/// Regular evaluation grid of the objective over a 2-D bounding box,
/// used to draw a contour overlay behind the trajectory.
#[derive(Clone, Debug)]
pub struct ContourGrid {
    /// Grid coordinates along the first dimension.
    pub xs: Vec<f64>,
    /// Grid coordinates along the second dimension.
    pub ys: Vec<f64>,
    /// Objective values, row-major: `values[iy * xs.len() + ix]`.
    pub values: Vec<f64>,
}

fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}

impl ContourGrid {
    /// Grid resolution per axis used by the runner.
    pub const DEFAULT_RESOLUTION: usize = 75;

    /// Evaluate `value_fn` over a `resolution x resolution` grid
    /// spanning `bounds`. Only 2-D boxes are supported; anything else
    /// is rejected so it cannot be mis-plotted.
    pub fn sample<F>(
        mut value_fn: F,
        bounds: &Bounds,
        resolution: usize,
    ) -> Result<Self, ReportError>
    where
        F: FnMut(&Vec<f64>) -> f64,
    {
        if bounds.dim() != 2 {
            return Err(ReportError::UnsupportedDimension(bounds.dim()));
        }
        if resolution < 2 {
            return Err(ReportError::InvalidResolution(resolution));
        }

        let xs = linspace(bounds.lower[0], bounds.upper[0], resolution);
        let ys = linspace(bounds.lower[1], bounds.upper[1], resolution);
        let mut values = Vec::with_capacity(resolution * resolution);
        let mut point = vec![0.0f64; 2];
        for &y in &ys {
            for &x in &xs {
                point[0] = x;
                point[1] = y;
                values.push(value_fn(&point));
            }
        }
        Ok(Self { xs, ys, values })
    }

    /// Value at grid cell `(ix, iy)`.
    pub fn at(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.xs.len() + ix]
    }
}
