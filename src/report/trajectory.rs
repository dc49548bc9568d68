/// Append-only record of the iterates visited during a solve.
///
/// Each entry pairs a point snapshot with the natural log of the
/// objective there; the log series is what the reporting layer plots
/// against the iteration count.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    points: Vec<Vec<f64>>,
    log_values: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Vec<f64>, log_value: f64) {
        self.points.push(point);
        self.log_values.push(log_value);
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    pub fn log_values(&self) -> &[f64] {
        &self.log_values
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimension of the recorded points, `None` while empty.
    pub fn dim(&self) -> Option<usize> {
        self.points.first().map(Vec::len)
    }
}

/// Per-dimension bounding box of a trajectory.
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl Bounds {
    /// Fraction of the per-dimension span added on each side.
    pub const DEFAULT_PAD: f64 = 0.1;

    /// Bounding box of the observed iterates, padded by `pad` times the
    /// span of each dimension. A degenerate dimension (all iterates
    /// equal) yields a zero-width interval.
    pub fn from_trajectory(trajectory: &Trajectory, pad: f64) -> Option<Self> {
        let d = trajectory.dim()?;
        let mut lower = vec![f64::INFINITY; d];
        let mut upper = vec![f64::NEG_INFINITY; d];
        for point in trajectory.points() {
            for i in 0..d {
                lower[i] = lower[i].min(point[i]);
                upper[i] = upper[i].max(point[i]);
            }
        }
        for i in 0..d {
            let margin = pad * (upper[i] - lower[i]);
            lower[i] -= margin;
            upper[i] += margin;
        }
        Some(Self { lower, upper })
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }
}
