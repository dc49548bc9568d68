pub(super) struct GdWorkspace {
    pub(super) grad: Vec<f64>,
    pub(super) direction: Vec<f64>,
    pub(super) velocity: Vec<f64>,
    pub(super) x_trial: Vec<f64>,
    pub(super) tmp: Vec<f64>,
    pub(super) probe: Vec<f64>, // finite-difference scratch point
}

impl GdWorkspace {
    pub(super) fn new(d: usize) -> Self {
        Self {
            grad: vec![0.0f64; d],
            direction: vec![0.0f64; d],
            velocity: vec![0.0f64; d],
            x_trial: vec![0.0f64; d],
            tmp: vec![0.0f64; d],
            probe: vec![0.0f64; d],
        }
    }
}
