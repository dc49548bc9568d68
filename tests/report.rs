use approx::assert_relative_eq;
use descent::problems::objective::Objective;
use descent::problems::test_functions::{Rosenbrock, Sphere};
use descent::report::{Bounds, ContourGrid, ReportError, Trajectory, TrajectoryReport};
use descent::runner;
use descent::solvers::gd::GradientDescent;

fn trajectory_of(points: &[&[f64]]) -> Trajectory {
    let mut trajectory = Trajectory::new();
    for p in points {
        trajectory.push(p.to_vec(), 0.0);
    }
    trajectory
}

#[test]
fn bounds_pad_the_observed_extrema() {
    let trajectory = trajectory_of(&[&[0.0, 0.0], &[1.0, 2.0], &[0.5, 1.0]]);
    let bounds = Bounds::from_trajectory(&trajectory, 0.1).unwrap();

    assert_relative_eq!(bounds.lower[0], -0.1, epsilon = 1e-12);
    assert_relative_eq!(bounds.upper[0], 1.1, epsilon = 1e-12);
    assert_relative_eq!(bounds.lower[1], -0.2, epsilon = 1e-12);
    assert_relative_eq!(bounds.upper[1], 2.2, epsilon = 1e-12);
}

#[test]
fn empty_trajectory_has_no_bounds() {
    assert!(Bounds::from_trajectory(&Trajectory::new(), 0.1).is_none());
}

#[test]
fn contour_grid_samples_the_box() {
    let bounds = Bounds {
        lower: vec![0.0, 0.0],
        upper: vec![1.0, 1.0],
    };
    let grid = ContourGrid::sample(|p: &Vec<f64>| Sphere.value(p), &bounds, 3).unwrap();

    assert_eq!(grid.xs, vec![0.0, 0.5, 1.0]);
    assert_eq!(grid.ys, vec![0.0, 0.5, 1.0]);
    assert_eq!(grid.values.len(), 9);
    // f(1.0, 0.5) = 1.25
    assert_relative_eq!(grid.at(2, 1), 1.25, epsilon = 1e-12);
}

#[test]
fn contour_rejects_other_dimensionalities() {
    let bounds = Bounds {
        lower: vec![0.0, 0.0, 0.0],
        upper: vec![1.0, 1.0, 1.0],
    };
    let err = ContourGrid::sample(|p: &Vec<f64>| Sphere.value(p), &bounds, 3).unwrap_err();
    assert_eq!(err, ReportError::UnsupportedDimension(3));
}

#[test]
fn report_with_contour_requires_two_dimensions() {
    let flat = trajectory_of(&[&[0.0], &[1.0]]);
    let err =
        TrajectoryReport::from_trajectory(|p: &Vec<f64>| Sphere.value(p), flat, true, 5)
            .unwrap_err();
    assert_eq!(err, ReportError::UnsupportedDimension(1));

    // Without the contour overlay any dimensionality reports fine.
    let flat = trajectory_of(&[&[0.0], &[1.0]]);
    let report =
        TrajectoryReport::from_trajectory(|p: &Vec<f64>| Sphere.value(p), flat, false, 5)
            .unwrap();
    assert!(report.contour.is_none());
}

#[test]
fn recorded_run_produces_a_full_report() {
    let obj = Rosenbrock::default();
    let solver = GradientDescent {
        momentum: 0.5,
        tol_grad: 1e-12,
        max_iters: 50,
        record_trajectory: true,
        ..GradientDescent::new()
    };

    let result = solver.minimize(&obj, vec![-1.0, 0.0]).unwrap();
    let trajectory = result.trajectory.clone().unwrap();
    assert_eq!(trajectory.len(), result.iters + 1);
    assert_eq!(trajectory.dim(), Some(2));

    let report =
        TrajectoryReport::from_trajectory(|p: &Vec<f64>| obj.value(p), trajectory, true, 25)
            .unwrap();
    assert_eq!(report.bounds.dim(), 2);
    let grid = report.contour.expect("2-D run gets a contour grid");
    assert_eq!(grid.values.len(), 25 * 25);
}

#[test]
fn runner_reports_two_dimensional_runs() {
    let outcome = runner::minimize(
        |x: &Vec<f64>| Sphere.value(x),
        vec![0.5, -0.5],
        0.0,
        1e-3,
        true,
    )
    .unwrap();

    assert!(outcome.result.converged());
    let report = outcome.report.expect("2-D run is reportable");
    assert!(report.contour.is_some());
    assert_eq!(
        report.trajectory.len(),
        outcome.result.iters + 1
    );
}

#[test]
fn runner_degrades_gracefully_off_two_dimensions() {
    let outcome = runner::minimize(
        |x: &Vec<f64>| Sphere.value(x),
        vec![0.5, -0.5, 0.5],
        0.0,
        1e-3,
        true,
    )
    .unwrap();

    // Reporting is disabled with a notice; the solve itself proceeds.
    assert!(outcome.result.converged());
    assert!(outcome.report.is_none());
}
