use descent::{
    manifolds::EuclideanSpace,
    problems::{
        objective::Objective,
        test_functions::{Quadratic, Rosenbrock, Sphere},
    },
    solvers::gd::{FixedStep, GradientDescent, SolveError, Termination},
};

#[test]
fn quadratic_minimization() {
    // f(x) = 0.5 * a x^2 - b x
    // Minimizer is x* = b / a
    let obj = Quadratic { a: 2.0, b: 4.0 }; // f(x) = x^2 - 4x => x* = 2
    let solver = GradientDescent {
        tol_grad: 1e-6,
        ..GradientDescent::new()
    };

    let x0 = vec![0.0];
    let f0 = obj.value(&x0);
    let result = solver.minimize(&obj, x0).unwrap();

    assert!(result.converged());
    assert!((result.x[0] - 2.0).abs() < 1e-3);
    assert!(result.f < f0);
}

#[test]
fn rosenbrock_with_momentum_from_minus_one() {
    // Start [-1, 0], mu = 0.5, tol = 1e-3 (the demo invocation).
    // The loop must terminate and land near the global minimum (1, 1).
    let obj = Rosenbrock::default();
    let solver = GradientDescent {
        momentum: 0.5,
        tol_grad: 1e-3,
        max_iters: 200_000,
        ..GradientDescent::new()
    };

    let x0 = vec![-1.0, 0.0];
    let f0 = obj.value(&x0);
    let result = solver.minimize(&obj, x0).unwrap();

    assert!(result.converged());
    assert!(result.f < f0);
    assert!((result.x[0] - 1.0).abs() < 5e-2);
    assert!((result.x[1] - 1.0).abs() < 5e-2);
}

#[test]
fn sphere_plain_descent_converges() {
    // mu = 0 reduces to backtracking gradient descent; on the sphere the
    // iterates contract geometrically, so convergence must be quick.
    let solver = GradientDescent {
        momentum: 0.0,
        tol_grad: 1e-6,
        ..GradientDescent::new()
    };

    let x0 = vec![2.0, -1.5, 0.5, 1.0, -2.0];
    let result = solver.minimize(&Sphere, x0).unwrap();

    assert!(result.converged());
    assert!(result.iters < 200);
    assert!(result.x.iter().all(|xi| xi.abs() < 1e-3));
}

#[test]
fn stationary_start_terminates_without_moving() {
    // Exactly at the minimum the estimated gradient is zero: the solver
    // must stop in zero iterations and leave the point alone.
    let solver = GradientDescent::new();

    let result = solver
        .minimize_with_fn(vec![1.0], |x| (x[0] - 1.0).powi(2))
        .unwrap();
    assert!(result.converged());
    assert_eq!(result.iters, 0);
    assert_eq!(result.x, vec![1.0]);

    let constant = solver.minimize_with_fn(vec![3.0, -4.0], |_x| 7.5).unwrap();
    assert!(constant.converged());
    assert_eq!(constant.iters, 0);
    assert_eq!(constant.x, vec![3.0, -4.0]);
}

#[test]
fn iteration_cap_is_enforced() {
    let obj = Rosenbrock::default();
    let solver = GradientDescent {
        tol_grad: 1e-12,
        max_iters: 5,
        ..GradientDescent::new()
    };

    let result = solver.minimize(&obj, vec![-1.2, 1.0]).unwrap();

    assert_eq!(result.termination, Termination::MaxIterations);
    assert!(!result.converged());
    assert_eq!(result.iters, 5);
}

#[test]
fn pathological_curvature_stalls_line_search() {
    // Sufficient decrease on this quadratic needs alpha below ~3e-17,
    // far past the backtracking budget.
    let solver = GradientDescent::new();

    let result = solver
        .minimize_with_fn(vec![1.0], |x| {
            let y = 1e8 * x[0];
            y * y
        })
        .unwrap();

    assert_eq!(result.termination, Termination::LineSearchStalled);
}

#[test]
fn non_finite_objective_is_surfaced() {
    // ln of a negative argument is NaN at the starting point itself, so
    // no iteration can be taken.
    let solver = GradientDescent::new();

    let result = solver.minimize_with_fn(vec![-1.0], |x| x[0].ln()).unwrap();

    assert_eq!(result.termination, Termination::EvaluationFailed);
    assert_eq!(result.iters, 0);
}

#[test]
fn configuration_is_validated() {
    let solver = GradientDescent::new();
    assert_eq!(
        solver.minimize(&Sphere, vec![]).unwrap_err(),
        SolveError::EmptyInitialPoint
    );

    let bad_momentum = GradientDescent {
        momentum: 1.5,
        ..GradientDescent::new()
    };
    assert_eq!(
        bad_momentum.minimize(&Sphere, vec![1.0]).unwrap_err(),
        SolveError::MomentumOutOfRange(1.5)
    );

    let bad_tol = GradientDescent {
        tol_grad: 0.0,
        ..GradientDescent::new()
    };
    assert_eq!(
        bad_tol.minimize(&Sphere, vec![1.0]).unwrap_err(),
        SolveError::InvalidTolerance(0.0)
    );

    let bad_fd = GradientDescent {
        fd_step: -1e-8,
        ..GradientDescent::new()
    };
    assert_eq!(
        bad_fd.minimize(&Sphere, vec![1.0]).unwrap_err(),
        SolveError::InvalidFdStep(-1e-8)
    );
}

#[test]
fn trace_and_trajectory_are_recorded() {
    let solver = GradientDescent {
        momentum: 0.3,
        tol_grad: 1e-5,
        collect_trace: true,
        record_trajectory: true,
        ..GradientDescent::new()
    };

    let result = solver
        .minimize(&Quadratic { a: 2.0, b: 4.0 }, vec![0.0])
        .unwrap();

    let trace = result.trace.as_ref().expect("trace requested");
    assert!(!trace.is_empty());
    assert!(trace[0].f.unwrap().is_finite());

    // One record per iterate: the start plus every accepted step.
    let trajectory = result.trajectory.as_ref().expect("trajectory requested");
    assert_eq!(trajectory.len(), result.iters + 1);
    assert!(trajectory.points().iter().all(|p| p.len() == 1));
}

#[test]
fn dimensions_stay_consistent() {
    let solver = GradientDescent {
        momentum: 0.5,
        tol_grad: 1e-4,
        record_trajectory: true,
        ..GradientDescent::new()
    };

    let d = 4;
    let result = solver.minimize(&Sphere, vec![1.0; d]).unwrap();

    assert_eq!(result.x.len(), d);
    let trajectory = result.trajectory.as_ref().unwrap();
    assert!(trajectory.points().iter().all(|p| p.len() == d));
}

#[test]
fn fixed_step_policy_runs_plain_descent() {
    let solver = GradientDescent {
        space: EuclideanSpace,
        momentum: 0.0,
        tol_grad: 1e-6,
        ..GradientDescent::new()
    };

    let mut policy = FixedStep;
    let result = solver
        .minimize_with_line_search(&Sphere, vec![1.0, -1.0], &mut policy)
        .unwrap();

    assert!(result.converged());
    assert!(result.x.iter().all(|xi| xi.abs() < 1e-3));
}
