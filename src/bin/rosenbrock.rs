use descent::problems::test_functions::Rosenbrock;
use descent::problems::Objective;
use descent::runner;

fn main() {
    // Rosenbrock from [-1, 0], mu = 0.5, tol = 1e-3,
    // with trajectory reporting. The known minimum is at (1, 1).
    let rosenbrock = Rosenbrock::default();
    let outcome = match runner::minimize(
        |x| rosenbrock.value(x),
        vec![-1.0, 0.0],
        0.5,
        1e-3,
        true,
    ) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("solve failed: {err}");
            std::process::exit(1);
        }
    };

    if let Some(report) = &outcome.report {
        println!(
            "trajectory: {} points over x1 [{:.3}, {:.3}] x2 [{:.3}, {:.3}]",
            report.trajectory.len(),
            report.bounds.lower[0],
            report.bounds.upper[0],
            report.bounds.lower[1],
            report.bounds.upper[1],
        );
        if let Some(grid) = &report.contour {
            println!(
                "contour grid: {}x{} samples",
                grid.xs.len(),
                grid.ys.len()
            );
        }
    }
}
