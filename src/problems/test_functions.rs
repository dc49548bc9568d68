//! Benchmark functions for exercising the solver.
//!
//! The catalog follows the collection at
//! <https://www.sfu.ca/~ssurjano/optimization.html>. These are pure
//! evaluators with no state; each lists its usual domain and global
//! minimum.

use crate::manifolds::EuclideanSpace;
use crate::problems::objective::Objective;

use std::f64::consts::{E, PI};

/// Example quadratic of the form f(x) = 0.5 * a * x^2 - b * x (1-D).
///
/// Minimizer is x* = b / a.
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
}

impl Objective<EuclideanSpace> for Quadratic {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let x0 = x[0];
        0.5 * self.a * x0 * x0 - self.b * x0
    }
}

/// Rosenbrock function, any dimension >= 2.
///
/// f(x) = sum_i b (x_{i+1} - x_i^2)^2 + (a - x_i)^2
///
/// Domain: x_i in [-5, 10]. Global minimum f = 0 at x = [1, ..., 1]
/// for the standard a = 1, b = 100.
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

impl Objective<EuclideanSpace> for Rosenbrock {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let mut f = 0.0;
        for i in 0..x.len() - 1 {
            f += self.b * (x[i + 1] - x[i] * x[i]).powi(2) + (self.a - x[i]).powi(2);
        }
        f
    }
}

/// Sphere function, any dimension.
///
/// Domain: [-5.12, 5.12]. Global minimum f = 0 at the origin.
pub struct Sphere;

impl Objective<EuclideanSpace> for Sphere {
    fn value(&self, x: &Vec<f64>) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

/// Rastrigin function, any dimension.
///
/// Domain: [-5.12, 5.12]. Global minimum f = 0 at the origin.
pub struct Rastrigin;

impl Objective<EuclideanSpace> for Rastrigin {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let an = 10.0 * x.len() as f64;
        an + x
            .iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
    }
}

/// Ackley function, any dimension.
///
/// Domain: [-32, 32]. Global minimum f = 0 at the origin.
pub struct Ackley;

impl Objective<EuclideanSpace> for Ackley {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let d = x.len() as f64;
        let a = 20.0;
        let b = 0.2;
        let c = 2.0 * PI;
        let sum_sq = x.iter().map(|xi| xi * xi).sum::<f64>();
        let sum_cos = x.iter().map(|xi| (c * xi).cos()).sum::<f64>();
        -a * (-b * (sum_sq / d).sqrt()).exp() - (sum_cos / d).exp() + a + E
    }
}

/// Schwefel function, any dimension.
///
/// Domain: [-512, 512]. Global minimum f ~= 0 at x = [420.9687, ...].
pub struct Schwefel;

impl Objective<EuclideanSpace> for Schwefel {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let a = 418.9829 * x.len() as f64;
        let b = x.iter().map(|xi| xi * xi.abs().sqrt().sin()).sum::<f64>();
        a - b
    }
}

/// Styblinski-Tang function, any dimension.
///
/// Domain: [-5, 5]. Global minimum f = -39.166 * d at
/// x = [-2.9035, ...].
pub struct StyblinskiTang;

impl Objective<EuclideanSpace> for StyblinskiTang {
    fn value(&self, x: &Vec<f64>) -> f64 {
        x.iter()
            .map(|xi| xi.powi(4) - 16.0 * xi * xi + 5.0 * xi)
            .sum::<f64>()
            / 2.0
    }
}

/// Six-hump camel function, 2-D.
///
/// Domain: x1 in [-3, 3], x2 in [-2, 2]. Global minimum f = -1.0316
/// at (-0.0898, 0.7126) and (0.0898, -0.7126).
pub struct SixHumpCamel;

impl Objective<EuclideanSpace> for SixHumpCamel {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let a = x[0] * x[0];
        let b = x[1] * x[1];
        let c = a * a;
        (4.0 - 2.1 * a + c / 3.0) * a + x[0] * x[1] + (-4.0 + 4.0 * b) * b
    }
}

/// Easom function, 2-D.
///
/// Domain: [-100, 100]. Global minimum f = -1 at (pi, pi).
pub struct Easom;

impl Objective<EuclideanSpace> for Easom {
    fn value(&self, x: &Vec<f64>) -> f64 {
        -x[0].cos() * x[1].cos() * (-(x[0] - PI).powi(2) - (x[1] - PI).powi(2)).exp()
    }
}

/// Eggholder function, 2-D.
///
/// Domain: [-512, 512]. Global minimum f = -959.6407 at
/// (512, 404.2319).
pub struct EggHolder;

impl Objective<EuclideanSpace> for EggHolder {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let a = (-x[1] - 47.0) * (x[1] + 0.5 * x[0] + 47.0).abs().sqrt().sin();
        let b = x[0] * (x[0] - (x[1] + 47.0)).abs().sqrt().sin();
        a - b
    }
}

/// Cross-in-tray function, 2-D.
///
/// Domain: [-10, 10]. Global minimum f = -2.0626 at
/// (+-1.3491, +-1.3491).
pub struct CrossInTray;

impl Objective<EuclideanSpace> for CrossInTray {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let a = x[1].sin() * x[0].sin();
        let b = (x[0] * x[0] + x[1] * x[1]).sqrt();
        let c = (100.0 - b / PI).abs();
        let e = (a * c.exp()).abs() + 1.0;
        e.powf(0.1) * -0.0001
    }
}
