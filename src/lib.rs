//! descent: a tiny gradient-descent toolbox
//!
//! - `Space`: an abstraction of vector spaces
//! - `EuclideanSpace` (`Vec<f64>`): its concrete implementation
//! - `Objective`: a value-only objective function interface
//! - `CentralDifference`: finite-difference gradient estimation
//! - `GradientDescent`: gradient descent with backtracking line search
//!   and momentum
//! - `report`: trajectory recording and contour-grid reporting
//!
//! Gradients are never supplied by the user: the solver probes the
//! objective with symmetric finite differences. Start with simple
//! unconstrained minimization on R^n.

pub mod manifolds;
pub mod problems;
pub mod report;
pub mod runner;
pub mod solvers;

pub use manifolds::{EuclideanSpace, Space};
pub use problems::finite_diff::CentralDifference;
pub use problems::objective::Objective;
pub use solvers::gd::{GradientDescent, OptimizeResult, SolveError, Termination};
