mod solve;
mod types;
mod workspace;

pub use crate::solvers::common::step_policy::{
    ArmijoBacktracking, FixedStep, LineSearchContext, LineSearchPolicy, LineSearchResult,
};
pub use types::{GradientDescent, OptimizeResult, SolveError, Termination};
