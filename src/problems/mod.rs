pub mod finite_diff;
pub mod objective;
pub mod test_functions;

pub use finite_diff::CentralDifference;
pub use objective::Objective;
