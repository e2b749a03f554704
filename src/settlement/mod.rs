//! Settlement engine: expense aggregation, balances and greedy transfer matching

pub mod aggregator;
pub mod solver;
pub mod summary;

pub use aggregator::*;
pub use solver::*;
pub use summary::*;
