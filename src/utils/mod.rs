//! Utility modules

pub mod format;
pub mod memory_storage;
pub mod validation;

pub use format::*;
pub use memory_storage::*;
pub use validation::*;
