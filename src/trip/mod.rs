//! Trip module containing participant management and expense recording

pub mod core;
pub mod expense;
pub mod manager;

pub use self::core::*;
pub use expense::*;
pub use manager::*;
