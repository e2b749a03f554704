//! # Tripsplit Core
//!
//! Shared expense tracking for group trips: record who paid for what,
//! aggregate spending by category and participant, and work out who owes
//! whom.
//!
//! ## Features
//!
//! - **Aggregation**: per-category and per-participant totals, total over every category and participant
//! - **Settlement**: balances against an equal split, settled with a greedy largest-debt-to-largest-credit matching
//! - **Trip book**: trips, participants and expenses over a pluggable async storage backend
//! - **Formatting**: currency rounding and transfer descriptions for summary views
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use bigdecimal::BigDecimal;
//! use tripsplit_core::compute_settlement;
//!
//! let participants = vec!["Alice".to_string(), "Bob".to_string()];
//! let totals = HashMap::from([
//!     ("Alice".to_string(), BigDecimal::from(100)),
//!     ("Bob".to_string(), BigDecimal::from(0)),
//! ]);
//!
//! let settlement = compute_settlement(&totals, &participants);
//! assert_eq!(settlement.len(), 1);
//! assert_eq!(settlement[0].from, "Bob");
//! assert_eq!(settlement[0].amount, BigDecimal::from(50));
//! ```

pub mod config;
pub mod settlement;
pub mod traits;
pub mod trip;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use settlement::*;
pub use traits::*;
pub use trip::*;
pub use types::*;
