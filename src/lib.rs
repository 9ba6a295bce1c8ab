//! Courier dispatching for multi-store delivery batches.
//!
//! Assigns every delivery job of a static batch to exactly one eligible
//! courier, balancing load and computing per-courier payouts.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Store`, `Courier`, `CourierReport`,
//!   `DispatchLog`, `Delivery`
//! - **`dispatching`**: Ranking rules, `RuleEngine` and `rank_couriers`
//! - **`dispatcher`**: The greedy batch driver (`dispatch`, `Dispatcher`)
//!   and `DispatchKpi`
//! - **`validation`**: Batch integrity checks (duplicate names, unknown
//!   stores, unassignable stores, out-of-range rates)
//! - **`config`**: TOML batch definitions
//!
//! # Example
//!
//! ```
//! use u_courier::dispatcher::dispatch;
//! use u_courier::models::{Courier, Store};
//!
//! let stores = vec![
//!     Store::new("Store 1", vec![50.0, 50.0], 0.05),
//!     Store::new("Store 2", vec![100.0], 0.15),
//! ];
//! let mut couriers = vec![
//!     Courier::new("Motoboy 1", 2.0, ["Store 1", "Store 2"]),
//!     Courier::new("Motoboy 2", 2.0, ["Store 1"]),
//! ];
//!
//! dispatch(&stores, &mut couriers).unwrap();
//!
//! assert_eq!(
//!     couriers[1].report().to_string(),
//!     "Motoboy 2 - Stores attended to: Store 1 - Delivery count: 1 - Profit: 4.5"
//! );
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod config;
pub mod dispatcher;
pub mod dispatching;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod models;
pub mod validation;

pub use error::{DispatchError, Result};
