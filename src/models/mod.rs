//! Courier dispatching domain models.
//!
//! Provides the data types for a dispatch batch: the stores handing out
//! jobs, the couriers taking them, and the log of committed assignments.
//!
//! # Ownership
//!
//! Couriers reference stores by name; stores never reference couriers.
//! There is no shared or cyclic ownership between the two.
//!
//! | u-courier | Role |
//! |-----------|------|
//! | Store | Job source, pays commission |
//! | Courier | Worker, fixed fee + eligibility |
//! | DispatchLog | Committed assignments |

mod courier;
mod delivery;
mod store;

pub use courier::{Courier, CourierReport};
pub use delivery::{Delivery, DispatchLog};
pub use store::Store;
