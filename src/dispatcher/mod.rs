//! Greedy batch dispatch and KPI evaluation.
//!
//! # Algorithm
//!
//! `Dispatcher` walks stores in order and hands each job to the top-ranked
//! eligible courier, re-ranking after every commit. It is not optimal, but
//! it is deterministic and keeps courier load even.
//!
//! # KPI
//!
//! `DispatchKpi` computes payout and load-balance metrics from the
//! resulting dispatch log.

mod greedy;
mod kpi;

pub use greedy::{dispatch, Batch, Dispatcher};
pub use kpi::DispatchKpi;
