//! Orchestration of a single Herald run.
//!
//! A run resolves the contributor, renders the notification and delivers it,
//! strictly in that order. The first failure ends the run; the result is then
//! handed to a [`Reporter`] which publishes either the delivery timestamp or
//! the failure reason to the CI runner.

pub mod error;
pub mod relay;
pub mod report;

pub use error::RelayError;
pub use relay::{Delivery, Relay};
pub use report::{MESSAGE_TS_OUTPUT, Reporter, report};
