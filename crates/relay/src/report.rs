use std::io;

use crate::error::RelayError;
use crate::relay::Delivery;

/// Name of the output carrying the delivery timestamp.
pub const MESSAGE_TS_OUTPUT: &str = "messageTS";

/// Publishes the outcome of a run to the CI runner.
pub trait Reporter {
    /// Publish a named output value.
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Mark the run as failed with a human-readable reason.
    fn set_failed(&mut self, message: &str) -> io::Result<()>;
}

/// Publish a run's result: the timestamp output on success, exactly one
/// failure reason otherwise.
pub fn report<P: Reporter + ?Sized>(
    result: &Result<Delivery, RelayError>,
    reporter: &mut P,
) -> io::Result<()> {
    match result {
        Ok(delivery) => reporter.set_output(MESSAGE_TS_OUTPUT, &delivery.message_ts),
        Err(err) => reporter.set_failed(&err.to_string()),
    }
}
