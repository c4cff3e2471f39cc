use herald_provider::{DeliveryError, ResolveError};
use thiserror::Error;

/// Terminal failure of a run. The `Display` output is the failure reason
/// published to the CI runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The contributor could not be resolved; nothing was sent.
    #[error("Error retrieving slackID: {0}")]
    Resolve(#[source] ResolveError),

    /// The message could not be delivered.
    #[error("Error sending message via Slack Client: {0}")]
    Delivery(#[source] DeliveryError),
}
