use herald_provider::DeliveryError;
use thiserror::Error;

/// Errors specific to the Slack sender.
///
/// These are internal errors that get converted into [`DeliveryError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum SlackError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Slack API returned an error response (non-2xx or `ok: false`).
    #[error("Slack API error: {0}")]
    Api(String),

    /// Slack accepted the message but the response carried no timestamp.
    #[error("Slack response did not include a message timestamp")]
    MissingTimestamp,
}

impl From<SlackError> for DeliveryError {
    fn from(err: SlackError) -> Self {
        let message = err.to_string();
        match err {
            SlackError::Http(_) => DeliveryError::Connection(message),
            SlackError::Api(_) => DeliveryError::Rejected(message),
            SlackError::MissingTimestamp => DeliveryError::InvalidResponse(message),
        }
    }
}
