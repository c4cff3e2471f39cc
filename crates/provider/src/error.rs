use thiserror::Error;

/// Errors returned by an [`IdentityResolver`](crate::IdentityResolver).
///
/// The two lookup outcomes the relay distinguishes carry fixed messages;
/// anything else is propagated with the underlying message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The identity service has no recipient for this contributor.
    #[error("SlackID not found for github user")]
    NotFound,

    /// The identity service answered successfully but without a recipient.
    /// It is expected to answer 404 instead, so this is an upstream anomaly.
    #[error("Empty SlackID found for github user")]
    EmptyRecipient,

    /// Transport failure or an unexpected status.
    #[error("{0}")]
    Transport(String),
}

/// Errors returned by a [`MessageSender`](crate::MessageSender).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// A network or transport-level error occurred.
    #[error("{0}")]
    Connection(String),

    /// The messaging platform rejected the request.
    #[error("{0}")]
    Rejected(String),

    /// The response could not be interpreted.
    #[error("{0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_error_messages() {
        assert_eq!(
            ResolveError::NotFound.to_string(),
            "SlackID not found for github user"
        );
        assert_eq!(
            ResolveError::EmptyRecipient.to_string(),
            "Empty SlackID found for github user"
        );
    }

    #[test]
    fn transport_error_is_verbatim() {
        let err = ResolveError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn delivery_error_is_verbatim() {
        assert_eq!(
            DeliveryError::Rejected("Slack API error: channel_not_found".into()).to_string(),
            "Slack API error: channel_not_found"
        );
        assert_eq!(
            DeliveryError::Connection("reset".into()).to_string(),
            "reset"
        );
    }
}
