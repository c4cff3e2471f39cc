use herald_core::{Invocation, Notification};
use herald_provider::{IdentityResolver, MessageSender};
use tracing::{debug, info, instrument};

use crate::error::RelayError;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Recipient the message was delivered to.
    pub recipient: String,
    /// Delivery timestamp returned by the messaging platform.
    pub message_ts: String,
}

/// Sequences one identity lookup and one delivery.
///
/// Holds no state between runs; the resolver and sender carry their own
/// immutable configuration.
pub struct Relay<R, S> {
    resolver: R,
    sender: S,
}

impl<R, S> Relay<R, S>
where
    R: IdentityResolver,
    S: MessageSender,
{
    pub fn new(resolver: R, sender: S) -> Self {
        Self { resolver, sender }
    }

    /// Run the relay for one invocation.
    ///
    /// The sender is only called once the resolver has succeeded.
    #[instrument(
        skip_all,
        fields(repo = %invocation.repo, branch = %invocation.branch, failed = invocation.failed())
    )]
    pub async fn run(&self, invocation: &Invocation) -> Result<Delivery, RelayError> {
        let recipient = self
            .resolver
            .resolve(&invocation.github_username)
            .await
            .map_err(RelayError::Resolve)?;

        debug!(resolver = self.resolver.name(), %recipient, "contributor resolved");

        let notification = Notification::render(invocation);

        let message_ts = self
            .sender
            .send(&recipient, &notification.text, &notification.attachments)
            .await
            .map_err(RelayError::Delivery)?;

        info!(sender = self.sender.name(), %message_ts, "notification delivered");

        Ok(Delivery {
            recipient,
            message_ts,
        })
    }
}
