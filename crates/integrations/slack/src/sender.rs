use herald_core::Attachment;
use herald_provider::{DeliveryError, MessageSender};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::SlackConfig;
use crate::error::SlackError;
use crate::types::{SlackApiResponse, SlackPostMessageRequest};

/// Slack sender that delivers direct messages via `chat.postMessage`.
///
/// Implements the [`MessageSender`] trait. One request per message, no
/// retries.
pub struct SlackSender {
    config: SlackConfig,
    client: Client,
}

impl SlackSender {
    /// Create a new Slack sender with the given configuration.
    ///
    /// The client uses the transport's default timeouts.
    pub fn new(config: SlackConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build the full URL for a Slack API method.
    fn api_url(&self, method: &str) -> String {
        format!("{}/{method}", self.config.api_base_url)
    }

    /// Send a `chat.postMessage` request to the Slack Web API and interpret
    /// the response.
    async fn post_message(
        &self,
        request: &SlackPostMessageRequest,
    ) -> Result<SlackApiResponse, SlackError> {
        let url = self.api_url("chat.postMessage");

        debug!(channel = %request.channel, "posting message to Slack");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::Api(format!("HTTP {status}: {body}")));
        }

        let api_response: SlackApiResponse = response.json().await?;

        if !api_response.ok {
            let error_code = api_response
                .error
                .unwrap_or_else(|| "unknown_error".to_owned());
            warn!(error = %error_code, "Slack rejected message");
            return Err(SlackError::Api(error_code));
        }

        Ok(api_response)
    }
}

impl MessageSender for SlackSender {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "slack"
    }

    #[instrument(skip(self, text, attachments), fields(sender = "slack"))]
    async fn send(
        &self,
        recipient: &str,
        text: &str,
        attachments: &[Attachment],
    ) -> Result<String, DeliveryError> {
        let request = SlackPostMessageRequest::direct(recipient, text, attachments);

        let api_response = self.post_message(&request).await?;

        let ts = api_response
            .timestamp()
            .map(str::to_owned)
            .ok_or(SlackError::MissingTimestamp)?;

        debug!(
            channel = api_response.channel.as_deref().unwrap_or("unknown"),
            ts = %ts,
            "Slack message delivered"
        );

        Ok(ts)
    }
}
