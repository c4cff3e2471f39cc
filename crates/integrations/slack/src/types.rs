use herald_core::Attachment;
use serde::{Deserialize, Serialize};

// ─── chat.postMessage ────────────────────────────────────────────────

/// Request body for the Slack `chat.postMessage` API.
#[derive(Debug, Clone, Serialize)]
pub struct SlackPostMessageRequest {
    /// Target channel. Direct messages use `@{user_id}`.
    pub channel: String,

    /// Message content in Slack `mrkdwn`.
    pub text: String,

    /// Legacy secondary attachments rendered below the text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl SlackPostMessageRequest {
    /// Build a direct message to `user_id`.
    pub fn direct(user_id: &str, text: &str, attachments: &[Attachment]) -> Self {
        Self {
            channel: format!("@{user_id}"),
            text: text.to_owned(),
            attachments: attachments.to_vec(),
        }
    }
}

// ─── API Responses ───────────────────────────────────────────────────

/// Envelope returned by `chat.postMessage`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackApiResponse {
    /// Whether the API call succeeded.
    pub ok: bool,

    /// Error code when `ok` is `false`.
    pub error: Option<String>,

    /// Channel the message was posted to (present on success).
    pub channel: Option<String>,

    /// Timestamp identifier of the posted message (present on success).
    pub ts: Option<String>,

    /// The posted message as Slack stored it.
    pub message: Option<SlackMessage>,
}

impl SlackApiResponse {
    /// Timestamp of the delivered message, preferring the one on the stored
    /// message.
    pub fn timestamp(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(|m| m.ts.as_deref())
            .or(self.ts.as_deref())
            .filter(|ts| !ts.is_empty())
    }
}

/// Minimal representation of a Slack message object.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackMessage {
    pub ts: Option<String>,
}
