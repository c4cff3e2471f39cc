use serde::Deserialize;

/// Body of a successful `GET /users/slackID` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackIdResponse {
    /// Slack user ID of the contributor.
    #[serde(rename = "slackID", default)]
    pub slack_id: Option<String>,
}

impl SlackIdResponse {
    /// Parse a response body. Bodies that are not a JSON object yield an
    /// empty response rather than an error.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The recipient, if present and non-empty.
    pub fn recipient(self) -> Option<String> {
        self.slack_id.filter(|id| !id.is_empty())
    }
}
