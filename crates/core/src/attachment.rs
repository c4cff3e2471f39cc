use serde::{Deserialize, Serialize};

/// Sidebar color of a message attachment.
///
/// Serializes to the hex string the messaging platform expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Red, used when a step of the pipeline failed.
    #[serde(rename = "#FF0000")]
    Failure,
    /// Green, used when the pipeline succeeded.
    #[serde(rename = "#00FF00")]
    Success,
}

impl Color {
    /// Hex representation of the color.
    pub fn as_hex(self) -> &'static str {
        match self {
            Self::Failure => "#FF0000",
            Self::Success => "#00FF00",
        }
    }

    /// Pick the color for a run, given whether a step failed.
    pub fn for_outcome(failed: bool) -> Self {
        if failed { Self::Failure } else { Self::Success }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_hex())
    }
}

/// A rich-text block attached to a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Markdown body of the attachment.
    pub text: String,
    /// Sidebar color.
    pub color: Color,
}

impl Attachment {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}
