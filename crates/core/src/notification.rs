use crate::attachment::Attachment;
use crate::format::{format_attachments, format_message};
use crate::invocation::Invocation;

/// A fully rendered message, ready to hand to a sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message body.
    pub text: String,
    /// Attachments, in display order.
    pub attachments: Vec<Attachment>,
}

impl Notification {
    /// Render the notification for an invocation.
    pub fn render(invocation: &Invocation) -> Self {
        Self {
            text: format_message(
                &invocation.repo,
                &invocation.branch,
                &invocation.state,
                &invocation.target_url,
                &invocation.failed_step,
            ),
            attachments: format_attachments(&invocation.description, &invocation.failed_step),
        }
    }
}
