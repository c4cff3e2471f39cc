use herald_core::Attachment;

use crate::error::DeliveryError;

/// Delivers a direct message to a resolved recipient.
pub trait MessageSender: Send + Sync {
    /// Returns the name of this sender, used in logs.
    fn name(&self) -> &str;

    /// Send `text` with `attachments` to `recipient` and return the
    /// platform's delivery timestamp.
    fn send(
        &self,
        recipient: &str,
        text: &str,
        attachments: &[Attachment],
    ) -> impl std::future::Future<Output = Result<String, DeliveryError>> + Send;
}
