//! Core types for the Herald CI notification relay.
//!
//! Everything in this crate is pure: the invocation parameters a CI run
//! supplies, the attachment model understood by the messaging platform, and
//! the formatter that turns one into the other.

pub mod attachment;
pub mod format;
pub mod invocation;
pub mod notification;

pub use attachment::{Attachment, Color};
pub use format::{circleci_pipeline_url, format_attachments, format_message, step_failed};
pub use invocation::Invocation;
pub use notification::Notification;
