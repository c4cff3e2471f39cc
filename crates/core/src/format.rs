//! Rendering of the notification body and its attachment.
//!
//! Output is Slack `mrkdwn`. Both functions are pure; whether the run failed
//! is decided only by [`step_failed`].

use crate::attachment::{Attachment, Color};

/// Organization whose pipelines the fallback link points at.
pub const CIRCLECI_ORGANIZATION: &str = "Clever";

/// Lower-case marker identifying a CircleCI step label.
const CIRCLECI_MARKER: &str = "circleci";

const FAILURE_BANNER: &str = "*:ohno: CI Failure*\n\n";
const SUCCESS_BANNER: &str = "*:successkid: CI Success*\n\n";
const CODE_FENCE: &str = "```";

/// A run failed exactly when it names a failing step.
pub fn step_failed(failed_step: &str) -> bool {
    !failed_step.is_empty()
}

/// URL of the CircleCI pipeline view for `repo` on `branch`.
pub fn circleci_pipeline_url(repo: &str, branch: &str) -> String {
    format!("https://app.circleci.com/pipelines/github/{CIRCLECI_ORGANIZATION}/{repo}?branch={branch}")
}

/// Resolve the link target. An explicit URL always wins; without one, a
/// CircleCI step gets a link to its pipeline view.
fn resolve_target_url(repo: &str, branch: &str, target_url: &str, failed_step: &str) -> String {
    if target_url.is_empty() && failed_step.to_lowercase().contains(CIRCLECI_MARKER) {
        return circleci_pipeline_url(repo, branch);
    }
    target_url.to_owned()
}

/// Render the message body.
///
/// Lines are, in order: banner, repo, branch, state and, for failed runs
/// only, a link to the failing step.
pub fn format_message(
    repo: &str,
    branch: &str,
    state: &str,
    target_url: &str,
    failed_step: &str,
) -> String {
    let failed = step_failed(failed_step);

    let mut message = String::from(if failed { FAILURE_BANNER } else { SUCCESS_BANNER });
    message.push_str(&format!("*Repo:*    `{repo}`\n"));
    message.push_str(&format!("*Branch:* `{branch}`\n"));
    message.push_str(&format!("*State:*    `{state}`\n"));

    if failed {
        let link = resolve_target_url(repo, branch, target_url, failed_step);
        message.push_str(&format!("*Link:*      <{link}|Failed step>\n"));
    }

    message
}

/// Render the single attachment carrying the description, and the failing
/// step when there is one, in a code block.
pub fn format_attachments(description: &str, failed_step: &str) -> Vec<Attachment> {
    let failed = step_failed(failed_step);

    let text = if failed {
        format!("\n{CODE_FENCE}\n{description}\n\n{failed_step}\n{CODE_FENCE}")
    } else {
        format!("\n{CODE_FENCE}\n{description}\n{CODE_FENCE}")
    };

    vec![Attachment::new(text, Color::for_outcome(failed))]
}
