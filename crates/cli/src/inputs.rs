use clap::Args;
use herald_core::Invocation;
use thiserror::Error;

/// Parameters supplied by the CI runner.
///
/// Each flag falls back to the runner's `INPUT_<NAME>` variable. Values are
/// trimmed. Only the contributor's username must be non-empty; every other
/// input may be blank and is rendered as given.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Branch that was built.
    #[arg(long, env = "INPUT_BRANCH")]
    pub branch: Option<String>,

    /// Description rendered in the message attachment.
    #[arg(long, env = "INPUT_DESCRIPTION")]
    pub description: Option<String>,

    /// GitHub username of the contributor to notify.
    #[arg(long, env = "INPUT_GITHUBUSERNAME")]
    pub github_username: Option<String>,

    /// Repository name.
    #[arg(long, env = "INPUT_REPO")]
    pub repo: Option<String>,

    /// Label of the failing step; leave empty for a successful run.
    #[arg(long, env = "INPUT_FAILEDSTEP")]
    pub failed_step: Option<String>,

    /// Build outcome state.
    #[arg(long, env = "INPUT_STATE")]
    pub state: Option<String>,

    /// Link to the failing step.
    #[arg(long, env = "INPUT_TARGETURL")]
    pub target_url: Option<String>,
}

/// A required input was absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Input required and not supplied: {0}")]
pub struct MissingInput(pub &'static str);

impl InputArgs {
    /// Validate the inputs and build the invocation.
    pub fn into_invocation(self) -> Result<Invocation, MissingInput> {
        let github_username = required(self.github_username, "githubUsername")?;

        Ok(Invocation::new(
            optional(self.repo),
            optional(self.branch),
            optional(self.state),
            optional(self.description),
            github_username,
        )
        .with_failed_step(optional(self.failed_step))
        .with_target_url(optional(self.target_url)))
    }
}

fn optional(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}

fn required(value: Option<String>, name: &'static str) -> Result<String, MissingInput> {
    let value = optional(value);
    if value.is_empty() {
        return Err(MissingInput(name));
    }
    Ok(value)
}
