use crate::format::step_failed;

/// Parameters supplied by the CI runner for a single notification run.
///
/// Read once at process start and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Repository name (without the organization).
    pub repo: String,

    /// Branch that was built.
    pub branch: String,

    /// Build outcome label as reported by the CI provider (e.g. `success`).
    pub state: String,

    /// Free-form description rendered inside the attachment.
    pub description: String,

    /// CI contributor whose messaging identity is looked up.
    pub github_username: String,

    /// Label of the failing step. Empty when the run succeeded.
    pub failed_step: String,

    /// Link to the failing step. May be empty.
    pub target_url: String,
}

impl Invocation {
    /// Create an invocation for a successful run.
    pub fn new(
        repo: impl Into<String>,
        branch: impl Into<String>,
        state: impl Into<String>,
        description: impl Into<String>,
        github_username: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            branch: branch.into(),
            state: state.into(),
            description: description.into(),
            github_username: github_username.into(),
            failed_step: String::new(),
            target_url: String::new(),
        }
    }

    /// Set the failing step label.
    #[must_use]
    pub fn with_failed_step(mut self, failed_step: impl Into<String>) -> Self {
        self.failed_step = failed_step.into();
        self
    }

    /// Set the explicit target URL.
    #[must_use]
    pub fn with_target_url(mut self, target_url: impl Into<String>) -> Self {
        self.target_url = target_url.into();
        self
    }

    /// Whether this run failed, by the same rule the formatter uses.
    pub fn failed(&self) -> bool {
        step_failed(&self.failed_step)
    }
}
