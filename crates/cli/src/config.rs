use clap::Args;
use herald_identity::IdentityConfig;
use herald_slack::SlackConfig;
use herald_slack::config::DEFAULT_API_BASE_URL;
use thiserror::Error;

/// Service endpoints and credentials, sourced from the environment.
#[derive(Args)]
pub struct ConfigArgs {
    /// Base URL of the identity service.
    #[arg(long, env = "CIRCLE_CI_INTEGRATIONS_URL")]
    pub identity_url: Option<String>,

    /// Basic-auth username for the identity service.
    #[arg(long, env = "CIRCLE_CI_INTEGRATIONS_USERNAME")]
    pub identity_username: Option<String>,

    /// Basic-auth password for the identity service.
    #[arg(long, env = "CIRCLE_CI_INTEGRATIONS_PASSWORD", hide_env_values = true)]
    pub identity_password: Option<String>,

    /// Slack bot token.
    #[arg(long, env = "SLACK_BOT_TOKEN", hide_env_values = true)]
    pub slack_token: Option<String>,

    /// Base URL of the Slack Web API.
    #[arg(long, env = "SLACK_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub slack_api_url: String,
}

impl std::fmt::Debug for ConfigArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigArgs")
            .field("identity_url", &self.identity_url)
            .field("identity_username", &self.identity_username)
            .field("identity_password", &"[REDACTED]")
            .field("slack_token", &"[REDACTED]")
            .field("slack_api_url", &self.slack_api_url)
            .finish()
    }
}

/// A required configuration value was absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
}

/// Immutable configuration for one run, built once at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub identity: IdentityConfig,
    pub slack: SlackConfig,
}

impl RelayConfig {
    /// Validate the raw arguments. Every missing value is reported under the
    /// name of its environment variable.
    pub fn from_args(args: ConfigArgs) -> Result<Self, ConfigError> {
        let url = require(args.identity_url, "CIRCLE_CI_INTEGRATIONS_URL")?;
        let username = require(args.identity_username, "CIRCLE_CI_INTEGRATIONS_USERNAME")?;
        let password = require(args.identity_password, "CIRCLE_CI_INTEGRATIONS_PASSWORD")?;
        let token = require(args.slack_token, "SLACK_BOT_TOKEN")?;

        Ok(Self {
            identity: IdentityConfig::new(url, username, password),
            slack: SlackConfig::new(token).with_api_base_url(args.slack_api_url),
        })
    }
}

fn require(value: Option<String>, env: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(env))
}
