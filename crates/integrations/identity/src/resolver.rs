use herald_provider::{IdentityResolver, ResolveError};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::IdentityConfig;
use crate::error::IdentityError;
use crate::types::SlackIdResponse;

/// Resolves contributors through the identity service's
/// `GET /users/slackID` endpoint.
///
/// Implements the [`IdentityResolver`] trait. One request per lookup, no
/// retries, no caching.
pub struct HttpIdentityResolver {
    config: IdentityConfig,
    client: Client,
}

impl HttpIdentityResolver {
    /// Create a new resolver with the given configuration.
    ///
    /// The client uses the transport's default timeouts.
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Perform the lookup and interpret the response.
    async fn lookup(&self, contributor: &str) -> Result<String, IdentityError> {
        let url = self.config.lookup_url();

        debug!(contributor, "looking up Slack ID");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .query(&[("githubUsername", contributor)])
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(IdentityError::NotFound);
        }

        if !status.is_success() {
            return Err(IdentityError::UnexpectedStatus(status));
        }

        let body = response.text().await?;

        SlackIdResponse::parse(&body).recipient().ok_or_else(|| {
            warn!(contributor, "identity service returned success without a Slack ID");
            IdentityError::EmptyRecipient
        })
    }
}

impl IdentityResolver for HttpIdentityResolver {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ci-integrations"
    }

    #[instrument(skip(self), fields(resolver = "ci-integrations"))]
    async fn resolve(&self, contributor: &str) -> Result<String, ResolveError> {
        self.lookup(contributor).await.map_err(ResolveError::from)
    }
}
