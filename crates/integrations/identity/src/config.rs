/// Configuration for the HTTP identity resolver.
#[derive(Clone)]
pub struct IdentityConfig {
    /// Base URL of the identity service, including the scheme.
    pub base_url: String,

    /// Username for HTTP basic authentication.
    pub username: String,

    /// Password for HTTP basic authentication.
    pub password: String,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl IdentityConfig {
    /// Create a new configuration. A trailing slash on `base_url` is dropped.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            username: username.into(),
            password: password.into(),
        }
    }

    /// URL of the contributor lookup endpoint.
    pub fn lookup_url(&self) -> String {
        format!("{}/users/slackID", self.base_url)
    }
}
