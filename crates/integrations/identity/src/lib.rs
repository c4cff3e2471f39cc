//! HTTP identity resolver for Herald.
//!
//! This crate implements the
//! [`IdentityResolver`](herald_provider::IdentityResolver) trait against the
//! CI integrations service, which maps a GitHub username to a Slack user ID.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use herald_identity::{HttpIdentityResolver, IdentityConfig};
//!
//! let config = IdentityConfig::new("https://ci-integrations.example.com", "ci", "secret");
//! let resolver = HttpIdentityResolver::new(config);
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

pub use config::IdentityConfig;
pub use error::IdentityError;
pub use resolver::HttpIdentityResolver;
pub use types::SlackIdResponse;
