use herald_provider::ResolveError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors specific to the HTTP identity resolver.
///
/// These are internal errors that get converted into [`ResolveError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// An HTTP-level transport error occurred.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The service answered 404 for this contributor.
    #[error("no recipient for contributor")]
    NotFound,

    /// The service answered 2xx without a recipient.
    #[error("empty recipient returned")]
    EmptyRecipient,

    /// The service answered with a status other than 2xx or 404.
    #[error("Request failed with status code {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),
}

impl From<IdentityError> for ResolveError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotFound => ResolveError::NotFound,
            IdentityError::EmptyRecipient => ResolveError::EmptyRecipient,
            e @ (IdentityError::Http(_) | IdentityError::UnexpectedStatus(_)) => {
                ResolveError::Transport(e.to_string())
            }
        }
    }
}
