use crate::error::ResolveError;

/// Maps a CI contributor identifier to a messaging-platform recipient.
///
/// Implementations make at most one lookup per call and never cache.
pub trait IdentityResolver: Send + Sync {
    /// Returns the name of this resolver, used in logs.
    fn name(&self) -> &str;

    /// Resolve `contributor` to a recipient identifier.
    fn resolve(
        &self,
        contributor: &str,
    ) -> impl std::future::Future<Output = Result<String, ResolveError>> + Send;
}
