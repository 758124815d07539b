use anyhow::Result;
use std::path::Path;

/// Caller-supplied identity strategy.
///
/// When a resolver is present on the request it fully owns identity:
/// whatever it returns, including `None` or an empty string, is the final
/// `id`, and a failure is propagated rather than papered over with the
/// pragma fallback. Implementations must tolerate being handed any file
/// the crawler submits, manifests and mocks included; `contents` are the
/// raw bytes, with no encoding assumed.
pub trait IdentityResolver {
    fn resolve_identity(&self, contents: &[u8], path: &Path) -> Result<Option<String>>;
}
