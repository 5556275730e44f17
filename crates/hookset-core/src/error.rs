use thiserror::Error;

/// Host misuse surfaced by a primitive at the call site.
///
/// Callback failures are never wrapped here; a panicking callback unwinds
/// straight to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("`{hook}` requires {capability}, which this host does not provide")]
    Unsupported {
        hook: &'static str,
        capability: &'static str,
    },
}
