//! Errors raised before a request is dispatched.
//!
//! Both types describe conditions the caller can always fix locally:
//! either the supplied arguments violate a precondition the server
//! enforces, or the negotiated API version is too old for the requested
//! feature. Transport failures are not modeled here; they belong to the
//! shell.

/// Caller-supplied arguments violate a precondition of the Swarm API.
///
/// No request has been sent when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// The negotiated API version does not support the requested operation
/// or field.
///
/// Carries the feature name and the minimum version it needs, so callers
/// can decide between upgrading the server and omitting the feature. No
/// request has been sent when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{feature} is supported with API version {min_version}+, server is negotiated at v{current}")]
pub struct CompatibilityError {
    /// Human-readable name of the gated operation or field.
    pub feature: String,
    /// Minimum API version the feature needs.
    pub min_version: u32,
    /// The version the client negotiated from its configured URL.
    pub current: u32,
}
