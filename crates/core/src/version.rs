//! API version preconditions.
//!
//! Swarm gates whole resources and individual fields behind the major API
//! version the client negotiated. Every gated operation calls [`require`]
//! before building its request, so an unsupported call fails without any
//! network traffic.

use crate::error::CompatibilityError;

/// Check a feature against the negotiated API version.
///
/// Returns `Ok(())` when `current >= min_version`; otherwise a
/// [`CompatibilityError`] naming the feature and both versions.
pub fn require(current: u32, min_version: u32, feature: &str) -> Result<(), CompatibilityError> {
    if current < min_version {
        return Err(CompatibilityError {
            feature: feature.to_string(),
            min_version,
            current,
        });
    }

    Ok(())
}
