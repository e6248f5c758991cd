use swarm_core::error::{CompatibilityError, ValidationError};

/// Errors surfaced by Swarm API calls.
#[derive(Debug, thiserror::Error)]
pub enum SwarmError {
    /// Caller-supplied arguments violate an API precondition; nothing was
    /// sent to the server.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The negotiated API version does not support the operation or
    /// field; nothing was sent to the server.
    #[error(transparent)]
    Compatibility(#[from] CompatibilityError),

    /// Network-level failure or an undecodable response body, surfaced
    /// unchanged from the transport.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("swarm responded [{status}]: {body}")]
    Response { status: u16, body: String },

    /// The client is misconfigured: bad base URL, unusable credentials or
    /// missing environment.
    #[error("configuration error: {0}")]
    Config(String),
}
