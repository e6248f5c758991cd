//! Client configuration.

use crate::error::SwarmError;

/// Connection settings for a Swarm server.
///
/// The URL must point at a versioned API root such as
/// `https://swarm.example.com/api/v9`; the trailing segment is the API
/// version every call is gated against. Authentication is HTTP Basic with
/// a username and a ticket or password.
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    pub url: String,
    pub user: String,
    pub token: String,
}

impl SwarmConfig {
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            token: token.into(),
        }
    }

    /// Load settings from the `SWARM_URL`, `SWARM_USER` and `SWARM_TOKEN`
    /// environment variables.
    pub fn from_env() -> Result<Self, SwarmError> {
        Ok(Self {
            url: std::env::var("SWARM_URL")
                .map_err(|_| SwarmError::Config("SWARM_URL environment variable not set".into()))?,
            user: std::env::var("SWARM_USER")
                .map_err(|_| SwarmError::Config("SWARM_USER environment variable not set".into()))?,
            token: std::env::var("SWARM_TOKEN")
                .map_err(|_| SwarmError::Config("SWARM_TOKEN environment variable not set".into()))?,
        })
    }

    /// Apply optional overrides on top of the loaded settings.
    pub fn with_overrides(mut self, url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(token) = token {
            self.token = token;
        }
        self
    }
}
