//! User endpoints.

use reqwest::Method;
use serde_json::Value;

use swarm_core::params::Params;

use crate::client::Swarm;
use crate::error::SwarmError;

/// Filters for [`Users::list`].
#[derive(Debug, Clone, Default)]
pub struct ListUsersParams {
    /// Fields to show for each user; empty shows all fields.
    pub fields: Vec<String>,

    /// Usernames to fetch, comma-joined on the wire (API v9+).
    pub users: Vec<String>,

    /// Limit to members of one group.
    pub group: Option<String>,
}

/// User operations.
pub struct Users<'a> {
    swarm: &'a Swarm,
}

impl<'a> Users<'a> {
    pub(crate) fn new(swarm: &'a Swarm) -> Self {
        Self { swarm }
    }

    /// List Perforce users known to Swarm.
    pub async fn list(&self, params: &ListUsersParams) -> Result<Value, SwarmError> {
        if !params.users.is_empty() {
            self.swarm.require_version(9, "users filter")?;
        }

        let mut query = Params::new();
        query.comma_list("fields", &params.fields);
        query.comma_list("users", &params.users);
        query.opt_str("group", params.group.as_deref());

        self.swarm.request(Method::GET, "users", query, None).await
    }

    /// Unfollow all users and projects for the given user (API v8+).
    pub async fn unfollow_all(&self, username: &str) -> Result<Value, SwarmError> {
        self.swarm.require_version(8, "unfollowall")?;

        let path = format!("users/{}/unfollowall", urlencoding::encode(username));
        self.swarm.request(Method::POST, &path, Params::new(), None).await
    }
}
