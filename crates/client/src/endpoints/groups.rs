//! Group management endpoints.
//!
//! The whole `groups` resource requires API v2+; every operation checks
//! that gate before building its request.

use reqwest::Method;
use serde_json::Value;

use swarm_core::error::ValidationError;
use swarm_core::params::Params;

use crate::client::{Body, Swarm};
use crate::error::SwarmError;

const MIN_VERSION: u32 = 2;

/// Filters for [`Groups::list`].
#[derive(Debug, Clone, Default)]
pub struct ListGroupsParams {
    /// A group ID to seek past. Groups up to and including this ID are
    /// excluded and do not count towards `limit`; commonly set to the
    /// `lastSeen` property of a previous page.
    pub after: Option<String>,

    /// Maximum number of groups to return (server default: 100).
    pub limit: Option<u32>,

    /// Fields to show for each group; empty shows all fields.
    pub fields: Vec<String>,

    /// Keywords matched against group ID, name and description.
    pub keywords: Option<String>,
}

/// Fields for [`Groups::create`].
///
/// At least one of `users`, `owners` or `subgroups` must be non-empty.
#[derive(Debug, Clone, Default)]
pub struct CreateGroupParams {
    pub users: Vec<String>,
    pub owners: Vec<String>,
    pub subgroups: Vec<String>,

    /// Full display name for the group.
    pub name: Option<String>,
    pub description: Option<String>,
    pub email_address: Option<String>,

    /// Email members when a new review is requested.
    pub notify_reviews: bool,
    /// Email members when a change is committed.
    pub notify_commits: bool,
    /// Send to the configured address instead of expanding individual
    /// member addresses.
    pub use_mailing_list: bool,

    pub max_results: Option<u32>,
    pub max_scan_rows: Option<u32>,
    pub max_lock_time: Option<u32>,
    pub max_open_files: Option<u32>,
    pub max_memory: Option<u32>,
    pub timeout: Option<u32>,
    pub password_timeout: Option<u32>,
}

/// Fields for [`Groups::edit`]. Unset fields are left untouched on the
/// server.
#[derive(Debug, Clone, Default)]
pub struct EditGroupParams {
    pub users: Vec<String>,
    pub owners: Vec<String>,
    pub subgroups: Vec<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub email_address: Option<String>,
    pub notify_reviews: bool,
    pub notify_commits: bool,
    pub use_mailing_list: bool,
}

/// Group management operations.
pub struct Groups<'a> {
    swarm: &'a Swarm,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(swarm: &'a Swarm) -> Self {
        Self { swarm }
    }

    /// Get the complete list of groups.
    pub async fn list(&self, params: &ListGroupsParams) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "groups")?;

        let mut query = Params::new();
        query.opt_str("after", params.after.as_deref());
        query.opt_int("max", params.limit);
        query.comma_list("fields", &params.fields);
        query.opt_str("keywords", params.keywords.as_deref());

        self.swarm.request(Method::GET, "groups", query, None).await
    }

    /// Retrieve information about a group.
    pub async fn get_info(&self, identifier: &str, fields: &[String]) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "groups")?;

        let mut query = Params::new();
        query.comma_list("fields", fields);

        let path = format!("groups/{}", urlencoding::encode(identifier));
        self.swarm.request(Method::GET, &path, query, None).await
    }

    /// Create a new group.
    ///
    /// Servers that accept API v11 take the payload as a JSON body; older
    /// servers only accept this endpoint form-encoded, so the encoding is
    /// picked from the server's version metadata.
    pub async fn create(
        &self,
        identifier: &str,
        params: &CreateGroupParams,
    ) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "groups")?;

        if params.users.is_empty() && params.owners.is_empty() && params.subgroups.is_empty() {
            return Err(ValidationError(
                "at least one of users, owners or subgroups is required".to_string(),
            )
            .into());
        }

        let mut payload = Params::new();
        payload.str("Group", identifier);
        payload.str_list("Users", &params.users);
        payload.str_list("Owners", &params.owners);
        payload.str_list("Subgroups", &params.subgroups);
        payload.opt_str("config[name]", params.name.as_deref());
        payload.opt_str("config[description]", params.description.as_deref());
        payload.opt_str("config[emailAddress]", params.email_address.as_deref());
        payload.toggle("config[emailFlags][reviews]", params.notify_reviews);
        payload.toggle("config[emailFlags][commits]", params.notify_commits);
        payload.toggle("config[useMailingList]", params.use_mailing_list);
        payload.opt_int("MaxResults", params.max_results);
        payload.opt_int("MaxScanRows", params.max_scan_rows);
        payload.opt_int("MaxLockTime", params.max_lock_time);
        payload.opt_int("MaxOpenFiles", params.max_open_files);
        payload.opt_int("MaxMemory", params.max_memory);
        payload.opt_int("Timeout", params.timeout);
        payload.opt_int("PasswordTimeout", params.password_timeout);

        let version = self.swarm.get_version().await?;
        let body = if version.api_versions.contains(&11) {
            Body::Json(payload.to_json())
        } else {
            Body::Form(payload.to_form())
        };

        self.swarm
            .request(Method::POST, "groups", Params::new(), Some(body))
            .await
    }

    /// Change the settings of a group. Only super users and group owners
    /// can perform this action.
    pub async fn edit(
        &self,
        identifier: &str,
        params: &EditGroupParams,
    ) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "groups")?;

        let mut payload = Params::new();
        payload.str_list("Users", &params.users);
        payload.str_list("Owners", &params.owners);
        payload.str_list("Subgroups", &params.subgroups);
        payload.opt_str("config[name]", params.name.as_deref());
        payload.opt_str("config[description]", params.description.as_deref());
        payload.opt_str("config[emailAddress]", params.email_address.as_deref());
        payload.toggle("config[emailFlags][reviews]", params.notify_reviews);
        payload.toggle("config[emailFlags][commits]", params.notify_commits);
        payload.toggle("config[useMailingList]", params.use_mailing_list);

        let path = format!("groups/{}", urlencoding::encode(identifier));
        self.swarm
            .request(Method::PATCH, &path, Params::new(), Some(Body::Form(payload.to_form())))
            .await
    }

    /// Delete a group. Only super users and group owners can perform this
    /// action.
    pub async fn delete(&self, identifier: &str) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "groups")?;

        let path = format!("groups/{}", urlencoding::encode(identifier));
        self.swarm.request(Method::DELETE, &path, Params::new(), None).await
    }
}
