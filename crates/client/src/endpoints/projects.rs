//! Project endpoints.

use reqwest::Method;
use serde_json::Value;

use swarm_core::error::ValidationError;
use swarm_core::params::Params;

use crate::client::{Body, Swarm};
use crate::error::SwarmError;

/// Fields for [`Projects::create`]. `members` must be non-empty.
#[derive(Debug, Clone, Default)]
pub struct CreateProjectParams {
    pub members: Vec<String>,
    pub owners: Vec<String>,
    pub description: Option<String>,

    /// Restrict visibility to members and owners.
    pub private_project: bool,
}

/// Fields for [`Projects::edit`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EditProjectParams {
    pub name: Option<String>,
    pub members: Vec<String>,
    pub owners: Vec<String>,
    pub description: Option<String>,
    pub private_project: bool,
}

/// Project operations.
pub struct Projects<'a> {
    swarm: &'a Swarm,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(swarm: &'a Swarm) -> Self {
        Self { swarm }
    }

    /// List all projects visible to the authenticated user.
    pub async fn list(&self, fields: &[String]) -> Result<Value, SwarmError> {
        let mut query = Params::new();
        query.comma_list("fields", fields);

        self.swarm.request(Method::GET, "projects", query, None).await
    }

    /// Retrieve information about a project.
    pub async fn get_info(&self, identifier: &str, fields: &[String]) -> Result<Value, SwarmError> {
        let mut query = Params::new();
        query.comma_list("fields", fields);

        let path = format!("projects/{}", urlencoding::encode(identifier));
        self.swarm.request(Method::GET, &path, query, None).await
    }

    /// Create a new project.
    pub async fn create(
        &self,
        name: &str,
        params: &CreateProjectParams,
    ) -> Result<Value, SwarmError> {
        if params.members.is_empty() {
            return Err(ValidationError("at least one member is required".to_string()).into());
        }

        let mut payload = Params::new();
        payload.str("name", name);
        payload.str_list("members", &params.members);
        payload.str_list("owners", &params.owners);
        payload.opt_str("description", params.description.as_deref());
        payload.toggle("private", params.private_project);

        self.swarm
            .request(Method::POST, "projects", Params::new(), Some(Body::Form(payload.to_form())))
            .await
    }

    /// Change project settings. Only project members and owners can
    /// perform this action.
    pub async fn edit(
        &self,
        identifier: &str,
        params: &EditProjectParams,
    ) -> Result<Value, SwarmError> {
        let mut payload = Params::new();
        payload.opt_str("name", params.name.as_deref());
        payload.str_list("members", &params.members);
        payload.str_list("owners", &params.owners);
        payload.opt_str("description", params.description.as_deref());
        payload.toggle("private", params.private_project);

        let path = format!("projects/{}", urlencoding::encode(identifier));
        self.swarm
            .request(Method::PATCH, &path, Params::new(), Some(Body::Form(payload.to_form())))
            .await
    }

    /// Delete a project.
    pub async fn delete(&self, identifier: &str) -> Result<Value, SwarmError> {
        let path = format!("projects/{}", urlencoding::encode(identifier));
        self.swarm.request(Method::DELETE, &path, Params::new(), None).await
    }
}
