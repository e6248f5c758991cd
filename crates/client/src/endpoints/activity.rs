//! Activity stream endpoints.

use reqwest::Method;
use serde_json::Value;

use swarm_core::params::Params;

use crate::client::{Body, Swarm};
use crate::error::SwarmError;

/// Filters for [`Activity::list`].
#[derive(Debug, Clone, Default)]
pub struct ListActivityParams {
    /// An activity ID to seek past.
    pub after: Option<u32>,

    /// Maximum number of entries to return (server default: 100).
    pub limit: Option<u32>,

    /// Fields to show for each entry; empty shows all fields.
    pub fields: Vec<String>,

    /// Limit entries to one change.
    pub change: Option<u32>,

    /// Stream to fetch, e.g. `user-alice` or `project-gemini`.
    pub stream: Option<String>,

    /// Entry type to limit by, e.g. `change`, `comment`, `review`.
    pub activity_type: Option<String>,
}

/// Fields for [`Activity::create`].
#[derive(Debug, Clone)]
pub struct CreateActivityParams {
    /// Entry type, e.g. `job`, `change`, `review`.
    pub activity_type: String,
    /// User the entry is attributed to.
    pub user: String,
    /// Action text, e.g. `punted`.
    pub action: String,
    /// Target text, e.g. `review 1234`.
    pub target: String,

    /// Topic the entry links comments to, e.g. `reviews/1234`.
    pub topic: Option<String>,
    pub description: Option<String>,
    pub change: Option<u32>,
    /// Streams to publish the entry to.
    pub streams: Vec<String>,
    /// URL the target text links to.
    pub link: Option<String>,
}

/// Activity stream operations.
pub struct Activity<'a> {
    swarm: &'a Swarm,
}

impl<'a> Activity<'a> {
    pub(crate) fn new(swarm: &'a Swarm) -> Self {
        Self { swarm }
    }

    /// List activity entries.
    pub async fn list(&self, params: &ListActivityParams) -> Result<Value, SwarmError> {
        let mut query = Params::new();
        query.opt_int("after", params.after);
        query.opt_int("max", params.limit);
        query.comma_list("fields", &params.fields);
        query.opt_int("change", params.change);
        query.opt_str("stream", params.stream.as_deref());
        query.opt_str("type", params.activity_type.as_deref());

        self.swarm.request(Method::GET, "activity", query, None).await
    }

    /// Create an activity entry. Requires admin-level access.
    pub async fn create(&self, params: &CreateActivityParams) -> Result<Value, SwarmError> {
        let mut payload = Params::new();
        payload.str("type", &params.activity_type);
        payload.str("user", &params.user);
        payload.str("action", &params.action);
        payload.str("target", &params.target);
        payload.opt_str("topic", params.topic.as_deref());
        payload.opt_str("description", params.description.as_deref());
        payload.opt_int("change", params.change);
        payload.str_list("streams[]", &params.streams);
        payload.opt_str("link", params.link.as_deref());

        self.swarm
            .request(Method::POST, "activity", Params::new(), Some(Body::Form(payload.to_form())))
            .await
    }
}
