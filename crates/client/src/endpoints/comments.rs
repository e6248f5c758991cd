//! Comment endpoints. The `comments` resource requires API v3+.

use reqwest::Method;
use serde_json::Value;

use swarm_core::params::Params;

use crate::client::{Body, Swarm};
use crate::error::SwarmError;

const MIN_VERSION: u32 = 3;

/// Filters for [`Comments::list`].
#[derive(Debug, Clone, Default)]
pub struct ListCommentsParams {
    /// A comment ID to seek past.
    pub after: Option<u32>,

    /// Maximum number of comments to return (server default: 100).
    pub limit: Option<u32>,

    /// Topic to filter by, e.g. `reviews/1234` or `changes/1234`.
    pub topic: Option<String>,

    /// Fields to show for each comment; empty shows all fields.
    pub fields: Vec<String>,
}

/// Optional fields for [`Comments::add`].
#[derive(Debug, Clone, Default)]
pub struct AddCommentParams {
    /// Task state to open the comment in, e.g. `open`.
    pub task_state: Option<String>,

    /// Comment flags, e.g. `closed`.
    pub flags: Vec<String>,

    /// Suppress the notification this comment would send.
    pub silence_notification: bool,

    /// Batch the notification with further edits instead of sending
    /// immediately.
    pub delay_notification: bool,
}

/// Fields for [`Comments::edit`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EditCommentParams {
    pub body: Option<String>,
    pub task_state: Option<String>,
    pub flags: Vec<String>,
    pub silence_notification: bool,
}

/// Comment operations.
pub struct Comments<'a> {
    swarm: &'a Swarm,
}

impl<'a> Comments<'a> {
    pub(crate) fn new(swarm: &'a Swarm) -> Self {
        Self { swarm }
    }

    /// List comments, optionally limited to one topic.
    pub async fn list(&self, params: &ListCommentsParams) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "comments")?;

        let mut query = Params::new();
        query.opt_int("after", params.after);
        query.opt_int("max", params.limit);
        query.opt_str("topic", params.topic.as_deref());
        query.comma_list("fields", &params.fields);

        self.swarm.request(Method::GET, "comments", query, None).await
    }

    /// Add a comment to a topic.
    pub async fn add(
        &self,
        topic: &str,
        body: &str,
        params: &AddCommentParams,
    ) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "comments")?;

        let mut payload = Params::new();
        payload.str("topic", topic);
        payload.str("body", body);
        payload.opt_str("taskState", params.task_state.as_deref());
        payload.str_list("flags[]", &params.flags);
        payload.toggle("silenceNotification", params.silence_notification);
        payload.toggle("delayNotification", params.delay_notification);

        self.swarm
            .request(Method::POST, "comments", Params::new(), Some(Body::Form(payload.to_form())))
            .await
    }

    /// Edit an existing comment.
    pub async fn edit(
        &self,
        comment_id: u32,
        params: &EditCommentParams,
    ) -> Result<Value, SwarmError> {
        self.swarm.require_version(MIN_VERSION, "comments")?;

        let mut payload = Params::new();
        payload.opt_str("body", params.body.as_deref());
        payload.opt_str("taskState", params.task_state.as_deref());
        payload.str_list("flags[]", &params.flags);
        payload.toggle("silenceNotification", params.silence_notification);

        let path = format!("comments/{comment_id}");
        self.swarm
            .request(Method::PATCH, &path, Params::new(), Some(Body::Form(payload.to_form())))
            .await
    }
}
