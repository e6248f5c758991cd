//! Review lifecycle endpoints.
//!
//! Unlike `groups` there is no resource-wide version gate; individual
//! operations and filter fields carry their own minimums.

use reqwest::Method;
use serde_json::Value;

use swarm_core::params::Params;

use crate::client::{Body, Swarm};
use crate::error::SwarmError;

/// Filters for [`Reviews::list`].
///
/// The three `Option<bool>` filters are tri-state: unset returns
/// everything, while an explicit `true`/`false` goes out as `"1"`/`"0"`.
#[derive(Debug, Clone, Default)]
pub struct ListReviewsParams {
    /// A review ID to seek past; useful for pagination.
    pub after: Option<u32>,

    /// Maximum number of reviews to return (server default: 1000).
    /// Server-side filtering may exclude some reviews for permissions
    /// reasons.
    pub limit: Option<u32>,

    /// Fields to show for each review; empty shows all fields.
    pub fields: Vec<String>,

    /// Authors to limit reviews by (API v2+). Reviews with any of the
    /// given authors are returned.
    pub authors: Vec<String>,

    /// Change IDs to limit reviews by.
    pub changes: Vec<u32>,

    /// Limit to reviews with or without reviewers.
    pub has_reviewers: Option<bool>,

    /// Review IDs to fetch; cannot be combined with `limit`.
    pub ids: Vec<u32>,

    /// Keywords matched against description, participants and projects.
    pub keywords: Option<String>,

    /// Participants to limit reviews by.
    pub participants: Vec<String>,

    /// Projects to limit reviews by.
    pub projects: Vec<String>,

    /// Workflow states to limit reviews by.
    pub states: Vec<String>,

    /// Limit to reviews with passing or failing tests.
    pub passes_tests: Option<bool>,

    /// `YYYY-mm-dd`; only reviews whose last update predates this date.
    pub not_updated_since: Option<String>,

    /// `up` or `down`; reviews the authenticated user has voted on.
    pub has_voted: Option<String>,

    /// Limit to reviews commented on by the authenticated user.
    pub my_comments: Option<bool>,
}

/// Optional fields for [`Reviews::create`].
#[derive(Debug, Clone, Default)]
pub struct CreateReviewParams {
    /// Description for the new review; defaults to the change description.
    pub description: Option<String>,

    /// Reviewers for the new review.
    pub reviewers: Vec<String>,

    /// Reviewers whose approval is mandatory (API v2+).
    pub required_reviewers: Vec<String>,

    /// Reviewer groups (API v7+).
    pub reviewer_groups: Vec<String>,
}

/// A vote cast on a review by the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
    /// Retract a previous vote.
    Clear,
}

impl Vote {
    fn as_str(self) -> &'static str {
        match self {
            Vote::Up => "up",
            Vote::Down => "down",
            Vote::Clear => "clear",
        }
    }
}

/// Review operations.
pub struct Reviews<'a> {
    swarm: &'a Swarm,
}

impl<'a> Reviews<'a> {
    pub(crate) fn new(swarm: &'a Swarm) -> Self {
        Self { swarm }
    }

    /// Get the list of available reviews.
    pub async fn list(&self, params: &ListReviewsParams) -> Result<Value, SwarmError> {
        if !params.authors.is_empty() {
            self.swarm.require_version(2, "author filter")?;
        }

        let mut query = Params::new();
        query.opt_int("after", params.after);
        query.opt_int("max", params.limit);
        query.comma_list("fields", &params.fields);
        query.str_list("author", &params.authors);
        query.int_list("change", &params.changes);
        query.flag("hasReviewers", params.has_reviewers);
        query.int_list("ids", &params.ids);
        query.opt_str("keywords", params.keywords.as_deref());
        query.str_list("participants", &params.participants);
        query.str_list("project", &params.projects);
        query.str_list("state", &params.states);
        query.flag("passesTests", params.passes_tests);
        query.opt_str("notUpdatedSince", params.not_updated_since.as_deref());
        query.opt_str("hasVoted", params.has_voted.as_deref());
        query.flag("myComments", params.my_comments);

        self.swarm.request(Method::GET, "reviews", query, None).await
    }

    /// Retrieve information about a review.
    pub async fn get_info(&self, review_id: u32, fields: &[String]) -> Result<Value, SwarmError> {
        let mut query = Params::new();
        query.comma_list("fields", fields);

        let path = format!("reviews/{review_id}");
        self.swarm.request(Method::GET, &path, query, None).await
    }

    /// Get the allowed state transitions for a review (API v9+).
    ///
    /// `up_voters` lists users whose up-vote should be assumed when
    /// computing the transitions, e.g. a user who has not voted yet but
    /// would cast the last required vote.
    pub async fn get_transitions(
        &self,
        review_id: u32,
        up_voters: Option<&str>,
    ) -> Result<Value, SwarmError> {
        self.swarm.require_version(9, "review transitions")?;

        let mut query = Params::new();
        query.opt_str("upVoters", up_voters);

        let path = format!("reviews/{review_id}/transitions");
        self.swarm.request(Method::GET, &path, query, None).await
    }

    /// Create a review for a change.
    pub async fn create(
        &self,
        change: u32,
        params: &CreateReviewParams,
    ) -> Result<Value, SwarmError> {
        if !params.required_reviewers.is_empty() {
            self.swarm.require_version(2, "required reviewers")?;
        }
        if !params.reviewer_groups.is_empty() {
            self.swarm.require_version(7, "reviewer groups")?;
        }

        let mut payload = Params::new();
        payload.int("change", change);
        payload.opt_str("description", params.description.as_deref());
        payload.str_list("reviewers", &params.reviewers);
        payload.str_list("requiredReviewers", &params.required_reviewers);
        payload.str_list("reviewerGroups", &params.reviewer_groups);

        self.swarm
            .request(Method::POST, "reviews", Params::new(), Some(Body::Form(payload.to_form())))
            .await
    }

    /// Archive reviews not updated since the given `YYYY-mm-dd` date
    /// (API v6+). The description is posted as a comment on each archived
    /// review.
    pub async fn archive(
        &self,
        not_updated_since: &str,
        description: &str,
    ) -> Result<Value, SwarmError> {
        self.swarm.require_version(6, "review archiving")?;

        let mut payload = Params::new();
        payload.str("notUpdatedSince", not_updated_since);
        payload.str("description", description);

        self.swarm
            .request(
                Method::POST,
                "reviews/archive",
                Params::new(),
                Some(Body::Form(payload.to_form())),
            )
            .await
    }

    /// Clean up a review's pending changelists (API v6+).
    ///
    /// With `reopen`, an attempt is made to reopen files into a default
    /// changelist.
    pub async fn cleanup(&self, review_id: u32, reopen: bool) -> Result<Value, SwarmError> {
        self.swarm.require_version(6, "review cleanup")?;

        let mut payload = Params::new();
        payload.toggle("reopen", reopen);

        let body = if payload.is_empty() {
            None
        } else {
            Some(Body::Form(payload.to_form()))
        };

        let path = format!("reviews/{review_id}/cleanup");
        self.swarm.request(Method::POST, &path, Params::new(), body).await
    }

    /// Vote on a review as the authenticated user (API v9+).
    pub async fn vote(&self, review_id: u32, vote: Vote) -> Result<Value, SwarmError> {
        self.swarm.require_version(9, "review votes")?;

        let path = format!("reviews/{review_id}/vote/{}", vote.as_str());
        self.swarm.request(Method::POST, &path, Params::new(), None).await
    }

    /// Permanently remove a review and its history (API v9+). This cannot
    /// be undone.
    pub async fn obliterate(&self, review_id: u32) -> Result<Value, SwarmError> {
        self.swarm.require_version(9, "review obliterate")?;

        let path = format!("reviews/{review_id}/obliterate");
        self.swarm.request(Method::POST, &path, Params::new(), None).await
    }
}
