use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;

use swarm_client::endpoints::comments::{AddCommentParams, EditCommentParams, ListCommentsParams};
use swarm_client::SwarmError;

mod common;
use common::swarm_at;

#[tokio::test]
async fn test_comments_require_api_v3() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 2);

    let result = swarm.comments().list(&ListCommentsParams::default()).await;

    match result {
        Err(SwarmError::Compatibility(err)) => {
            assert_eq!(err.feature, "comments");
            assert_eq!(err.min_version, 3);
            assert_eq!(err.current, 2);
        }
        other => panic!("expected compatibility error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_filters_by_topic() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v9/comments")
            .query_param("max", "20")
            .query_param("topic", "reviews/911")
            .query_param("fields", "id,body,time");
        then.status(200).json_body(json!({"comments": [], "lastSeen": null}));
    });

    let response = swarm
        .comments()
        .list(&ListCommentsParams {
            limit: Some(20),
            topic: Some("reviews/911".to_string()),
            fields: vec!["id".to_string(), "body".to_string(), "time".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response, json!({"comments": [], "lastSeen": null}));
}

#[tokio::test]
async fn test_add_posts_topic_body_and_flags() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v9/comments")
            .x_www_form_urlencoded_tuple("topic", "reviews/911")
            .x_www_form_urlencoded_tuple("body", "Needs a test for the empty case")
            .x_www_form_urlencoded_tuple("taskState", "open")
            .x_www_form_urlencoded_tuple("flags[]", "closed")
            .x_www_form_urlencoded_tuple("delayNotification", "true");
        then.status(200).json_body(json!({"comment": {"id": 42}}));
    });

    swarm
        .comments()
        .add(
            "reviews/911",
            "Needs a test for the empty case",
            &AddCommentParams {
                task_state: Some("open".to_string()),
                flags: vec!["closed".to_string()],
                delay_notification: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_edit_patches_only_supplied_fields() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v9/comments/42")
            .x_www_form_urlencoded_tuple("taskState", "addressed");
        then.status(200).json_body(json!({"comment": {"id": 42, "taskState": "addressed"}}));
    });

    let response = swarm
        .comments()
        .edit(
            42,
            &EditCommentParams {
                task_state: Some("addressed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response["comment"]["taskState"], "addressed");
}
