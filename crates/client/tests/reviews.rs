use httpmock::prelude::*;
use serde_json::json;

use swarm_client::endpoints::reviews::{CreateReviewParams, ListReviewsParams, Vote};
use swarm_client::SwarmError;

mod common;
use common::swarm_at;

#[tokio::test]
async fn test_list_renames_filters_to_wire_keys() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v9/reviews")
            .query_param("after", "120")
            .query_param("max", "5")
            .query_param("fields", "id,state")
            .query_param("author", "alice")
            .query_param("author", "bob")
            .query_param("change", "1050")
            .query_param("project", "gemini")
            .query_param("state", "needsReview")
            .query_param("notUpdatedSince", "2024-03-01")
            .query_param("hasVoted", "up");
        then.status(200).json_body(json!({"reviews": [], "totalCount": 0}));
    });

    let response = swarm
        .reviews()
        .list(&ListReviewsParams {
            after: Some(120),
            limit: Some(5),
            fields: vec!["id".to_string(), "state".to_string()],
            authors: vec!["alice".to_string(), "bob".to_string()],
            changes: vec![1050],
            projects: vec!["gemini".to_string()],
            states: vec!["needsReview".to_string()],
            not_updated_since: Some("2024-03-01".to_string()),
            has_voted: Some("up".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response, json!({"reviews": [], "totalCount": 0}));
}

#[tokio::test]
async fn test_list_tri_state_filters_render_zero_and_one() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v9/reviews")
            .query_param("hasReviewers", "1")
            .query_param("passesTests", "0")
            .query_param("myComments", "0");
        then.status(200).json_body(json!({"reviews": []}));
    });

    swarm
        .reviews()
        .list(&ListReviewsParams {
            has_reviewers: Some(true),
            passes_tests: Some(false),
            my_comments: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_list_tri_state_filters_absent_when_unset() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let strict = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v9/reviews")
            .query_param_exists("hasReviewers");
        then.status(200).json_body(json!({}));
    });

    let result = swarm.reviews().list(&ListReviewsParams::default()).await;

    assert_eq!(strict.hits(), 0);
    assert!(matches!(result, Err(SwarmError::Response { status: 404, .. })));
}

#[tokio::test]
async fn test_list_author_filter_requires_v2() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 1);

    let result = swarm
        .reviews()
        .list(&ListReviewsParams {
            authors: vec!["alice".to_string()],
            ..Default::default()
        })
        .await;

    match result {
        Err(SwarmError::Compatibility(err)) => {
            assert_eq!(err.feature, "author filter");
            assert_eq!(err.min_version, 2);
        }
        other => panic!("expected compatibility error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_without_authors_works_on_v1() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 1);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/reviews");
        then.status(200).json_body(json!({"reviews": []}));
    });

    swarm
        .reviews()
        .list(&ListReviewsParams::default())
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_get_info_passes_response_through_unchanged() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let body = json!({
        "review": {
            "id": 12306,
            "author": "bruno",
            "commits": [10667],
            "state": "needsReview",
            "participants": {"alice": [], "bruno": {"required": true}}
        }
    });

    let response_body = body.clone();
    let mock = server.mock(move |when, then| {
        when.method(GET)
            .path("/api/v9/reviews/12306")
            .query_param("fields", "id,author,state");
        then.status(200).json_body(response_body);
    });

    let response = swarm
        .reviews()
        .get_info(
            12306,
            &["id".to_string(), "author".to_string(), "state".to_string()],
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response, body);
}

#[tokio::test]
async fn test_get_transitions_requires_v9() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 8);

    let result = swarm.reviews().get_transitions(12306, None).await;

    match result {
        Err(SwarmError::Compatibility(err)) => {
            assert_eq!(err.feature, "review transitions");
            assert_eq!(err.min_version, 9);
            assert_eq!(err.current, 8);
        }
        other => panic!("expected compatibility error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_transitions_sends_up_voters() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v9/reviews/12306/transitions")
            .query_param("upVoters", "bob");
        then.status(200)
            .json_body(json!({"transitions": {"approved": "Approve"}}));
    });

    let response = swarm
        .reviews()
        .get_transitions(12306, Some("bob"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response["transitions"]["approved"], "Approve");
}

#[tokio::test]
async fn test_create_always_sends_change() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v9/reviews")
            .x_www_form_urlencoded_tuple("change", "10667")
            .x_www_form_urlencoded_tuple("description", "Fix off-by-one")
            .x_www_form_urlencoded_tuple("reviewers", "alice");
        then.status(200).json_body(json!({"review": {"id": 12306}}));
    });

    swarm
        .reviews()
        .create(
            10667,
            &CreateReviewParams {
                description: Some("Fix off-by-one".to_string()),
                reviewers: vec!["alice".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_create_reviewer_groups_gated_at_v7() {
    let server = MockServer::start();

    let params = CreateReviewParams {
        reviewer_groups: vec!["qa".to_string()],
        ..Default::default()
    };

    let result = swarm_at(&server, 6).reviews().create(10667, &params).await;
    match result {
        Err(SwarmError::Compatibility(err)) => {
            assert_eq!(err.feature, "reviewer groups");
            assert_eq!(err.min_version, 7);
            assert_eq!(err.current, 6);
        }
        other => panic!("expected compatibility error, got {other:?}"),
    }

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v7/reviews")
            .x_www_form_urlencoded_tuple("change", "10667")
            .x_www_form_urlencoded_tuple("reviewerGroups", "qa");
        then.status(200).json_body(json!({"review": {"id": 12307}}));
    });

    swarm_at(&server, 7)
        .reviews()
        .create(10667, &params)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_create_required_reviewers_rejected_on_v1() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 1);

    let result = swarm
        .reviews()
        .create(
            10667,
            &CreateReviewParams {
                required_reviewers: vec!["alice".to_string()],
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(SwarmError::Compatibility(err)) => {
            assert_eq!(err.feature, "required reviewers");
            assert_eq!(err.min_version, 2);
        }
        other => panic!("expected compatibility error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_archive_requires_v6() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 5);

    let result = swarm.reviews().archive("2024-03-01", "stale").await;

    match result {
        Err(SwarmError::Compatibility(err)) => {
            assert_eq!(err.min_version, 6);
        }
        other => panic!("expected compatibility error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_archive_posts_to_fixed_subresource() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 6);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v6/reviews/archive")
            .x_www_form_urlencoded_tuple("notUpdatedSince", "2024-03-01")
            .x_www_form_urlencoded_tuple("description", "Archiving stale reviews");
        then.status(200).json_body(json!({"archivedReviews": [], "failedReviews": []}));
    });

    swarm
        .reviews()
        .archive("2024-03-01", "Archiving stale reviews")
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_cleanup_includes_reopen_only_when_true() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 6);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v6/reviews/12306/cleanup")
            .x_www_form_urlencoded_tuple("reopen", "true");
        then.status(200).json_body(json!({"complete": [12306]}));
    });

    swarm.reviews().cleanup(12306, true).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn test_vote_posts_to_vote_subresource() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v9/reviews/12306/vote/up");
        then.status(200).json_body(json!({"isValid": true}));
    });

    swarm.reviews().vote(12306, Vote::Up).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn test_vote_requires_v9() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 8);

    let result = swarm.reviews().vote(12306, Vote::Down).await;
    assert!(matches!(result, Err(SwarmError::Compatibility(_))));
}

#[tokio::test]
async fn test_obliterate_posts_to_subresource() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v9/reviews/12306/obliterate");
        then.status(200)
            .json_body(json!({"isValid": true, "message": "review 12306 obliterated"}));
    });

    let response = swarm.reviews().obliterate(12306).await.unwrap();

    mock.assert();
    assert_eq!(response["isValid"], true);
}

#[tokio::test]
async fn test_non_success_status_surfaces_as_response_error() {
    let server = MockServer::start();
    let swarm = swarm_at(&server, 9);

    server.mock(|when, then| {
        when.method(GET).path("/api/v9/reviews/404000");
        then.status(404).body("review does not exist");
    });

    let result = swarm.reviews().get_info(404000, &[]).await;

    match result {
        Err(SwarmError::Response { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "review does not exist");
        }
        other => panic!("expected response error, got {other:?}"),
    }
}
