//! End-to-end behaviour over HTTP against a mock Calendly server.

use calendly_client::client::activity_log::ListActivityLogQuery;
use calendly_client::client::event_types::{CreateShareRequest, ListEventTypesQuery};
use calendly_client::client::organizations::InviteUserRequest;
use calendly_client::client::scheduled_events::ListEventsQuery;
use calendly_client::client::webhooks::CreateWebhookRequest;
use calendly_client::{CalendlyClient, ClientConfig, ClientError};
use calendly_core::values::{EventStatus, WebhookScope};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> CalendlyClient {
    let config = ClientConfig::new(TOKEN)
        .with_base_url(&server.uri())
        .unwrap();
    CalendlyClient::new(config).unwrap()
}

async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn test_get_event() {
    let server = MockServer::start().await;
    let body = json!({ "resource": { "uri": "https://api.calendly.com/scheduled_events/abc-123" } });

    Mock::given(method("GET"))
        .and(path("/scheduled_events/abc-123"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server).get_event("abc-123").await.unwrap();
    assert_eq!(value, body);

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), None);
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_list_events_sends_only_present_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scheduled_events"))
        .and(query_param("status", "active"))
        .and(query_param("count", "20"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "collection": [], "pagination": { "count": 0 } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .list_events(&ListEventsQuery {
            status: Some(EventStatus::Active),
            count: Some(20),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("status=active&count=20"));
}

#[tokio::test]
async fn test_list_events_time_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scheduled_events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "collection": [] })))
        .mount(&server)
        .await;

    client_for(&server)
        .list_events(&ListEventsQuery {
            user: Some("https://api.calendly.com/users/u-1".to_string()),
            min_start_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            page_token: Some("next".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = only_request(&server).await;
    let pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (
                "user".to_string(),
                "https://api.calendly.com/users/u-1".to_string()
            ),
            ("min_start_time".to_string(), "2024-01-01T00:00:00Z".to_string()),
            ("page_token".to_string(), "next".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_falsy_filters_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event_types"))
        .and(query_param("active", "false"))
        .and(query_param("count", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "collection": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .list_event_types(&ListEventTypesQuery {
            active: Some(false),
            count: Some(0),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_activity_log_repeats_list_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/activity_log_entries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "collection": [] })))
        .mount(&server)
        .await;

    client_for(&server)
        .list_activity_log_entries(&ListActivityLogQuery {
            organization: Some("org".to_string()),
            action: Some(vec!["Add".to_string(), "Remove".to_string()]),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(
        request.url.query(),
        Some("organization=org&action=Add&action=Remove")
    );
}

#[tokio::test]
async fn test_invite_user_to_organization() {
    let server = MockServer::start().await;
    let created = json!({ "resource": { "email": "a@b.com", "status": "pending" } });

    Mock::given(method("POST"))
        .and(path("/organizations/org-1/invitations"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({ "email": "a@b.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .invite_user_to_organization("org-1", &InviteUserRequest::new("a@b.com"))
        .await
        .unwrap();
    assert_eq!(value, created);
}

#[tokio::test]
async fn test_create_webhook_subscription_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook_subscriptions"))
        .and(body_json(json!({
            "url": "https://example.com/hook",
            "events": ["invitee.created", "invitee.canceled"],
            "organization": "https://api.calendly.com/organizations/org-1",
            "scope": "organization"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "resource": {} })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .create_webhook_subscription(&CreateWebhookRequest {
            url: Some("https://example.com/hook".to_string()),
            events: Some(vec![
                "invitee.created".to_string(),
                "invitee.canceled".to_string(),
            ]),
            organization: Some("https://api.calendly.com/organizations/org-1".to_string()),
            scope: Some(WebhookScope::Organization),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_share_keeps_falsy_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/shares"))
        .and(body_json(json!({
            "duration": 0,
            "event_type": "https://api.calendly.com/event_types/et-1",
            "hide_location": false,
            "name": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "resource": {} })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .create_share(&CreateShareRequest {
            duration: Some(0),
            event_type: Some("https://api.calendly.com/event_types/et-1".to_string()),
            hide_location: Some(false),
            name: Some(String::new()),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_user_from_organization() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/organization_memberships/mem-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .remove_user_from_organization("mem-1")
        .await
        .unwrap();
    assert_eq!(value, Value::Null);

    let request = only_request(&server).await;
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhook_subscriptions/wh-1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "not found" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_webhook_subscription("wh-1")
        .await
        .unwrap_err();

    match &err {
        ClientError::Http { status, .. } => assert_eq!(*status, 404),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.body_json(), Some(json!({ "message": "not found" })));
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get_current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/g-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_group("g-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let config = ClientConfig::new(TOKEN)
        .with_base_url("http://127.0.0.1:1")
        .unwrap();
    let client = CalendlyClient::new(config).unwrap();

    let err = client.get_current_user().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
