//! Resource lifecycle tests through the provider dispatch.
//!
//! # Invariants
//! - Read of a vanished record yields None, not an error
//! - Update and delete address the id from prior state
//! - Update and delete of a vanished record are errors

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};

#[tokio::test]
async fn test_collector_create_stores_assigned_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/collectors"))
        .and(body_partial_json(json!({
            "collector": {"name": "web-logs", "collectorType": "Hosted", "timeZone": "Etc/UTC"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(collector_envelope(42, "web-logs")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .create(
            "sumologic_collector",
            json!({"name": "web-logs", "timezone": "Etc/UTC"}),
        )
        .await
        .unwrap();

    assert_eq!(state["id"], 42);
    assert_eq!(state["name"], "web-logs");
}

#[tokio::test]
async fn test_collector_read_refreshes_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collector_envelope(42, "web-logs")))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .read(
            "sumologic_collector",
            json!({"id": 42, "name": "stale-name", "description": null}),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(state["name"], "web-logs");
    assert_eq!(state["category"], "prod/web");
}

#[tokio::test]
async fn test_collector_read_gone_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .read("sumologic_collector", json!({"id": 42, "name": "web-logs"}))
        .await
        .unwrap();
    assert!(state.is_none());
}

#[tokio::test]
async fn test_collector_update_uses_prior_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"c42\"")
                .set_body_json(collector_envelope(42, "web-logs")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/collectors/42"))
        .and(header("if-match", "\"c42\""))
        .and(body_partial_json(json!({
            "collector": {"id": 42, "name": "web-logs", "category": "prod/web-v2"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(collector_envelope(42, "web-logs")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .update(
            "sumologic_collector",
            json!({"id": 42, "name": "web-logs", "category": "prod/web"}),
            json!({"id": 999, "name": "web-logs", "category": "prod/web-v2"}),
        )
        .await
        .unwrap();

    assert_eq!(state["id"], 42);
    assert_eq!(state["category"], "prod/web-v2");
}

#[tokio::test]
async fn test_collector_update_gone_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider
        .update(
            "sumologic_collector",
            json!({"id": 42, "name": "web-logs"}),
            json!({"name": "web-logs"}),
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);
}

#[tokio::test]
async fn test_collector_delete_gone_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/collectors/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider
        .delete("sumologic_collector", json!({"id": 42, "name": "web-logs"}))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_read_without_id_is_validation_error() {
    let mock_server = MockServer::start().await;

    let provider = provider_for(&mock_server);
    let err = provider
        .read("sumologic_collector", json!({"name": "web-logs"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Validation(ref m) if m.contains("no id")));
}

#[tokio::test]
async fn test_http_source_create_records_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/collectors/42/sources"))
        .and(body_partial_json(json!({
            "source": {"name": "nginx", "sourceType": "HTTP", "messagePerRequest": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "source": {
                "id": 1001,
                "name": "nginx",
                "messagePerRequest": true,
                "sourceType": "HTTP",
                "url": "https://endpoint1.collection.sumologic.com/receiver/v1/http/abc"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .create(
            "sumologic_http_source",
            json!({"collector_id": 42, "name": "nginx", "message_per_request": true}),
        )
        .await
        .unwrap();

    assert_eq!(state["id"], 1001);
    assert_eq!(state["collector_id"], 42);
    assert_eq!(
        state["url"],
        "https://endpoint1.collection.sumologic.com/receiver/v1/http/abc"
    );
}

#[tokio::test]
async fn test_http_source_requires_collector_id() {
    let mock_server = MockServer::start().await;

    let provider = provider_for(&mock_server);
    let err = provider
        .create("sumologic_http_source", json!({"name": "nginx"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Validation(ref m) if m.contains("'collector_id'")));
}

#[tokio::test]
async fn test_extraction_rule_update_keeps_prior_id() {
    let mock_server = MockServer::start().await;
    let rule = json!({
        "id": "0000000000000AB1",
        "name": "nginx-status",
        "scope": "_sourceCategory=web/nginx",
        "parseExpression": "parse \"status=*\" as status",
        "enabled": true
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/extractionRules/0000000000000AB1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&rule))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/extractionRules/0000000000000AB1"))
        .and(body_partial_json(json!({"enabled": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&rule))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .update(
            "sumologic_extraction_rule",
            json!({
                "id": "0000000000000AB1",
                "name": "nginx-status",
                "scope": "_sourceCategory=web/nginx",
                "parse_expression": "parse \"status=*\" as status"
            }),
            json!({
                "name": "nginx-status",
                "scope": "_sourceCategory=web/nginx",
                "parse_expression": "parse \"status=*\" as status",
                "enabled": false
            }),
        )
        .await
        .unwrap();

    assert_eq!(state["id"], "0000000000000AB1");
    assert_eq!(state["enabled"], false);
}

#[tokio::test]
async fn test_http_source_update_keeps_prior_collector_and_url() {
    let mock_server = MockServer::start().await;
    let url = "https://endpoint1.collection.sumologic.com/receiver/v1/http/abc";

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42/sources/1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "source": {"id": 1001, "name": "nginx", "sourceType": "HTTP", "url": url}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/collectors/42/sources/1001"))
        .and(body_partial_json(json!({
            "source": {"id": 1001, "category": "web/nginx-v2"}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/collectors/77/sources/1001"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .update(
            "sumologic_http_source",
            json!({"id": 1001, "collector_id": 42, "name": "nginx", "url": url}),
            json!({"collector_id": 77, "name": "nginx", "category": "web/nginx-v2"}),
        )
        .await
        .unwrap();

    assert_eq!(state["id"], 1001);
    assert_eq!(state["collector_id"], 42);
    assert_eq!(state["url"], url);
    assert_eq!(state["category"], "web/nginx-v2");
}

#[tokio::test]
async fn test_http_source_read_gone_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collectors/42/sources/1001"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let state = provider
        .read(
            "sumologic_http_source",
            json!({"id": 1001, "collector_id": 42, "name": "nginx"}),
        )
        .await
        .unwrap();
    assert!(state.is_none());
}

#[tokio::test]
async fn test_http_source_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/collectors/42/sources/1001"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    provider
        .delete(
            "sumologic_http_source",
            json!({"id": 1001, "collector_id": 42, "name": "nginx"}),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_extraction_rule_update_gone_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/extractionRules/0000000000000AB1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let planned = json!({
        "name": "nginx-status",
        "scope": "_sourceCategory=web/nginx",
        "parse_expression": "parse \"status=*\" as status"
    });
    let mut prior = planned.clone();
    prior["id"] = json!("0000000000000AB1");

    let err = provider
        .update("sumologic_extraction_rule", prior, planned)
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);
}
