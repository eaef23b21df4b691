//! Integration tests for the analysis server client using wiremock

use core::time::Duration;
use serde_json::json;
use sonar_report_lib::Shutdown;
use sonar_report_lib::api::{ApiError, Client};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn measures_body() -> serde_json::Value {
    json!({
        "component": {
            "key": "proj1",
            "name": "Project One",
            "qualifier": "TRK",
            "measures": [
                { "metric": "bugs", "value": "3" },
                { "metric": "new_bugs", "period": { "index": 1, "value": "1" } }
            ]
        },
        "metrics": [
            { "key": "bugs", "name": "Bugs", "description": "Bugs", "domain": "Reliability", "type": "INT" },
            { "key": "new_bugs", "name": "New Bugs", "description": "New Bugs", "type": "INT" }
        ],
        "period": { "mode": "PREVIOUS_VERSION" }
    })
}

#[tokio::test]
async fn test_fetch_measures_sends_expected_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/measures/component"))
        .and(header("Authorization", "Bearer squ_secret"))
        .and(query_param("additionalFields", "period,metrics"))
        .and(query_param("component", "proj1"))
        .and(query_param("metricKeys", "bugs,new_bugs"))
        .and(query_param("pullRequest", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(measures_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "squ_secret", Shutdown::never()).unwrap();
    let keys = vec!["bugs".to_string(), "new_bugs".to_string()];
    let response = client.fetch_measures("proj1", "42", &keys).await.unwrap();

    assert_eq!(response.component.name, "Project One");
    assert_eq!(response.component.measures.len(), 2);
    assert_eq!(response.component.measures[0].value(), Some("3"));
    assert_eq!(response.component.measures[1].value(), Some("1"));
    assert_eq!(response.metrics[0].name, "Bugs");
}

#[tokio::test]
async fn test_fetch_measures_without_pull_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/measures/component"))
        .and(query_param("component", "proj1"))
        .and(query_param_is_missing("pullRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(measures_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "token", Shutdown::never()).unwrap();
    let response = client.fetch_measures("proj1", "", &["bugs".to_string()]).await.unwrap();

    assert_eq!(response.component.key, "proj1");
}

#[tokio::test]
async fn test_fetch_project_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qualitygates/project_status"))
        .and(header("Authorization", "Bearer token"))
        .and(query_param("projectKey", "proj1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projectStatus": { "status": "OK", "conditions": [], "ignoredConditions": false }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "token", Shutdown::never()).unwrap();
    let status = client.fetch_project_status("proj1").await.unwrap();

    assert_eq!(status.status, "OK");
    assert!(status.passed());
}

#[tokio::test]
async fn test_host_with_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qualitygates/project_status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "projectStatus": { "status": "ERROR" } })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(format!("{}/", mock_server.uri()), "token", Shutdown::never()).unwrap();
    let status = client.fetch_project_status("proj1").await.unwrap();

    assert!(!status.passed());
}

#[tokio::test]
async fn test_non_200_status_is_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qualitygates/project_status"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "token", Shutdown::never()).unwrap();
    let error = client.fetch_project_status("proj1").await.unwrap_err();

    match &error {
        ApiError::Protocol { status, body } => {
            assert_eq!(*status, 403);
            assert_eq!(body, "Forbidden");
        }
        other => panic!("expected a protocol error, got {other:?}"),
    }
    assert_eq!(error.to_string(), "received status code 403: Forbidden");
}

#[tokio::test]
async fn test_error_body_is_not_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/measures/component"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "errors": [{ "msg": "Component key 'nope' not found" }] })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "token", Shutdown::never()).unwrap();
    let error = client.fetch_measures("nope", "", &["bugs".to_string()]).await.unwrap_err();

    assert!(matches!(error, ApiError::Protocol { status: 404, ref body } if body.contains("not found")));
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qualitygates/project_status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "token", Shutdown::never()).unwrap();
    let error = client.fetch_project_status("proj1").await.unwrap_err();

    assert!(matches!(error, ApiError::Decode(_)), "unexpected error: {error}");
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qualitygates/project_status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "projectStatus": { "status": "OK" } }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_timeout(mock_server.uri(), "token", Shutdown::never(), Duration::from_millis(200)).unwrap();
    let error = client.fetch_project_status("proj1").await.unwrap_err();

    assert!(matches!(error, ApiError::Timeout(_)), "unexpected error: {error}");
    assert!(error.to_string().starts_with("request to the analysis server timed out: "));
}

#[tokio::test]
async fn test_cancellation_interrupts_request_in_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qualitygates/project_status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "projectStatus": { "status": "OK" } }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let (trigger, shutdown) = Shutdown::new();
    let client = Client::new(mock_server.uri(), "token", shutdown).unwrap();

    let _cancel = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.trigger();
    });

    let started = std::time::Instant::now();
    let error = client.fetch_project_status("proj1").await.unwrap_err();

    assert!(error.is_cancelled(), "unexpected error: {error}");
    assert!(started.elapsed() < Duration::from_secs(5));
}
