use std::time::Duration;

use httpmock::prelude::*;
use moneta_core::{HttpClient, MonetaError, RetryPolicy};
use url::Url;

fn client(attempts: u32) -> HttpClient {
    HttpClient::new(
        RetryPolicy {
            attempts,
            delay: Duration::from_millis(10),
        },
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn returns_decoded_json_on_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"ok": true}));
    });

    let url = Url::parse(&server.url("/data")).unwrap();
    let value = client(3).get_json("test-source", url).await.unwrap();
    assert_eq!(value["ok"], serde_json::json!(true));
    mock.assert();
}

#[tokio::test]
async fn exhausted_retries_surface_the_last_source_failure() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/flaky");
        then.status(500);
    });

    let url = Url::parse(&server.url("/flaky")).unwrap();
    let err = client(2).get_json("test-source", url).await.unwrap_err();
    assert!(matches!(err, MonetaError::Source { .. }), "got {err:?}");
    mock.assert_hits(2);
}

#[tokio::test]
async fn undecodable_bodies_count_as_source_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/html");
        then.status(200).body("<html>not json</html>");
    });

    let url = Url::parse(&server.url("/html")).unwrap();
    let err = client(1).get_json("test-source", url).await.unwrap_err();
    assert!(matches!(err, MonetaError::Source { .. }));
}
