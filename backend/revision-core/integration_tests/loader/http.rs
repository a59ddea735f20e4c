use crate::loader::SAMPLE_DOCUMENT;

use revision_core::error::LoaderError;
use revision_core::loader::http::DocumentClient;

use common::HttpStatusCode;

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn document_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/data.json", server.uri())).unwrap()
}

#[tokio::test]
async fn given_served_document_when_fetched_then_returns_topics_in_order() {
    // GIVEN: A server with the sample document
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_DOCUMENT))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching it
    let topics = DocumentClient::new()
        .unwrap()
        .fetch_topics(&document_url(&server).await)
        .await
        .unwrap();

    // THEN: Three topics, document order
    let questions: Vec<&str> = topics.iter().map(|t| t.question.as_str()).collect();
    assert_eq!(questions, vec!["2+2?", "3+3?", "Primary colors?"]);
}

/// **VALUE**: A 404 is a resource error carrying the status.
///
/// **BUG THIS CATCHES**: Parsing the 404 page body as JSON and reporting a
/// malformed document instead of a missing one.
#[tokio::test]
async fn given_missing_document_when_fetched_then_returns_resource_unavailable_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let result = DocumentClient::new()
        .unwrap()
        .fetch_topics(&document_url(&server).await)
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, LoaderError::ResourceUnavailable { .. }));
    assert_eq!(err.status(), Some(HttpStatusCode(404)));
    assert!(err.to_string().contains("HTTP error! status: 404"));
}

#[tokio::test]
async fn given_invalid_json_body_when_fetched_then_returns_malformed_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"subject\": \"Math\",}]"))
        .mount(&server)
        .await;

    let result = DocumentClient::new()
        .unwrap()
        .fetch_topics(&document_url(&server).await)
        .await;

    assert!(matches!(result, Err(LoaderError::MalformedDocument { .. })));
}

#[tokio::test]
async fn given_unreachable_host_when_fetched_then_returns_http_error() {
    // Port 9 (discard) on loopback is not expected to accept connections.
    let url = Url::parse("http://127.0.0.1:9/data.json").unwrap();

    let result = DocumentClient::new().unwrap().fetch_topics(&url).await;

    assert!(matches!(result, Err(LoaderError::Http { .. })));
}
