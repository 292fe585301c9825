//! Integration tests for `AnalysisClient` using wiremock HTTP mocks.

use curator_analysis::{AnalysisClient, AnalysisError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CSV: &str = "brand,type,name,youtube,instagram,reddit,twitter,linkedin\n\
                   Acme,Influencer,Jane,yt.co/jane,,,,\n";

fn test_client(base_url: &str) -> AnalysisClient {
    AnalysisClient::with_base_url(base_url, 30).expect("client construction should not fail")
}

#[tokio::test]
async fn analyze_uploads_csv_and_returns_report() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(header("accept", "application/json"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"curatorlist.csv\""))
        .and(body_string_contains("text/csv"))
        .and(body_string_contains("Acme,Influencer,Jane,yt.co/jane,,,,"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "analysis": "# Report\nAcme is doing fine." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let report = client.analyze(CSV).await.expect("should return report");

    assert_eq!(report, "# Report\nAcme is doing fine.");
}

#[tokio::test]
async fn analyze_ignores_extra_response_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "analysis": "ok",
            "model": "sonar",
            "elapsed_ms": 1234
        })))
        .mount(&server)
        .await;

    let report = test_client(&server.uri())
        .analyze(CSV)
        .await
        .expect("extra fields are tolerated");
    assert_eq!(report, "ok");
}

#[tokio::test]
async fn analyze_maps_server_error_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "error": "boom" })),
        )
        .mount(&server)
        .await;

    let err = test_client(&server.uri()).analyze(CSV).await.unwrap_err();
    assert!(
        matches!(err, AnalysisError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}

#[tokio::test]
async fn analyze_rejects_body_without_analysis_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "report": "x" })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri()).analyze(CSV).await.unwrap_err();
    assert!(
        matches!(err, AnalysisError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn analyze_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri()).analyze(CSV).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Deserialize { .. }));
}

#[tokio::test]
async fn analyze_surfaces_connection_failure() {
    // Nothing listens on this port once the listener is dropped.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr")
    };

    let err = test_client(&format!("http://{addr}"))
        .analyze(CSV)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Http(_)), "got: {err:?}");
}
