//! AnalyzeClient against a mock analysis service.

use std::time::Duration;

use bugscope::{AnalysisSession, AnalyzeClient, AnalyzeRequest, Applied, ClientError};
use bugscope_report::types::{Mode, SectionBody, Severity};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(mode: Mode) -> AnalyzeRequest {
    AnalyzeRequest {
        code: "def f(x):\n    return 1 / x\n".into(),
        language: "python".into(),
        mode,
    }
}

fn client(server: &MockServer) -> AnalyzeClient {
    AnalyzeClient::new(server.uri(), Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn analysis_mode_posts_to_analyze_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_partial_json(json!({"language": "python", "mode": "analysis"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "analysis": "Looks fine.",
            "metrics": {"readability": 88},
            "issues": [],
            "recommendations": ["Add a docstring"],
            "model": "gpt-4o-mini"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client(&server)
        .try_analyze(&request(Mode::Analysis))
        .await
        .expect("payload");

    assert_eq!(payload.analysis.as_deref(), Some("Looks fine."));
    assert_eq!(payload.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(payload.recommendations, vec!["Add a docstring".to_string()]);
}

#[tokio::test]
async fn debug_mode_posts_to_debug_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/debug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"message": "ZeroDivisionError"},
            "debugSteps": ["Guard the divisor"],
            "solution": "Check x before dividing."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client(&server).analyze(&request(Mode::Debug)).await;

    let mut session = AnalysisSession::new();
    let ticket = session.begin();
    assert_eq!(session.apply(ticket, &payload, Mode::Debug), Applied::Installed);

    let report = session.report().expect("report");
    assert_eq!(report.title, "Debug Results");
    assert_eq!(report.sections[0].severity, Some(Severity::Error));
    assert_eq!(report.sections[0].body, SectionBody::text("ZeroDivisionError"));
}

#[tokio::test]
async fn server_error_becomes_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Model quota exhausted",
            "model": "gemini-2.0-flash"
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .try_analyze(&request(Mode::Analysis))
        .await
        .expect_err("500 is an error");
    assert!(matches!(err, ClientError::Status { status: 500, .. }));

    let payload = client.analyze(&request(Mode::Analysis)).await;
    assert_eq!(payload.success, Some(false));
    assert_eq!(
        payload.error.as_ref().map(|e| e.message()),
        Some("Model quota exhausted")
    );
    assert_eq!(payload.model.as_deref(), Some("gemini-2.0-flash"));

    let report = bugscope::build_report(&payload, Mode::Analysis);
    assert_eq!(report.sections.len(), 1);
    assert_eq!(report.sections[0].title, "Analysis Error");
}

#[tokio::test]
async fn plain_text_error_body_keeps_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let payload = client(&server).analyze(&request(Mode::Analysis)).await;
    let message = payload.error.as_ref().map(|e| e.message().to_string()).unwrap_or_default();
    assert!(message.contains("503"), "{message}");
    assert!(message.contains("upstream down"), "{message}");
}

#[tokio::test]
async fn undecodable_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .try_analyze(&request(Mode::Analysis))
        .await
        .expect_err("not json");
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let client =
        AnalyzeClient::new(format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).expect("client");
    let err = client
        .try_analyze(&request(Mode::Analysis))
        .await
        .expect_err("nothing listening");
    assert!(matches!(err, ClientError::Transport { .. }));

    let payload = client.analyze(&request(Mode::Analysis)).await;
    assert_eq!(payload.success, Some(false));
    assert!(payload.error.is_some());
}

#[tokio::test]
async fn stale_response_does_not_replace_newer_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"analysis": "slow answer"}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/debug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"solution": "fast answer"})))
        .mount(&server)
        .await;

    let client = client(&server);
    let mut session = AnalysisSession::new();
    let slow = session.begin();
    let fast = session.begin();

    let (slow_request, fast_request) = (request(Mode::Analysis), request(Mode::Debug));
    let (slow_payload, fast_payload) =
        tokio::join!(client.analyze(&slow_request), client.analyze(&fast_request));

    assert_eq!(session.apply(fast, &fast_payload, Mode::Debug), Applied::Installed);
    assert_eq!(session.apply(slow, &slow_payload, Mode::Analysis), Applied::Stale);
    assert_eq!(session.report().map(|r| r.mode), Some(Mode::Debug));
}
