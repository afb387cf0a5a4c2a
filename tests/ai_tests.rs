mod common;

use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nexus_crm::ai::InsightClient;
use nexus_crm::config::GeminiConfig;
use nexus_crm::App;

fn client_for(server: &MockServer) -> InsightClient {
    InsightClient::new(Some(GeminiConfig {
        api_key: "test-key".to_string(),
        model: "gemini-2.5-flash".to_string(),
        base_url: server.uri(),
    }))
}

fn insight_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}]}}]
    }))
}

// ── Credential fallback ─────────────────────────────────────────

#[tokio::test]
async fn missing_credential_returns_advisory_text() {
    let client = InsightClient::new(None);

    let advisory = "API Key is missing. Please configure the environment variable.";
    assert_eq!(client.generate_insight("anything", None).await, advisory);
    assert_eq!(client.analyze_deal("deal details").await, advisory);
    assert_eq!(client.draft_email("Sarah", "renewal").await, advisory);
}

// ── Request composition ─────────────────────────────────────────

#[tokio::test]
async fn generate_insight_posts_prompt_and_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_string_contains("Context: Renewal call next week"))
        .and(body_string_contains("Task: Summarize the account"))
        .and(body_string_contains("professional CRM assistant"))
        .respond_with(insight_response("Focus on the renewal terms."))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .generate_insight("Summarize the account", Some("Renewal call next week"))
        .await;
    assert_eq!(result, "Focus on the renewal terms.");
}

#[tokio::test]
async fn generate_insight_without_context_sends_bare_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Just the prompt"))
        .respond_with(insight_response("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.generate_insight("Just the prompt", None).await, "ok");
}

#[tokio::test]
async fn analyze_deal_uses_analysis_template() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Analyze this deal"))
        .and(body_string_contains("Context: Deal Title: Enterprise AI License"))
        .respond_with(insight_response("High probability. Push to close."))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .analyze_deal("Deal Title: Enterprise AI License")
        .await;
    assert_eq!(result, "High probability. Push to close.");
}

#[tokio::test]
async fn draft_email_addresses_recipient_and_goal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("persuasive email to Ellen Ripley"))
        .and(body_string_contains("Email Context/Goal: schedule a demo"))
        .respond_with(insight_response("Hi Ellen,"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.draft_email("Ellen Ripley", "schedule a demo").await;
    assert_eq!(result, "Hi Ellen,");
}

// ── Failure handling ────────────────────────────────────────────

#[tokio::test]
async fn api_error_yields_fixed_failure_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.generate_insight("prompt", None).await,
        "Failed to generate insight. Please try again later."
    );
}

#[tokio::test]
async fn empty_candidates_yield_no_insight_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.generate_insight("prompt", None).await,
        "No insight generated."
    );
}

// ── App-level composition ───────────────────────────────────────

#[tokio::test]
async fn app_analyze_deal_renders_fixture_deal() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Deal Title: Enterprise AI License"))
        .and(body_string_contains("Value: $150000"))
        .and(body_string_contains("Stage: Negotiation"))
        .and(body_string_contains("Current Probability: 80%"))
        .respond_with(insight_response("Close it this quarter."))
        .expect(1)
        .mount(&server)
        .await;

    let app = App::bootstrap(common::test_config_with_gemini(dir.path(), &server.uri()))
        .expect("failed to bootstrap app");
    let deal = app.deals().get("d1").unwrap().clone();

    assert_eq!(app.analyze_deal(&deal).await, "Close it this quarter.");
}
