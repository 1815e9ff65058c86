//! Router-level tests. Gemini is replaced by a wiremock server.


use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::application::http::server::http_server::{api_router, router, state};
use crate::args::Args;

pub const GENERATE_CONTENT_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";
pub const TEST_API_KEY: &str = "test-key";

pub struct ApiContext {
    pub server: TestServer,
    pub gemini: MockServer,
}

impl ApiContext {
    pub async fn start(api_key: &str, extra_args: &[&str]) -> Self {
        let gemini = MockServer::start().await;

        let mut argv = vec![
            "nutrilens-api".to_string(),
            "--gemini-base-url".to_string(),
            gemini.uri(),
            "--gemini-api-key".to_string(),
            api_key.to_string(),
        ];
        argv.extend(extra_args.iter().map(|arg| arg.to_string()));

        let args = Arc::new(Args::parse_from(argv));
        let router = api_router(state(args)).expect("router should build");
        let server = TestServer::new(router).expect("test server should start");

        Self { server, gemini }
    }

    /// Answers every generateContent call with `body`.
    pub async fn mount_upstream(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.gemini)
            .await;
    }

    pub async fn upstream_bodies(&self) -> Vec<Value> {
        self.gemini
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.body_json().expect("upstream body should be JSON"))
            .collect()
    }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        Self::start(TEST_API_KEY, &[]).await
    }
}

/// Context whose Gemini key is blank.
pub struct UnconfiguredApiContext(pub ApiContext);

impl AsyncTestContext for UnconfiguredApiContext {
    async fn setup() -> Self {
        Self(ApiContext::start("", &[]).await)
    }
}

pub fn candidate_answer(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health_live(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

/// The only test that builds the metrics router: the Prometheus recorder is process-wide.
#[tokio::test]
async fn test_metrics_route_reports_requests() {
    let args = Arc::new(Args::parse_from([
        "nutrilens-api",
        "--gemini-api-key",
        TEST_API_KEY,
    ]));
    let app = router(state(args)).expect("router should build");
    let server = TestServer::new(app).expect("test server should start");

    server.get("/health/live").await.assert_status_ok();

    let response = server.get("/metrics").await;
    response.assert_status_ok();
    assert!(response.text().contains("/health/live"));
}
