pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers::handle_ats_analyze;
use crate::state::AppState;
use crate::suggestions::handlers::handle_suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .merge(ai_routes())
        // The browser client posts under /api
        .nest("/api", ai_routes())
        .with_state(state)
}

fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/ai/suggestions", post(handle_suggestions))
        .route("/ai/ats/analyze", post(handle_ats_analyze))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::fake::FakeModel;

    fn test_app(model: Arc<FakeModel>) -> Router {
        build_router(AppState {
            llm: model,
            config: Config {
                openai_api_key: "sk-test".to_string(),
                openai_model: "gpt-test".to_string(),
                openai_api_url: "http://127.0.0.1:9/unused".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    fn sample_resume() -> Value {
        json!({
            "personalInfo": {"fullName": "Ana Lee", "email": "a@x.com"},
            "skills": {"technical": ["Go", "SQL"]}
        })
    }

    #[tokio::test]
    async fn test_suggestions_returns_split_skills() {
        let model = Arc::new(FakeModel::replying("Python, SQL, Docker, Leadership"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/suggestions",
            json!({"type": "skills", "context": "backend engineer"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"suggestions": ["Python", "SQL", "Docker", "Leadership"]})
        );
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_suggestions_context_defaults_to_empty() {
        let model = Arc::new(FakeModel::replying("Led a team\nShipped a product"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/suggestions",
            json!({"type": "experience"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!(["Led a team", "Shipped a product"]));
        assert_eq!(model.calls(), 1);
        assert!(model.last_call().unwrap().prompt.contains("Context: \n"));
    }

    #[tokio::test]
    async fn test_suggestions_rejects_unknown_type_without_calling_model() {
        let model = Arc::new(FakeModel::replying("unused"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/suggestions",
            json!({"type": "hobbies", "context": "chess"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_suggestions_rejects_missing_type() {
        let model = Arc::new(FakeModel::replying("unused"));

        let (status, _) = post_json(
            test_app(model.clone()),
            "/ai/suggestions",
            json!({"context": "chess"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_suggestions_upstream_failure_is_server_error() {
        let model = Arc::new(FakeModel::failing(401, "Incorrect API key provided"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/suggestions",
            json!({"type": "summary"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Incorrect API key provided"));
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let model = Arc::new(FakeModel::replying("unused"));
        let request = Request::builder()
            .method("POST")
            .uri("/ai/suggestions")
            .header("content-type", "application/json")
            .body(Body::from("{\"type\": "))
            .unwrap();

        let (status, _) = send(test_app(model.clone()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_ats_rejects_blank_job_description() {
        let model = Arc::new(FakeModel::replying("unused"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/ats/analyze",
            json!({"resumeData": sample_resume(), "jobDescription": "   \n\t"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Job description is required");
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_ats_rejects_missing_job_description() {
        let model = Arc::new(FakeModel::replying("unused"));

        let (status, _) = post_json(
            test_app(model.clone()),
            "/ai/ats/analyze",
            json!({"resumeData": sample_resume()}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_ats_rejects_empty_resume() {
        let model = Arc::new(FakeModel::replying("unused"));

        for resume in [json!({}), Value::Null] {
            let (status, body) = post_json(
                test_app(model.clone()),
                "/ai/ats/analyze",
                json!({"resumeData": resume, "jobDescription": "Rust engineer"}),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["message"], "Resume data is required");
        }
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_ats_rejects_resume_with_only_unrendered_sections() {
        let model = Arc::new(FakeModel::replying("unused"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/ats/analyze",
            json!({
                "resumeData": {"languages": [{"language": "English"}], "personalInfo": {"linkedin": "x"}},
                "jobDescription": "Rust engineer"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Resume data is required");
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_ats_fenced_reply_with_trailing_note_is_returned() {
        let analysis = json!({
            "score": 77,
            "scoreDescription": "Good match",
            "missingKeywords": ["Terraform"],
            "matchingKeywords": ["Go"],
            "recommendations": ["Add infrastructure experience"],
            "formattingIssues": []
        });
        let model = Arc::new(FakeModel::replying(&format!(
            "```json\n{analysis}\n```\nLet me know if you need more detail."
        )));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/ats/analyze",
            json!({"resumeData": sample_resume(), "jobDescription": "Go developer"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, analysis);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_ats_returns_model_analysis_verbatim() {
        let analysis = json!({
            "score": 64,
            "scoreDescription": "Partial match",
            "missingKeywords": ["Kubernetes"],
            "matchingKeywords": ["Go", "SQL"],
            "recommendations": ["Mention container orchestration"],
            "formattingIssues": ["Missing phone number"]
        });
        let model = Arc::new(FakeModel::replying(&format!("```json\n{analysis}\n```")));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/ats/analyze",
            json!({"resumeData": sample_resume(), "jobDescription": "Go developer"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, analysis);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_ats_unparseable_reply_returns_fallback_ok() {
        let model = Arc::new(FakeModel::replying("Sorry, I cannot help with that."));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/ats/analyze",
            json!({"resumeData": sample_resume(), "jobDescription": "Go developer"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "score": 70,
                "scoreDescription": "Good match with room for improvement",
                "missingKeywords": ["Unable to extract keywords"],
                "matchingKeywords": ["Analysis in progress"],
                "recommendations": ["Add more specific keywords from the job description"],
                "formattingIssues": []
            })
        );
    }

    #[tokio::test]
    async fn test_ats_upstream_failure_is_server_error() {
        let model = Arc::new(FakeModel::failing(503, "Service unavailable"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/ai/ats/analyze",
            json!({"resumeData": sample_resume(), "jobDescription": "Go developer"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_routes_are_also_served_under_api_prefix() {
        let model = Arc::new(FakeModel::replying("One --- Two"));

        let (status, body) = post_json(
            test_app(model.clone()),
            "/api/ai/suggestions",
            json!({"type": "summary", "context": "designer"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!(["One", "Two"]));
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let model = Arc::new(FakeModel::replying("unused"));
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(test_app(model), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-ai-api");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["model"], "gpt-test");
    }
}
