use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use postcraft::{
    GenerationResult, agent::ContentAgent, generic::GenericMessage,
    provider::ChatCompletionProvider, types::context::ContentContext,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub context: Option<ContentContext>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContentContext>,
}

pub async fn generate<B>(
    State(agent): State<Arc<ContentAgent<B>>>,
    Json(request): Json<GenerateRequest>,
) -> (StatusCode, Json<GenerateResponse>)
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    if request.prompt.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(GenerateResponse {
                success: false,
                content: None,
                error: Some("Prompt required".into()),
                prompt: None,
                context: None,
            }),
        );
    }

    let result = agent
        .generate_with_context(&request.prompt, request.context.as_ref())
        .await;

    match result {
        GenerationResult::Success { text } => (
            StatusCode::OK,
            Json(GenerateResponse {
                success: true,
                content: Some(text),
                error: None,
                prompt: Some(request.prompt),
                context: Some(request.context.unwrap_or_default()),
            }),
        ),
        GenerationResult::Failure { message } => {
            tracing::warn!(error = %message, "generation request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(GenerateResponse {
                    success: false,
                    content: None,
                    error: Some(message),
                    prompt: Some(request.prompt),
                    context: None,
                }),
            )
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "agent": "postcraft" }))
}

pub fn router<B>(agent: Arc<ContentAgent<B>>) -> Router
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    Router::new()
        .route("/generate", post(generate::<B>))
        .route("/health", get(health))
        .with_state(agent)
}

/// Serve until Ctrl-C.
pub async fn serve<B>(agent: Arc<ContentAgent<B>>, addr: SocketAddr) -> anyhow::Result<()>
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router(agent))
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "failed to listen for shutdown signal");
            }
        })
        .await
        .context("server error")
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, header},
    };
    use tower::ServiceExt as _;

    use super::*;
    use crate::test_support::{Reply, ScriptedProvider};

    fn agent(reply: Reply) -> (Arc<ContentAgent<ScriptedProvider>>, crate::test_support::Seen) {
        let (provider, seen) = ScriptedProvider::new(reply);
        (Arc::new(ContentAgent::new(provider)), seen)
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_without_a_call() {
        let (agent, seen) = agent(Reply::Text("unused"));

        let (status, Json(body)) = generate(
            State(agent),
            Json(GenerateRequest {
                prompt: "   ".into(),
                context: None,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "success": false, "error": "Prompt required" })
        );
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn success_echoes_prompt_and_context() {
        let (agent, seen) = agent(Reply::Text("  Morning fuel, served warm.  "));
        let request: GenerateRequest = serde_json::from_value(json!({
            "prompt": "Caption for a coffee shop",
            "context": { "platform": "Instagram", "tone": "cozy" }
        }))
        .unwrap();

        let (status, Json(body)) = generate(State(agent), Json(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "success": true,
                "content": "Morning fuel, served warm.",
                "prompt": "Caption for a coffee shop",
                "context": { "platform": "Instagram", "tone": "cozy" }
            })
        );
        assert_eq!(
            seen.lock().unwrap()[0].messages[1].content.as_deref(),
            Some("Caption for a coffee shop\n\nAdditional context:\nPlatform: Instagram\nTone: cozy")
        );
    }

    #[tokio::test]
    async fn success_without_context_echoes_empty_object() {
        let (agent, _) = agent(Reply::Text("Rain again."));

        let (status, Json(body)) = generate(
            State(agent),
            Json(GenerateRequest {
                prompt: "Tweet about rain".into(),
                context: None,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_value(&body).unwrap()["context"], json!({}));
    }

    #[tokio::test]
    async fn generation_failure_maps_to_bad_gateway() {
        let (agent, _) = agent(Reply::Fail("quota exceeded"));

        let (status, Json(body)) = generate(
            State(agent),
            Json(GenerateRequest {
                prompt: "Tweet about rain".into(),
                context: None,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body.success);
        assert_eq!(
            body.error.as_deref(),
            Some("Error generating content: quota exceeded")
        );
        assert_eq!(body.prompt.as_deref(), Some("Tweet about rain"));
    }

    #[tokio::test]
    async fn health_reports_agent_name() {
        let Json(body) = health().await;
        assert_eq!(body, json!({ "status": "healthy", "agent": "postcraft" }));
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn router_serves_generate() {
        let (agent, seen) = agent(Reply::Text("Fresh beans daily."));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"prompt":"Caption for a coffee shop"}"#))
            .unwrap();

        let (status, body) = send(router(agent), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["content"], json!("Fresh beans daily."));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn router_serves_health() {
        let (agent, _) = agent(Reply::Text("unused"));
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router(agent), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy", "agent": "postcraft" }));
    }

    #[tokio::test]
    async fn router_rejects_get_on_generate() {
        let (agent, _) = agent(Reply::Text("unused"));
        let request = Request::builder()
            .uri("/generate")
            .body(Body::empty())
            .unwrap();

        let response = router(agent).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let request: GenerateRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.prompt.is_empty());
        assert!(request.context.is_none());
    }
}
