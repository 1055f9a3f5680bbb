//! Shared test helpers: a mock Generative Language upstream and an app
//! spawner. The mock counts listing/generation calls so tests can assert on
//! the exact shape of the fallback loop.

// Each test binary compiles its own copy; not every helper is used by both.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{get, post},
  Json, Router,
};
use serde_json::{json, Value};

use crackncert_backend::routes::build_router;
use crackncert_backend::state::AppState;

pub struct MockGemini {
  pub models: Vec<String>,
  /// Listing endpoints return 500 so the client falls back to its static list.
  pub fail_listing: bool,
  /// Every generateContent call returns 404.
  pub fail_generation: bool,
  /// Models whose reply is unparseable prose instead of JSON.
  pub garbage_models: Vec<String>,
  pub reply_text: String,
  pub list_calls: AtomicUsize,
  pub generate_calls: AtomicUsize,
}

impl MockGemini {
  pub fn succeeding(models: &[&str], reply_text: String) -> Self {
    Self {
      models: models.iter().map(|m| m.to_string()).collect(),
      fail_listing: false,
      fail_generation: false,
      garbage_models: vec![],
      reply_text,
      list_calls: AtomicUsize::new(0),
      generate_calls: AtomicUsize::new(0),
    }
  }

  pub fn failing(models: &[&str]) -> Self {
    let mut mock = Self::succeeding(models, String::new());
    mock.fail_generation = true;
    mock
  }
}

/// Bind the mock upstream on an ephemeral port and serve it in the background.
pub async fn spawn_mock_gemini(mock: MockGemini) -> (String, Arc<MockGemini>) {
  let shared = Arc::new(mock);
  let app = Router::new()
    .route("/v1beta/models", get(list_models))
    .route("/v1/models", get(list_models))
    .route("/v1beta/models/:action", post(generate))
    .with_state(shared.clone());

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
  let addr = listener.local_addr().expect("mock addr");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("serve mock");
  });
  (format!("http://{}", addr), shared)
}

async fn list_models(State(mock): State<Arc<MockGemini>>) -> Response {
  mock.list_calls.fetch_add(1, Ordering::SeqCst);
  if mock.fail_listing {
    return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": {"message": "listing down"}})))
      .into_response();
  }
  let models: Vec<Value> = mock
    .models
    .iter()
    .map(|m| {
      json!({
        "name": format!("models/{}", m),
        "supportedGenerationMethods": ["generateContent"],
      })
    })
    .collect();
  Json(json!({ "models": models })).into_response()
}

async fn generate(
  State(mock): State<Arc<MockGemini>>,
  Path(action): Path<String>,
) -> Response {
  mock.generate_calls.fetch_add(1, Ordering::SeqCst);
  if mock.fail_generation {
    return (StatusCode::NOT_FOUND, Json(json!({"error": {"message": "model not found"}})))
      .into_response();
  }

  let model = action.split(':').next().unwrap_or_default();
  let text = if mock.garbage_models.iter().any(|m| m == model) {
    "Sure! Here are some great questions for you.".to_string()
  } else {
    mock.reply_text.clone()
  };
  Json(json!({
    "candidates": [{ "content": { "parts": [{ "text": text }] } }]
  }))
  .into_response()
}

/// A well-formed 10-item MCQ array, as the model would return it.
pub fn mcq_payload_text() -> String {
  let items: Vec<Value> = (0..10)
    .map(|i| {
      json!({
        "q": format!("Question {}", i + 1),
        "options": ["A", "B", "C", "D"],
        "correct": i % 4,
        "explanation": "Because."
      })
    })
    .collect();
  serde_json::to_string(&items).expect("mcq payload")
}

/// Bind the application router on an ephemeral port and serve it in the
/// background. Returns the base URL.
pub async fn spawn_app(state: AppState) -> String {
  let app = build_router(Arc::new(state));
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind app");
  let addr = listener.local_addr().expect("app addr");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("serve app");
  });
  format!("http://{}", addr)
}
