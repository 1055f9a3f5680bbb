//! End-to-end route behavior: validation messages, status codes, the
//! verification-code flow, and degradation when providers are absent.

mod common;

use serde_json::{json, Value};

use common::{mcq_payload_text, spawn_app, spawn_mock_gemini, MockGemini};
use crackncert_backend::codes::{CodeStore, MemoryCodeStore};
use crackncert_backend::config::Prompts;
use crackncert_backend::gemini::Gemini;
use crackncert_backend::state::AppState;

fn base_state() -> AppState {
  AppState {
    gemini: None,
    identity: None,
    codes: CodeStore::Memory(MemoryCodeStore::default()),
    prompts: Prompts::default(),
    dev_mode: true,
  }
}

async fn post_json(url: &str, body: Value) -> (reqwest::StatusCode, Value) {
  let res = reqwest::Client::new().post(url).json(&body).send().await.expect("request");
  let status = res.status();
  let body: Value = res.json().await.expect("json body");
  (status, body)
}

#[tokio::test]
async fn health_reports_ok() {
  let base = spawn_app(base_state()).await;
  let res = reqwest::get(format!("{}/api/health", base)).await.expect("request");
  assert_eq!(res.status(), reqwest::StatusCode::OK);
  let body: Value = res.json().await.expect("json");
  assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn chapters_resolve_curated_streams_and_placeholders() {
  let base = spawn_app(base_state()).await;
  let url = format!("{}/api/chapters", base);

  // classNumber tolerated as a numeric string.
  let (status, body) = post_json(&url, json!({"classNumber": "10", "subject": "Science"})).await;
  assert_eq!(status, reqwest::StatusCode::OK);
  assert_eq!(body["chapters"][0], json!("Chemical Reactions and Equations"));

  let (_, body) =
    post_json(&url, json!({"classNumber": 11, "subject": "Science", "stream": "PCB"})).await;
  assert_eq!(body["chapters"][0], json!("The Living World"));

  let (_, body) = post_json(&url, json!({"classNumber": 4, "subject": "Robotics"})).await;
  assert_eq!(body["chapters"].as_array().expect("array").len(), 12);
  assert_eq!(body["chapters"][0], json!("Robotics Chapter 1"));

  let (status, body) = post_json(&url, json!({"classNumber": 4})).await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Missing parameters"));
}

#[tokio::test]
async fn generate_mcqs_round_trips_through_the_provider() {
  let mock = MockGemini::succeeding(&["gemini-1.5-flash"], mcq_payload_text());
  let (mock_url, _mock) = spawn_mock_gemini(mock).await;

  let mut state = base_state();
  state.gemini = Some(Gemini::new("test-key", mock_url, vec![]).expect("client"));
  let base = spawn_app(state).await;

  let (status, body) = post_json(
    &format!("{}/api/generate-mcqs", base),
    json!({"classNumber": 9, "subject": "Science", "chapter": "Gravitation", "difficulty": "Hard"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::OK);
  assert_eq!(body["mcqs"].as_array().expect("array").len(), 10);
  assert_eq!(body["mcqs"][0]["q"], json!("Question 1"));
}

#[tokio::test]
async fn generate_mcqs_validates_input_and_reports_misconfiguration() {
  let base = spawn_app(base_state()).await;
  let url = format!("{}/api/generate-mcqs", base);

  let (status, body) = post_json(&url, json!({"classNumber": 9, "subject": "Science"})).await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Missing parameters"));

  // No provider configured behaves like total candidate exhaustion.
  let (status, body) = post_json(
    &url,
    json!({"classNumber": 9, "subject": "Science", "chapter": "Gravitation"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body["error"].as_str().expect("error").contains("API key"));
}

#[tokio::test]
async fn chat_degrades_to_an_in_character_reply() {
  let base = spawn_app(base_state()).await;
  let url = format!("{}/api/chat", base);

  let (status, body) = post_json(&url, json!({"message": "Explain osmosis"})).await;
  assert_eq!(status, reqwest::StatusCode::OK);
  let reply = body["response"].as_str().expect("response");
  assert!(reply.contains("try asking me something"));

  let (status, body) = post_json(&url, json!({"conversationHistory": []})).await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Message is required"));
}

#[tokio::test]
async fn verification_code_flow_is_one_time_use() {
  let base = spawn_app(base_state()).await;

  let (status, body) = post_json(
    &format!("{}/api/send-verification-code", base),
    json!({"email": "Student@Example.com", "type": "signup"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::OK);
  assert_eq!(body["success"], json!(true));
  // dev_mode echoes the issued code so the flow can be driven end-to-end.
  let code = body["code"].as_str().expect("dev code").to_string();

  let verify_url = format!("{}/api/verify-code", base);
  let (status, body) = post_json(
    &verify_url,
    json!({"email": "student@example.com", "code": "000000", "type": "signup"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Invalid verification code"));

  let (status, body) = post_json(
    &verify_url,
    json!({"email": "student@example.com", "code": code, "type": "signup"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::OK);
  assert_eq!(body["success"], json!(true));

  // Consumed: any further attempt is a 404.
  let (status, body) = post_json(
    &verify_url,
    json!({"email": "student@example.com", "code": code, "type": "signup"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
  assert_eq!(body["error"], json!("Verification code not found or expired"));
}

#[tokio::test]
async fn send_verification_code_validates_its_input() {
  let base = spawn_app(base_state()).await;
  let url = format!("{}/api/send-verification-code", base);

  let (status, body) = post_json(&url, json!({"type": "signup"})).await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Email is required"));

  let (status, body) = post_json(&url, json!({"email": "a@b.c", "type": "magic"})).await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Invalid type. Must be \"signup\" or \"reset\""));
}

#[tokio::test]
async fn reset_password_enforces_the_password_rule_and_needs_identity() {
  let base = spawn_app(base_state()).await;

  let (_, body) = post_json(
    &format!("{}/api/send-verification-code", base),
    json!({"email": "a@b.c", "type": "reset"}),
  )
  .await;
  let code = body["code"].as_str().expect("dev code").to_string();

  let reset_url = format!("{}/api/reset-password", base);
  let (status, body) = post_json(
    &reset_url,
    json!({"email": "a@b.c", "code": code, "newPassword": "short"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Password must be at least 6 characters"));

  let (status, body) = post_json(
    &reset_url,
    json!({"email": "a@b.c", "code": code, "newPassword": "abcdef123"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("Password must contain at least one special character"));

  // With a valid password but no identity client configured, the code is
  // consumed and the handler reports the configuration problem.
  let (status, body) = post_json(
    &reset_url,
    json!({"email": "a@b.c", "code": code, "newPassword": "p@ssw0rd!"}),
  )
  .await;
  assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body["error"].as_str().expect("error").contains("Server configuration error"));
}

#[tokio::test]
async fn verify_email_requires_a_uid_and_an_identity_client() {
  let base = spawn_app(base_state()).await;
  let url = format!("{}/api/verify-email", base);

  let (status, body) = post_json(&url, json!({})).await;
  assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], json!("User UID is required"));

  let (status, _) = post_json(&url, json!({"uid": "abc123"})).await;
  assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
}
