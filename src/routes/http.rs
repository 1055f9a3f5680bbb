//! HTTP endpoint handlers. These are thin wrappers that validate input,
//! forward to core logic, and map failures to the specific status/message
//! pairs the client expects. Nothing throws past a handler.

use std::sync::Arc;

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::codes::{check_code, issue_code, CodeCheckError};
use crate::curriculum::chapters_for;
use crate::domain::{CodeKind, QuizRequest};
use crate::identity::IdentityError;
use crate::logic::{generate_quiz, tutor_chat, validate_new_password};
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

fn bad_request(msg: &str) -> Response {
  (StatusCode::BAD_REQUEST, Json(ErrorOut { error: msg.to_string() })).into_response()
}

fn server_error(msg: &str) -> Response {
  (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorOut { error: msg.to_string() })).into_response()
}

fn parse_kind(raw: Option<&str>) -> Option<CodeKind> {
  match raw {
    Some("signup") => Some(CodeKind::Signup),
    Some("reset") => Some(CodeKind::Reset),
    _ => None,
  }
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_generate_mcqs(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GenerateMcqsIn>,
) -> Response {
  let (class_number, subject, chapter) = match (body.class_number, body.subject, body.chapter) {
    (Some(c), Some(s), Some(ch)) if !s.trim().is_empty() && !ch.trim().is_empty() => (c, s, ch),
    _ => return bad_request("Missing parameters"),
  };

  let req = QuizRequest {
    class_number,
    subject,
    chapter,
    difficulty: body.difficulty.unwrap_or_default(),
    stream: body.stream,
    variation_seed: body
      .variation
      .filter(|v| !v.trim().is_empty())
      .unwrap_or_else(|| Uuid::new_v4().to_string()),
  };
  info!(
    target: "quiz",
    class = req.class_number,
    subject = %req.subject,
    chapter = %req.chapter,
    difficulty = req.difficulty.as_str(),
    stream = req.stream.map(|s| s.as_str()).unwrap_or("None"),
    "MCQ generation requested"
  );

  match generate_quiz(&state, &req).await {
    Ok(mcqs) => (StatusCode::OK, Json(McqsOut { mcqs })).into_response(),
    Err(e) => server_error(&e),
  }
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_chat(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ChatIn>,
) -> Response {
  let message = match body.message {
    Some(m) if !m.trim().is_empty() => m,
    _ => return bad_request("Message is required"),
  };
  info!(target: "quiz", message_len = message.len(), history = body.conversation_history.len(), "Chat requested");

  let reply = tutor_chat(&state, &message, &body.conversation_history).await;
  (StatusCode::OK, Json(ChatOut { response: reply })).into_response()
}

#[instrument(level = "info", skip(body))]
pub async fn http_chapters(Json(body): Json<ChaptersIn>) -> Response {
  let (class_number, subject) = match (body.class_number, body.subject) {
    (Some(c), Some(s)) if !s.trim().is_empty() => (c, s),
    _ => return bad_request("Missing parameters"),
  };

  let chapters = chapters_for(class_number, &subject, body.stream);
  info!(target: "quiz", class = class_number, subject = %subject, count = chapters.len(), "Chapters served");
  (StatusCode::OK, Json(ChaptersOut { chapters })).into_response()
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_send_verification_code(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SendCodeIn>,
) -> Response {
  let email = match body.email {
    Some(e) if !e.trim().is_empty() => e,
    _ => return bad_request("Email is required"),
  };
  let kind = match parse_kind(body.kind.as_deref()) {
    Some(k) => k,
    None => return bad_request("Invalid type. Must be \"signup\" or \"reset\""),
  };

  match issue_code(&state.codes, &email, kind).await {
    Ok(code) => {
      let out = SendCodeOut {
        success: true,
        message: format!("Verification code sent to {}", email),
        code: state.dev_mode.then_some(code),
      };
      (StatusCode::OK, Json(out)).into_response()
    }
    Err(e) => {
      error!(target: "auth", error = %e, "Failed to store verification code");
      server_error("Failed to send verification code. Please try again.")
    }
  }
}

fn code_check_response(err: CodeCheckError) -> Response {
  let (status, msg) = match err {
    CodeCheckError::NotFound => {
      (StatusCode::NOT_FOUND, "Verification code not found or expired")
    }
    CodeCheckError::Expired => (
      StatusCode::BAD_REQUEST,
      "Verification code has expired. Please request a new one.",
    ),
    CodeCheckError::WrongKind => (StatusCode::BAD_REQUEST, "Invalid verification code type"),
    CodeCheckError::TooManyAttempts => (
      StatusCode::BAD_REQUEST,
      "Too many failed attempts. Please request a new code.",
    ),
    CodeCheckError::WrongCode => (StatusCode::BAD_REQUEST, "Invalid verification code"),
    CodeCheckError::Store(e) => {
      error!(target: "auth", error = %e, "Code store failure");
      (StatusCode::INTERNAL_SERVER_ERROR, "Failed to verify code. Please try again.")
    }
  };
  (status, Json(ErrorOut { error: msg.to_string() })).into_response()
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_verify_code(
  State(state): State<Arc<AppState>>,
  Json(body): Json<VerifyCodeIn>,
) -> Response {
  let (email, code, kind_raw) = match (body.email, body.code, body.kind) {
    (Some(e), Some(c), Some(k)) if !e.trim().is_empty() && !c.trim().is_empty() => (e, c, k),
    _ => return bad_request("Email, code, and type are required"),
  };
  let kind = match parse_kind(Some(kind_raw.as_str())) {
    Some(k) => k,
    None => return bad_request("Invalid verification code type"),
  };

  match check_code(&state.codes, &email, &code, kind).await {
    Ok(()) => (
      StatusCode::OK,
      Json(SuccessOut { success: true, message: "Code verified successfully".into() }),
    )
      .into_response(),
    Err(e) => code_check_response(e),
  }
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_reset_password(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ResetPasswordIn>,
) -> Response {
  let (email, code, new_password) = match (body.email, body.code, body.new_password) {
    (Some(e), Some(c), Some(p)) if !e.trim().is_empty() && !c.trim().is_empty() => (e, c, p),
    _ => return bad_request("Email, code, and new password are required"),
  };
  if let Err(msg) = validate_new_password(&new_password) {
    return bad_request(msg);
  }

  if let Err(e) = check_code(&state.codes, &email, &code, CodeKind::Reset).await {
    return code_check_response(e);
  }

  let identity = match &state.identity {
    Some(i) => i,
    None => {
      error!(target: "auth", "Identity admin client not initialized");
      return server_error("Server configuration error. Please contact support.");
    }
  };

  let user = match identity.get_user_by_email(&email.trim().to_lowercase()).await {
    Ok(u) => u,
    Err(IdentityError::UserNotFound) => {
      return (
        StatusCode::NOT_FOUND,
        Json(ErrorOut { error: "No account found with this email address".into() }),
      )
        .into_response()
    }
    Err(IdentityError::Provider(e)) => {
      error!(target: "auth", error = %e, "User lookup failed");
      return server_error("Failed to reset password. Please try again or contact support.");
    }
  };

  match identity.update_password(&user.local_id, &new_password).await {
    Ok(()) => (
      StatusCode::OK,
      Json(SuccessOut {
        success: true,
        message: "Password reset successful. You can now log in with your new password.".into(),
      }),
    )
      .into_response(),
    Err(e) => {
      error!(target: "auth", error = %e, "Password update failed");
      server_error("Failed to reset password. Please try again or contact support.")
    }
  }
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_verify_email(
  State(state): State<Arc<AppState>>,
  Json(body): Json<VerifyEmailIn>,
) -> Response {
  let uid = match body.uid {
    Some(u) if !u.trim().is_empty() => u,
    _ => return bad_request("User UID is required"),
  };

  let identity = match &state.identity {
    Some(i) => i,
    None => {
      error!(target: "auth", "Identity admin client not initialized");
      return server_error("Server configuration error. Identity admin client not initialized.");
    }
  };

  match identity.set_email_verified(&uid).await {
    Ok(()) => (
      StatusCode::OK,
      Json(SuccessOut { success: true, message: "Email verified successfully".into() }),
    )
      .into_response(),
    Err(e) => {
      error!(target: "auth", error = %e, "Email verification failed");
      server_error(&format!("Failed to verify email: {}", e))
    }
  }
}
