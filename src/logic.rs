//! Core behaviors shared by the HTTP handlers.
//!
//! This includes:
//!   - the quiz-generation flow (provider call or terminal diagnostic)
//!   - the tutor-chat flow (provider call with an in-character fallback)
//!   - server-side password validation for the reset flow

use tracing::error;

use crate::domain::{ChatTurn, McqItem, QuizRequest};
use crate::gemini::EXHAUSTED_DIAGNOSTIC;
use crate::state::AppState;

/// Served with HTTP 200 when chat generation fails; the client renders it
/// in-character instead of an error screen.
pub const CHAT_FALLBACK_REPLY: &str = "Hey! Looks like I'm having trouble connecting to my brain right now! The tutoring service might not be responding. But I'm still here - try asking me something in a moment!";

/// Generate a quiz, or return the terminal diagnostic for the route to wrap
/// as a 500. A missing API key behaves like total candidate exhaustion.
pub async fn generate_quiz(state: &AppState, req: &QuizRequest) -> Result<Vec<McqItem>, String> {
  match &state.gemini {
    Some(g) => g.generate_mcqs(&state.prompts, req).await,
    None => {
      error!(target: "quiz", "GEMINI_API_KEY not set; cannot generate a test");
      Err(EXHAUSTED_DIAGNOSTIC.to_string())
    }
  }
}

/// Tutor reply, degrading to the canned in-character message on any failure.
pub async fn tutor_chat(state: &AppState, message: &str, history: &[ChatTurn]) -> String {
  if let Some(g) = &state.gemini {
    match g.tutor_reply(&state.prompts, message, history).await {
      Ok(t) => return t,
      Err(e) => {
        error!(target: "quiz", error = %e, "Tutor reply failed; serving fallback message")
      }
    }
  } else {
    error!(target: "quiz", "GEMINI_API_KEY not set; serving fallback chat message");
  }
  CHAT_FALLBACK_REPLY.to_string()
}

/// Server-side password rule for the reset flow: at least 6 chars and at
/// least one non-alphanumeric character.
pub fn validate_new_password(password: &str) -> Result<(), &'static str> {
  if password.len() < 6 {
    return Err("Password must be at least 6 characters");
  }
  if password.chars().all(|c| c.is_ascii_alphanumeric()) {
    return Err("Password must contain at least one special character");
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn password_rule_rejects_short_and_plain() {
    assert!(validate_new_password("a!b").is_err());
    assert!(validate_new_password("abcdef").is_err());
    assert!(validate_new_password("abcde!").is_ok());
    assert!(validate_new_password("p@ssw0rd").is_ok());
  }
}
