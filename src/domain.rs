//! Domain models used by the backend: quiz requests, MCQ items, chat turns,
//! and verification-code records.

use serde::{Deserialize, Serialize};

/// Requested difficulty for a generated test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}
impl Default for Difficulty {
  fn default() -> Self { Difficulty::Medium }
}
impl Difficulty {
  pub fn as_str(&self) -> &'static str {
    match self {
      Difficulty::Easy => "Easy",
      Difficulty::Medium => "Medium",
      Difficulty::Hard => "Hard",
    }
  }
}

/// Science stream for classes 11-12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
  #[serde(rename = "PCB")]
  Pcb,
  #[serde(rename = "PCM")]
  Pcm,
}
impl Stream {
  pub fn as_str(&self) -> &'static str {
    match self {
      Stream::Pcb => "PCB",
      Stream::Pcm => "PCM",
    }
  }
  /// Long-form subject list used inside prompts.
  pub fn subjects(&self) -> &'static str {
    match self {
      Stream::Pcb => "Physics, Chemistry, Biology",
      Stream::Pcm => "Physics, Chemistry, Mathematics",
    }
  }
}

/// A validated quiz-generation request. `class_number`/`subject`/`chapter`
/// are non-empty by the time this struct exists; `variation_seed` is opaque
/// and only biases prompt text for diversity.
#[derive(Clone, Debug)]
pub struct QuizRequest {
  pub class_number: u8,
  pub subject: String,
  pub chapter: String,
  pub difficulty: Difficulty,
  pub stream: Option<Stream>,
  pub variation_seed: String,
}

/// One multiple-choice question as served to the client. Field names match
/// the wire format the frontend expects (`q`/`options`/`correct`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct McqItem {
  pub q: String,
  pub options: Vec<String>,
  pub correct: u8,
  #[serde(default)]
  pub explanation: String,
}

/// One prior turn of the tutoring conversation, resent by the browser on
/// every request (nothing is persisted server-side).
#[derive(Clone, Debug, Deserialize)]
pub struct ChatTurn {
  #[serde(default)]
  pub role: String,
  #[serde(default)]
  pub content: String,
}

/// What a verification code is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
  Signup,
  Reset,
}
impl CodeKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      CodeKind::Signup => "signup",
      CodeKind::Reset => "reset",
    }
  }
}

/// One-time verification code record, keyed by lowercased email in the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CodeRecord {
  pub email: String,
  pub code: String,
  pub kind: CodeKind,
  pub expires_at: i64,
  pub created_at: i64,
  pub attempts: u32,
}
