//! Verification-code issue/check state machine and its storage backends.
//!
//! Lifecycle per (lowercased email) key:
//!   absent -> issued -> { consumed | expired | attempts-exhausted }
//!
//! Codes are 6-digit numeric strings with a 10-minute TTL and at most 5
//! failed attempts; a successful check consumes (deletes) the record.
//!
//! Two backends: an in-memory map for development/tests and a Firestore REST
//! store (`verificationCodes/{email}` documents) for deployments. The
//! attempts counter is incremented atomically in both backends: under the
//! write lock in memory, and via a `commit` field transform in Firestore.

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::domain::{CodeKind, CodeRecord};
use crate::util::now_ms;

pub const CODE_TTL_MS: i64 = 10 * 60 * 1000;
pub const MAX_ATTEMPTS: u32 = 5;

/// Generate a random 6-digit verification code.
pub fn generate_code() -> String {
  rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

/// Why a code check was rejected.
#[derive(Debug, PartialEq)]
pub enum CodeCheckError {
  NotFound,
  Expired,
  WrongKind,
  TooManyAttempts,
  WrongCode,
  Store(String),
}

/// Storage backend for verification-code records, selected at startup and
/// injected through `AppState`.
pub enum CodeStore {
  Memory(MemoryCodeStore),
  Firestore(FirestoreCodeStore),
}

impl CodeStore {
  pub async fn load(&self, email: &str) -> Result<Option<CodeRecord>, String> {
    match self {
      CodeStore::Memory(s) => s.load(email).await,
      CodeStore::Firestore(s) => s.load(email).await,
    }
  }

  pub async fn save(&self, rec: &CodeRecord) -> Result<(), String> {
    match self {
      CodeStore::Memory(s) => s.save(rec).await,
      CodeStore::Firestore(s) => s.save(rec).await,
    }
  }

  pub async fn delete(&self, email: &str) -> Result<(), String> {
    match self {
      CodeStore::Memory(s) => s.delete(email).await,
      CodeStore::Firestore(s) => s.delete(email).await,
    }
  }

  pub async fn bump_attempts(&self, email: &str) -> Result<(), String> {
    match self {
      CodeStore::Memory(s) => s.bump_attempts(email).await,
      CodeStore::Firestore(s) => s.bump_attempts(email).await,
    }
  }
}

/// Issue a fresh code for the email, overwriting any prior record.
#[instrument(level = "info", skip(store, email), fields(kind = kind.as_str()))]
pub async fn issue_code(store: &CodeStore, email: &str, kind: CodeKind) -> Result<String, String> {
  let email = email.trim().to_lowercase();
  let code = generate_code();
  let now = now_ms();
  let rec = CodeRecord {
    email: email.clone(),
    code: code.clone(),
    kind,
    expires_at: now + CODE_TTL_MS,
    created_at: now,
    attempts: 0,
  };
  store.save(&rec).await?;
  info!(target: "auth", %email, kind = kind.as_str(), "Verification code issued");
  Ok(code)
}

/// Run the check state machine for one submitted code.
///
/// Order matters: absent, then expiry (consumes), then kind, then the
/// attempts cap (consumes, even if the submitted code is correct), then the
/// comparison itself. A match consumes the record.
#[instrument(level = "info", skip(store, email, code), fields(kind = kind.as_str()))]
pub async fn check_code(
  store: &CodeStore,
  email: &str,
  code: &str,
  kind: CodeKind,
) -> Result<(), CodeCheckError> {
  let email = email.trim().to_lowercase();

  let rec = match store.load(&email).await.map_err(CodeCheckError::Store)? {
    Some(r) => r,
    None => return Err(CodeCheckError::NotFound),
  };

  if rec.expires_at < now_ms() {
    let _ = store.delete(&email).await;
    info!(target: "auth", %email, "Expired verification code consumed");
    return Err(CodeCheckError::Expired);
  }

  if rec.kind != kind {
    return Err(CodeCheckError::WrongKind);
  }

  if rec.attempts >= MAX_ATTEMPTS {
    let _ = store.delete(&email).await;
    info!(target: "auth", %email, "Attempts exhausted; verification code consumed");
    return Err(CodeCheckError::TooManyAttempts);
  }

  if rec.code != code {
    if let Err(e) = store.bump_attempts(&email).await {
      error!(target: "auth", %email, error = %e, "Failed to record wrong attempt");
    }
    return Err(CodeCheckError::WrongCode);
  }

  store.delete(&email).await.map_err(CodeCheckError::Store)?;
  info!(target: "auth", %email, "Verification code consumed");
  Ok(())
}

// --- In-memory backend ---

#[derive(Default)]
pub struct MemoryCodeStore {
  map: RwLock<HashMap<String, CodeRecord>>,
}

impl MemoryCodeStore {
  pub async fn load(&self, email: &str) -> Result<Option<CodeRecord>, String> {
    Ok(self.map.read().await.get(email).cloned())
  }

  pub async fn save(&self, rec: &CodeRecord) -> Result<(), String> {
    self.map.write().await.insert(rec.email.clone(), rec.clone());
    Ok(())
  }

  pub async fn delete(&self, email: &str) -> Result<(), String> {
    self.map.write().await.remove(email);
    Ok(())
  }

  pub async fn bump_attempts(&self, email: &str) -> Result<(), String> {
    if let Some(rec) = self.map.write().await.get_mut(email) {
      rec.attempts += 1;
    }
    Ok(())
  }
}

// --- Firestore REST backend ---

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
const COLLECTION: &str = "verificationCodes";

pub struct FirestoreCodeStore {
  pub client: reqwest::Client,
  pub project_id: String,
  pub api_key: String,
  pub base_url: String,
}

impl FirestoreCodeStore {
  /// Construct the store if we find FIREBASE_PROJECT_ID; otherwise None.
  pub fn from_env() -> Option<Self> {
    let project_id = std::env::var("FIREBASE_PROJECT_ID").ok()?;
    let api_key = std::env::var("FIREBASE_API_KEY").unwrap_or_default();
    let base_url = std::env::var("FIRESTORE_BASE_URL")
      .unwrap_or_else(|_| DEFAULT_FIRESTORE_BASE_URL.into());
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .ok()?;
    Some(Self { client, project_id, api_key, base_url })
  }

  fn doc_name(&self, email: &str) -> String {
    format!(
      "projects/{}/databases/(default)/documents/{}/{}",
      self.project_id, COLLECTION, email
    )
  }

  fn doc_url(&self, email: &str) -> String {
    format!("{}/v1/{}?key={}", self.base_url, self.doc_name(email), self.api_key)
  }

  pub async fn load(&self, email: &str) -> Result<Option<CodeRecord>, String> {
    let res = self
      .client
      .get(self.doc_url(email))
      .send()
      .await
      .map_err(|e| e.to_string())?;
    if res.status() == reqwest::StatusCode::NOT_FOUND {
      return Ok(None);
    }
    if !res.status().is_success() {
      return Err(format!("Firestore GET HTTP {}", res.status()));
    }
    let doc: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;
    record_from_doc(&doc).map(Some)
  }

  pub async fn save(&self, rec: &CodeRecord) -> Result<(), String> {
    let res = self
      .client
      .patch(self.doc_url(&rec.email))
      .json(&record_to_doc(rec))
      .send()
      .await
      .map_err(|e| e.to_string())?;
    if !res.status().is_success() {
      return Err(format!("Firestore PATCH HTTP {}", res.status()));
    }
    Ok(())
  }

  pub async fn delete(&self, email: &str) -> Result<(), String> {
    let res = self
      .client
      .delete(self.doc_url(email))
      .send()
      .await
      .map_err(|e| e.to_string())?;
    // Deleting an already-gone document is fine.
    if !res.status().is_success() && res.status() != reqwest::StatusCode::NOT_FOUND {
      return Err(format!("Firestore DELETE HTTP {}", res.status()));
    }
    Ok(())
  }

  /// Atomic server-side increment; concurrent wrong guesses cannot lose
  /// updates the way a read-then-write would.
  pub async fn bump_attempts(&self, email: &str) -> Result<(), String> {
    let url = format!(
      "{}/v1/projects/{}/databases/(default)/documents:commit?key={}",
      self.base_url, self.project_id, self.api_key
    );
    let body = serde_json::json!({
      "writes": [{
        "transform": {
          "document": self.doc_name(email),
          "fieldTransforms": [{
            "fieldPath": "attempts",
            "increment": { "integerValue": "1" }
          }]
        }
      }]
    });
    let res = self
      .client
      .post(&url)
      .json(&body)
      .send()
      .await
      .map_err(|e| e.to_string())?;
    if !res.status().is_success() {
      return Err(format!("Firestore commit HTTP {}", res.status()));
    }
    Ok(())
  }
}

fn record_to_doc(rec: &CodeRecord) -> serde_json::Value {
  serde_json::json!({
    "fields": {
      "email": { "stringValue": rec.email },
      "code": { "stringValue": rec.code },
      "type": { "stringValue": rec.kind.as_str() },
      "expiresAt": { "integerValue": rec.expires_at.to_string() },
      "createdAt": { "integerValue": rec.created_at.to_string() },
      "attempts": { "integerValue": rec.attempts.to_string() },
    }
  })
}

fn record_from_doc(doc: &serde_json::Value) -> Result<CodeRecord, String> {
  let fields = doc.get("fields").ok_or("Firestore document has no fields")?;
  let str_field = |k: &str| -> Option<String> {
    fields
      .get(k)
      .and_then(|v| v.get("stringValue"))
      .and_then(|v| v.as_str())
      .map(str::to_string)
  };
  let int_field = |k: &str| -> Option<i64> {
    fields
      .get(k)
      .and_then(|v| v.get("integerValue"))
      .and_then(|v| v.as_str())
      .and_then(|v| v.parse::<i64>().ok())
  };

  let kind = match str_field("type").as_deref() {
    Some("signup") => CodeKind::Signup,
    Some("reset") => CodeKind::Reset,
    other => return Err(format!("unknown code type {:?}", other)),
  };

  Ok(CodeRecord {
    email: str_field("email").unwrap_or_default(),
    code: str_field("code").ok_or("Firestore document missing code")?,
    kind,
    expires_at: int_field("expiresAt").ok_or("Firestore document missing expiresAt")?,
    created_at: int_field("createdAt").unwrap_or(0),
    attempts: int_field("attempts").unwrap_or(0).max(0) as u32,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn memory() -> CodeStore {
    CodeStore::Memory(MemoryCodeStore::default())
  }

  #[tokio::test]
  async fn code_is_six_digits() {
    for _ in 0..50 {
      let c = generate_code();
      assert_eq!(c.len(), 6);
      assert!(c.chars().all(|ch| ch.is_ascii_digit()));
    }
  }

  #[tokio::test]
  async fn correct_code_consumes_the_record() {
    let store = memory();
    let code = issue_code(&store, "User@Example.COM", CodeKind::Signup).await.expect("issue");

    // Lookup is keyed by the lowercased email.
    assert_eq!(check_code(&store, "user@example.com", &code, CodeKind::Signup).await, Ok(()));
    assert_eq!(
      check_code(&store, "user@example.com", &code, CodeKind::Signup).await,
      Err(CodeCheckError::NotFound)
    );
  }

  #[tokio::test]
  async fn kind_mismatch_keeps_the_record() {
    let store = memory();
    let code = issue_code(&store, "a@b.c", CodeKind::Signup).await.expect("issue");

    assert_eq!(
      check_code(&store, "a@b.c", &code, CodeKind::Reset).await,
      Err(CodeCheckError::WrongKind)
    );
    assert_eq!(check_code(&store, "a@b.c", &code, CodeKind::Signup).await, Ok(()));
  }

  #[tokio::test]
  async fn sixth_attempt_is_rejected_even_with_the_right_code() {
    let store = memory();
    let code = issue_code(&store, "a@b.c", CodeKind::Reset).await.expect("issue");

    for _ in 0..5 {
      assert_eq!(
        check_code(&store, "a@b.c", "000000", CodeKind::Reset).await,
        Err(CodeCheckError::WrongCode)
      );
    }
    assert_eq!(
      check_code(&store, "a@b.c", &code, CodeKind::Reset).await,
      Err(CodeCheckError::TooManyAttempts)
    );
    // The record was consumed along with the rejection.
    assert_eq!(
      check_code(&store, "a@b.c", &code, CodeKind::Reset).await,
      Err(CodeCheckError::NotFound)
    );
  }

  #[tokio::test]
  async fn expired_code_is_rejected_and_deleted() {
    let store = memory();
    let rec = CodeRecord {
      email: "a@b.c".into(),
      code: "123456".into(),
      kind: CodeKind::Signup,
      expires_at: now_ms() - 1,
      created_at: now_ms() - CODE_TTL_MS - 1,
      attempts: 0,
    };
    store.save(&rec).await.expect("save");

    assert_eq!(
      check_code(&store, "a@b.c", "123456", CodeKind::Signup).await,
      Err(CodeCheckError::Expired)
    );
    assert_eq!(
      check_code(&store, "a@b.c", "123456", CodeKind::Signup).await,
      Err(CodeCheckError::NotFound)
    );
  }

  #[tokio::test]
  async fn reissue_overwrites_the_previous_code() {
    let store = memory();
    let first = issue_code(&store, "a@b.c", CodeKind::Signup).await.expect("issue");
    let second = issue_code(&store, "a@b.c", CodeKind::Signup).await.expect("issue");

    if first != second {
      assert_eq!(
        check_code(&store, "a@b.c", &first, CodeKind::Signup).await,
        Err(CodeCheckError::WrongCode)
      );
    }
    assert_eq!(check_code(&store, "a@b.c", &second, CodeKind::Signup).await, Ok(()));
  }

  #[test]
  fn firestore_document_round_trips() {
    let rec = CodeRecord {
      email: "a@b.c".into(),
      code: "654321".into(),
      kind: CodeKind::Reset,
      expires_at: 1_700_000_600_000,
      created_at: 1_700_000_000_000,
      attempts: 3,
    };
    let doc = record_to_doc(&rec);
    let back = record_from_doc(&doc).expect("decode");
    assert_eq!(back.email, rec.email);
    assert_eq!(back.code, rec.code);
    assert_eq!(back.kind, rec.kind);
    assert_eq!(back.expires_at, rec.expires_at);
    assert_eq!(back.attempts, rec.attempts);
  }
}
