//! Thin client for the identity provider's admin REST surface (Google
//! Identity Toolkit). Only the operations the auth flows need: lookup by
//! email, password update, and flipping the email-verified flag.
//!
//! NOTE: We never log credentials or passwords, only email/uid and statuses.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::util::trunc_for_log;

pub const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

#[derive(Debug)]
pub enum IdentityError {
  /// No account exists for the given email/uid.
  UserNotFound,
  /// Anything else the provider reported.
  Provider(String),
}

impl std::fmt::Display for IdentityError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      IdentityError::UserNotFound => write!(f, "user not found"),
      IdentityError::Provider(e) => write!(f, "identity provider error: {}", e),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
  pub local_id: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub email_verified: bool,
}

#[derive(Clone)]
pub struct Identity {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
}

impl Identity {
  /// Construct the client if we find FIREBASE_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("FIREBASE_API_KEY").ok()?;
    let base_url =
      std::env::var("IDENTITY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    Self::new(api_key, base_url)
  }

  pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Option<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .ok()?;
    Some(Self { client, api_key: api_key.into(), base_url: base_url.into() })
  }

  async fn accounts_op(
    &self,
    op: &str,
    body: serde_json::Value,
  ) -> Result<serde_json::Value, IdentityError> {
    let url = format!("{}/v1/accounts:{}?key={}", self.base_url, op, self.api_key);
    let res = self
      .client
      .post(&url)
      .json(&body)
      .send()
      .await
      .map_err(|e| IdentityError::Provider(e.to_string()))?;

    if !res.status().is_success() {
      let status = res.status();
      let text = res.text().await.unwrap_or_default();
      if text.contains("EMAIL_NOT_FOUND") || text.contains("USER_NOT_FOUND") {
        return Err(IdentityError::UserNotFound);
      }
      return Err(IdentityError::Provider(format!(
        "HTTP {}: {}",
        status,
        trunc_for_log(&text, 200)
      )));
    }

    res.json().await.map_err(|e| IdentityError::Provider(e.to_string()))
  }

  #[instrument(level = "info", skip(self, email))]
  pub async fn get_user_by_email(&self, email: &str) -> Result<UserRecord, IdentityError> {
    let v = self.accounts_op("lookup", json!({ "email": [email] })).await?;
    let user = v
      .get("users")
      .and_then(|u| u.as_array())
      .and_then(|u| u.first())
      .cloned()
      .ok_or(IdentityError::UserNotFound)?;
    serde_json::from_value(user).map_err(|e| IdentityError::Provider(e.to_string()))
  }

  #[instrument(level = "info", skip(self, new_password), fields(uid = %local_id))]
  pub async fn update_password(
    &self,
    local_id: &str,
    new_password: &str,
  ) -> Result<(), IdentityError> {
    self
      .accounts_op("update", json!({ "localId": local_id, "password": new_password }))
      .await?;
    info!(target: "auth", uid = %local_id, "Password updated");
    Ok(())
  }

  #[instrument(level = "info", skip(self), fields(uid = %local_id))]
  pub async fn set_email_verified(&self, local_id: &str) -> Result<(), IdentityError> {
    self
      .accounts_op("update", json!({ "localId": local_id, "emailVerified": true }))
      .await?;
    info!(target: "auth", uid = %local_id, "Email marked verified");
    Ok(())
  }
}
