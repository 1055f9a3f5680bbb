//! Minimal Gemini (Generative Language API) client for our use-cases.
//!
//! We only call the model-listing and generateContent endpoints. Which model
//! names are enabled varies by API key/tier, so a single logical "generate"
//! is a sequential fallback over a prioritized candidate list: discovery,
//! flash-first ordering, then first structurally valid response wins.
//!
//! Calls are instrumented and log model names, latencies, and response sizes
//! (not contents). We never log the API key.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::config::Prompts;
use crate::domain::{ChatTurn, McqItem, QuizRequest};
use crate::quiz::{build_mcq_prompt, decode_mcqs};
use crate::util::trunc_for_log;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Static candidates used when model discovery fails or returns nothing.
pub const FALLBACK_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

/// Listing is tried against these API surfaces in order; generation always
/// goes through v1beta (where most models are exposed).
const LIST_API_VERSIONS: [&str; 2] = ["v1beta", "v1"];
const GENERATE_API_VERSION: &str = "v1beta";

/// Tutor replies shorter than this are treated as a failed candidate.
const MIN_REPLY_CHARS: usize = 10;

/// Terminal diagnostic returned once every candidate has failed in both the
/// primary and the strict pass.
pub const EXHAUSTED_DIAGNOSTIC: &str = "Gemini API failed: All models returned errors. This usually means: 1) Your API key doesn't have the Generative Language API enabled in Google Cloud Console, or 2) The API key format is incorrect, or 3) The key's quota is exhausted. Check https://aistudio.google.com/apikey to verify your key and enable the API.";

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
  pub temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub top_k: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub top_p: Option<f32>,
  pub max_output_tokens: u32,
}

/// Bounded output length sized for 10 MCQs.
pub const MCQ_GENERATION: GenerationConfig =
  GenerationConfig { temperature: 0.7, top_k: None, top_p: None, max_output_tokens: 3000 };

/// Short conversational replies.
pub const CHAT_GENERATION: GenerationConfig =
  GenerationConfig { temperature: 0.8, top_k: Some(40), top_p: Some(0.95), max_output_tokens: 400 };

#[derive(Clone)]
pub struct Gemini {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub fallback_models: Vec<String>,
}

impl Gemini {
  /// Construct the client if we find GEMINI_API_KEY; otherwise return None.
  /// `cfg_fallback` (from TOML) overrides the built-in static model list.
  pub fn from_env(cfg_fallback: &[String]) -> Option<Self> {
    let api_key = std::env::var("GEMINI_API_KEY").ok()?;
    let base_url =
      std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let fallback = if cfg_fallback.is_empty() {
      FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
    } else {
      cfg_fallback.to_vec()
    };
    Self::new(api_key, base_url, fallback)
  }

  pub fn new(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
    fallback_models: Vec<String>,
  ) -> Option<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .ok()?;
    Some(Self {
      client,
      api_key: api_key.into(),
      base_url: base_url.into(),
      fallback_models,
    })
  }

  /// Discover candidate model identifiers, flash-first. Falls back to the
  /// static list if both listing surfaces fail or come back empty.
  #[instrument(level = "info", skip(self))]
  pub async fn candidate_models(&self) -> Vec<String> {
    for ver in LIST_API_VERSIONS {
      match self.list_models_once(ver).await {
        Ok(models) if !models.is_empty() => {
          info!(target: "quiz", count = models.len(), api_version = ver, sample = ?models.iter().take(5).collect::<Vec<_>>(), "Model discovery succeeded");
          return prioritize(models);
        }
        Ok(_) => {
          info!(target: "quiz", api_version = ver, "Model listing returned no usable models");
        }
        Err(e) => {
          info!(target: "quiz", api_version = ver, error = %e, "Could not list models");
        }
      }
    }
    warn!(target: "quiz", "Model discovery failed; using static fallback list");
    prioritize(self.fallback_models.clone())
  }

  async fn list_models_once(&self, api_version: &str) -> Result<Vec<String>, String> {
    let url = format!("{}/{}/models?key={}", self.base_url, api_version, self.api_key);
    let res = self.client.get(&url).send().await.map_err(|e| e.to_string())?;
    if !res.status().is_success() {
      return Err(format!("HTTP {}", res.status()));
    }
    let body: ModelsList = res.json().await.map_err(|e| e.to_string())?;

    let names = body
      .models
      .into_iter()
      .filter_map(|m| {
        let name = m.name?;
        let name = name.strip_prefix("models/").unwrap_or(&name).to_string();
        let methods = m.supported_generation_methods;
        let generates =
          methods.is_empty() || methods.iter().any(|s| s == "generateContent");
        (name.contains("gemini") && generates).then_some(name)
      })
      .collect();
    Ok(names)
  }

  /// One generateContent call against one model. Non-2xx, transport errors,
  /// and empty text all come back as Err so the fallback loop can move on.
  #[instrument(level = "info", skip(self, prompt), fields(model = %model, prompt_len = prompt.len()))]
  pub async fn generate_once(
    &self,
    model: &str,
    prompt: &str,
    cfg: GenerationConfig,
  ) -> Result<String, String> {
    let url = format!(
      "{}/{}/models/{}:generateContent?key={}",
      self.base_url, GENERATE_API_VERSION, model, self.api_key
    );
    let req = GenerateContentRequest {
      contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
      generation_config: cfg,
    };

    let res = self
      .client
      .post(&url)
      .header(CONTENT_TYPE, "application/json")
      .json(&req)
      .send()
      .await
      .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_provider_error(&body).unwrap_or(body);
      return Err(format!("Gemini HTTP {}: {}", status, trunc_for_log(&msg, 150)));
    }

    let body: GenerateContentResponse = res.json().await.map_err(|e| e.to_string())?;
    let text = body
      .candidates
      .first()
      .and_then(|c| c.content.as_ref())
      .and_then(|c| c.parts.first())
      .map(|p| p.text.trim().to_string())
      .unwrap_or_default();

    if text.is_empty() {
      return Err("empty response text".into());
    }
    info!(target: "quiz", response_len = text.len(), "generateContent succeeded");
    Ok(text)
  }

  // --- High-level helpers (domain-specialized) ---

  /// Generate a 10-question MCQ test: primary pass over all candidates, then
  /// exactly one strict-prompt pass, then a terminal diagnostic.
  #[instrument(
    level = "info",
    skip(self, prompts, req),
    fields(class = req.class_number, subject = %req.subject, chapter = %req.chapter, difficulty = req.difficulty.as_str())
  )]
  pub async fn generate_mcqs(
    &self,
    prompts: &Prompts,
    req: &QuizRequest,
  ) -> Result<Vec<McqItem>, String> {
    let models = self.candidate_models().await;
    let start = Instant::now();

    let prompt = build_mcq_prompt(prompts, req, false);
    if let Some(mcqs) = self.mcq_pass(&models, &prompt).await {
      info!(target: "quiz", elapsed = ?start.elapsed(), count = mcqs.len(), "MCQ generation succeeded");
      return Ok(mcqs);
    }

    warn!(target: "quiz", "Primary pass exhausted; retrying with strict prompt");
    let strict_prompt = build_mcq_prompt(prompts, req, true);
    if let Some(mcqs) = self.mcq_pass(&models, &strict_prompt).await {
      info!(target: "quiz", elapsed = ?start.elapsed(), count = mcqs.len(), "MCQ generation succeeded on strict pass");
      return Ok(mcqs);
    }

    error!(target: "quiz", candidates = models.len(), elapsed = ?start.elapsed(), "All candidate models failed in both passes");
    Err(EXHAUSTED_DIAGNOSTIC.to_string())
  }

  /// One full pass over the candidate list with a fixed prompt.
  async fn mcq_pass(&self, models: &[String], prompt: &str) -> Option<Vec<McqItem>> {
    first_success(models, |model| {
      let this = self.clone();
      let prompt = prompt.to_string();
      async move {
        let text = this.generate_once(&model, &prompt, MCQ_GENERATION).await?;
        decode_mcqs(&text).map_err(|e| e.to_string())
      }
    })
    .await
  }

  /// Single-turn tutor reply with a trailing conversation window.
  #[instrument(level = "info", skip(self, prompts, message, history), fields(message_len = message.len(), history_len = history.len()))]
  pub async fn tutor_reply(
    &self,
    prompts: &Prompts,
    message: &str,
    history: &[ChatTurn],
  ) -> Result<String, String> {
    let prompt = build_tutor_prompt(&prompts.tutor_persona, message, history);
    let models = self.candidate_models().await;

    first_success(&models, |model| {
      let this = self.clone();
      let prompt = prompt.clone();
      async move {
        let text = this.generate_once(&model, &prompt, CHAT_GENERATION).await?;
        if text.len() <= MIN_REPLY_CHARS {
          return Err(format!("reply too short ({} chars)", text.len()));
        }
        Ok(text)
      }
    })
    .await
    .ok_or_else(|| "All candidate models failed".to_string())
  }
}

/// Try candidates strictly in order; the first Ok wins. Per-candidate
/// failures are logged and swallowed; None means total exhaustion.
pub async fn first_success<T, F, Fut>(candidates: &[String], mut attempt: F) -> Option<T>
where
  F: FnMut(String) -> Fut,
  Fut: Future<Output = Result<T, String>>,
{
  for candidate in candidates {
    match attempt(candidate.clone()).await {
      Ok(v) => return Some(v),
      Err(e) => {
        info!(target: "quiz", candidate = %candidate, error = %e, "Candidate failed; trying next")
      }
    }
  }
  None
}

/// Flash variants first (cheaper/faster), preserving listing order otherwise.
fn prioritize(models: Vec<String>) -> Vec<String> {
  let (mut flash, rest): (Vec<_>, Vec<_>) =
    models.into_iter().partition(|m| m.contains("flash"));
  flash.extend(rest);
  flash
}

/// Splice the persona, the last few turns, and the current question into one
/// prompt. The browser resends history each call; nothing persists here.
pub fn build_tutor_prompt(persona: &str, message: &str, history: &[ChatTurn]) -> String {
  let mut prompt = String::with_capacity(persona.len() + message.len() + 256);
  prompt.push_str(persona);
  prompt.push_str("\n\n");

  let start = history.len().saturating_sub(3);
  let recent = &history[start..];
  if !recent.is_empty() {
    prompt.push_str("Previous conversation:\n");
    for turn in recent {
      let who = if turn.role == "user" { "Student" } else { "You" };
      prompt.push_str(&format!("{}: {}\n", who, turn.content));
    }
    prompt.push('\n');
  }

  prompt.push_str(&format!(
    "Student's current question: \"{}\"\n\nAnswer directly as NCERT Cool Tutor:",
    message
  ));
  prompt
}

// --- Wire DTOs ---

#[derive(Serialize)]
struct GenerateContentRequest {
  contents: Vec<Content>,
  #[serde(rename = "generationConfig")]
  generation_config: GenerationConfig,
}
#[derive(Serialize)]
struct Content {
  parts: Vec<Part>,
}
#[derive(Serialize)]
struct Part {
  text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}
#[derive(Deserialize)]
struct Candidate {
  #[serde(default)]
  content: Option<ContentResp>,
}
#[derive(Deserialize)]
struct ContentResp {
  #[serde(default)]
  parts: Vec<PartResp>,
}
#[derive(Deserialize)]
struct PartResp {
  #[serde(default)]
  text: String,
}

#[derive(Deserialize)]
struct ModelsList {
  #[serde(default)]
  models: Vec<ModelInfo>,
}
#[derive(Deserialize)]
struct ModelInfo {
  #[serde(default)]
  name: Option<String>,
  #[serde(default, rename = "supportedGenerationMethods")]
  supported_generation_methods: Vec<String>,
}

/// Try to extract a clean error message from a provider error body.
fn extract_provider_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap {
    error: EObj,
  }
  #[derive(Deserialize)]
  struct EObj {
    message: String,
  }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prioritize_puts_flash_models_first_stably() {
    let models = vec![
      "gemini-1.5-pro".to_string(),
      "gemini-1.5-flash".to_string(),
      "gemini-pro".to_string(),
      "gemini-2.0-flash-lite".to_string(),
    ];
    let got = prioritize(models);
    assert_eq!(
      got,
      vec!["gemini-1.5-flash", "gemini-2.0-flash-lite", "gemini-1.5-pro", "gemini-pro"]
    );
  }

  #[test]
  fn tutor_prompt_keeps_only_last_three_turns() {
    let turns: Vec<ChatTurn> = (0..6)
      .map(|i| ChatTurn {
        role: if i % 2 == 0 { "user".into() } else { "assistant".into() },
        content: format!("turn {}", i),
      })
      .collect();
    let p = build_tutor_prompt("Persona.", "What is osmosis?", &turns);
    assert!(!p.contains("turn 2"));
    assert!(p.contains("turn 3"));
    assert!(p.contains("turn 5"));
    assert!(p.contains("Student: turn 4"));
    assert!(p.contains("You: turn 3"));
    assert!(p.contains("Student's current question: \"What is osmosis?\""));
  }

  #[test]
  fn tutor_prompt_without_history_has_no_context_block() {
    let p = build_tutor_prompt("Persona.", "Hi!", &[]);
    assert!(!p.contains("Previous conversation:"));
  }
}
