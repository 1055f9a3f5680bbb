//! Loading app configuration (prompt templates + optional model overrides) from TOML.
//!
//! See `AppConfig` and `Prompts` for expected schema.

use serde::Deserialize;
use tracing::{info, error};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub prompts: Prompts,
  /// Optional override of the hard-coded fallback model list used when
  /// model discovery fails or returns nothing.
  #[serde(default)]
  pub fallback_models: Vec<String>,
}

/// Prompt templates used by the Gemini client. Defaults mirror the production
/// prompts; override them in TOML if you need to tune tone/structure.
///
/// Placeholders filled by the quiz builder: {class}, {subject}, {chapter},
/// {difficulty}, {difficulty_guidelines}, {variation}, {stream_note},
/// {stream_focus}.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  pub mcq_template: String,
  pub mcq_strict_suffix: String,
  pub tutor_persona: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      mcq_template: "\
You are generating an NCERT-aligned MCQ test.
Context:
- Board: NCERT (India)
- Class: {class}
- Subject: {subject}{stream_note}
- Chapter/Unit: {chapter}
- Difficulty Level: {difficulty}
- Variation ID: {variation} (use this as a seed to diversify outputs and avoid repetition across runs)
Requirements:
- Create exactly 10 multiple-choice questions focused ONLY on this chapter.
- Each question must reference chapter-specific concepts/terms/examples (no generic syllabus).
- Difficulty Guidelines: {difficulty_guidelines}
- Vary question types: definition, application, short calculation (if Maths/Science), data/graph inference where applicable.
- Difficulty must be {difficulty} - {difficulty_guidelines}
- Include 4 options (A,B,C,D). Provide 'correct' as the index (0..3) and a short 'explanation'.
- Do not reuse the same wording between questions; aim for diverse coverage within the chapter.{stream_focus}
Output strictly JSON array with 10 items: [{\"q\": string, \"options\": [A,B,C,D], \"correct\": number, \"explanation\": string}].".into(),
      mcq_strict_suffix: "Before output: verify every question is on '{chapter}' and matches {difficulty} difficulty. If any is off-topic or wrong difficulty, replace it. Output ONLY JSON.".into(),
      tutor_persona: "\
You are NCERT Cool Tutor, a super fun and interactive AI study buddy!

Your personality:
- Extremely friendly, energetic, and encouraging (like a cool teacher who makes learning awesome!)
- Use fun analogies, examples, and real-world connections
- Keep it conversational and engaging - like talking to a friend who's really good at explaining things
- Use emojis sparingly (1-2 max) but make them count!
- Break down complex topics into simple, digestible chunks
- Be accurate and educational, but make it enjoyable!
- Use exclamations and enthusiasm to keep students motivated!
- If asked about NCERT topics, relate them to classes 6-12
- For academic questions, provide clear explanations with examples
- Keep responses 3-5 sentences for regular questions, longer if explaining complex concepts
- Always end on an encouraging note!

Answer style: Mix humor with education, use simple language, give practical examples, and make students feel confident!".into(),
    }
  }
}

/// Attempt to load `AppConfig` from AGENT_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("AGENT_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AppConfig>(&s) {
      Ok(cfg) => {
        info!(target: "ncert_backend", %path, "Loaded app config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "ncert_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "ncert_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
