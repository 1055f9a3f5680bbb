//! Application state: provider clients, the verification-code store, and prompts.
//!
//! This module owns:
//!   - the optional Gemini client (quiz + chat generation)
//!   - the optional identity admin client (signup/reset finalization)
//!   - the verification-code store backend
//!   - the prompts struct (from TOML or defaults)
//!
//! Everything is constructed once at startup and injected into each request
//! handler through an `Arc<AppState>`; there are no module-level singletons.

use tracing::{info, instrument, warn};

use crate::codes::{CodeStore, FirestoreCodeStore, MemoryCodeStore};
use crate::config::{load_app_config_from_env, Prompts};
use crate::gemini::Gemini;
use crate::identity::Identity;

pub struct AppState {
    pub gemini: Option<Gemini>,
    pub identity: Option<Identity>,
    pub codes: CodeStore,
    pub prompts: Prompts,
    /// Development mode echoes issued verification codes in API responses.
    pub dev_mode: bool,
}

impl AppState {
    /// Build state from env: load config, init provider clients, pick a code
    /// store backend.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_app_config_from_env().unwrap_or_default();

        let gemini = Gemini::from_env(&cfg.fallback_models);
        match &gemini {
            Some(g) => {
                info!(target: "ncert_backend", base_url = %g.base_url, fallback_models = g.fallback_models.len(), "Gemini enabled.")
            }
            None => warn!(target: "ncert_backend", "Gemini disabled (no GEMINI_API_KEY). Quiz generation will fail and chat will serve canned replies."),
        }

        let identity = Identity::from_env();
        match &identity {
            Some(i) => info!(target: "auth", base_url = %i.base_url, "Identity admin client enabled."),
            None => warn!(target: "auth", "Identity admin disabled (no FIREBASE_API_KEY). Password reset and email verification will return 500."),
        }

        let codes = match FirestoreCodeStore::from_env() {
            Some(fs) => {
                info!(target: "auth", project = %fs.project_id, base_url = %fs.base_url, "Firestore code store enabled.");
                CodeStore::Firestore(fs)
            }
            None => {
                warn!(target: "auth", "FIREBASE_PROJECT_ID not set; using in-memory code store (codes do not survive restarts).");
                CodeStore::Memory(MemoryCodeStore::default())
            }
        };

        let dev_mode = matches!(std::env::var("APP_ENV").as_deref(), Ok("development"));
        if dev_mode {
            warn!(target: "auth", "APP_ENV=development: verification codes are echoed in API responses.");
        }

        Self { gemini, identity, codes, prompts: cfg.prompts, dev_mode }
    }
}
