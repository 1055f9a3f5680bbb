//! Public request/response DTOs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.
//!
//! Required fields are modeled as Options so handlers can reject missing
//! parameters with the field-naming 400 messages the client expects instead
//! of a generic deserialization error.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{ChatTurn, Difficulty, McqItem, Stream};

/// `classNumber` arrives as either a JSON number or a numeric string.
fn opt_class_number<'de, D>(d: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(u8),
        Str(String),
    }
    match Option::<NumOrStr>::deserialize(d)? {
        None => Ok(None),
        Some(NumOrStr::Num(n)) => Ok(Some(n)),
        Some(NumOrStr::Str(s)) => {
            s.trim().parse::<u8>().map(Some).map_err(serde::de::Error::custom)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateMcqsIn {
    #[serde(default, rename = "classNumber", deserialize_with = "opt_class_number")]
    pub class_number: Option<u8>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub stream: Option<Stream>,
}

#[derive(Serialize)]
pub struct McqsOut {
    pub mcqs: Vec<McqItem>,
}

#[derive(Debug, Deserialize)]
pub struct ChatIn {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Serialize)]
pub struct ChatOut {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ChaptersIn {
    #[serde(default, rename = "classNumber", deserialize_with = "opt_class_number")]
    pub class_number: Option<u8>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub stream: Option<Stream>,
}

#[derive(Serialize)]
pub struct ChaptersOut {
    pub chapters: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendCodeIn {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize)]
pub struct SendCodeOut {
    pub success: bool,
    pub message: String,
    /// Present in development mode only; production delivery goes via email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyCodeIn {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordIn {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "newPassword")]
    pub new_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyEmailIn {
    #[serde(default)]
    pub uid: Option<String>,
}

#[derive(Serialize)]
pub struct SuccessOut {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
