//! MCQ prompt construction and strict decoding of model output.
//!
//! Flow:
//! 1) The prompt embeds class/subject/chapter/difficulty/stream/variation
//!    seed plus a strict JSON-only output format.
//! 2) The model's text is decoded with a tagged result (parse vs shape), so
//!    callers can treat either failure as "try the next candidate" without
//!    anything throwing past the boundary.

use serde_json::Value;

use crate::config::Prompts;
use crate::domain::{Difficulty, McqItem, QuizRequest};
use crate::util::fill_template;

pub const QUESTIONS_PER_TEST: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;

fn difficulty_guidelines(d: Difficulty) -> &'static str {
  match d {
    Difficulty::Easy => "Use simple, straightforward questions. Basic definitions, recall facts, single-step problems. Suitable for beginners. Keep language simple.",
    Difficulty::Medium => "Use moderate complexity. Require understanding of concepts, application of knowledge, 2-3 step problems. Balanced difficulty.",
    Difficulty::Hard => "Use challenging questions. Complex analysis, multi-step problems, application to new scenarios, critical thinking. Suitable for advanced students.",
  }
}

/// Build the generation prompt for a quiz request. The `strict` variant asks
/// the model to self-verify topical relevance and difficulty before output;
/// it is used for the single retry pass after the primary pass is exhausted.
pub fn build_mcq_prompt(prompts: &Prompts, req: &QuizRequest, strict: bool) -> String {
  let class = req.class_number.to_string();
  let guidelines = difficulty_guidelines(req.difficulty);

  let (stream_note, stream_focus) = match req.stream {
    Some(st) => (
      format!("\n- Stream: {} (focus on {} content)", st.as_str(), st.subjects()),
      format!(
        "\n- Focus questions on {} stream content: {}.",
        st.as_str(),
        match st {
          crate::domain::Stream::Pcb => "Biology and related concepts",
          crate::domain::Stream::Pcm => "Mathematics and Physics/Chemistry concepts",
        }
      ),
    ),
    None => (String::new(), String::new()),
  };

  let common = fill_template(
    &prompts.mcq_template,
    &[
      ("class", &class),
      ("subject", &req.subject),
      ("chapter", &req.chapter),
      ("difficulty", req.difficulty.as_str()),
      ("difficulty_guidelines", guidelines),
      ("variation", &req.variation_seed),
      ("stream_note", &stream_note),
      ("stream_focus", &stream_focus),
    ],
  );

  if strict {
    let suffix = fill_template(
      &prompts.mcq_strict_suffix,
      &[("chapter", req.chapter.as_str()), ("difficulty", req.difficulty.as_str())],
    );
    format!("{}\n{}", common, suffix)
  } else {
    format!("{}\nOutput ONLY JSON.", common)
  }
}

/// Why a model response was rejected.
#[derive(Debug, PartialEq)]
pub enum DecodeError {
  /// The text (after fence stripping) was not valid JSON at all.
  Parse(String),
  /// JSON parsed but did not match the expected MCQ shape.
  Shape(String),
}

impl std::fmt::Display for DecodeError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DecodeError::Parse(e) => write!(f, "invalid JSON: {}", e),
      DecodeError::Shape(e) => write!(f, "wrong shape: {}", e),
    }
  }
}

/// Strictly decode untrusted model text into MCQ items.
///
/// Accepted shapes: a bare JSON array of items, or an object carrying an
/// `mcqs` array. Markdown code fences around the JSON are tolerated. Each
/// item must have `q`, exactly 4 `options`, and `correct` in 0..=3.
pub fn decode_mcqs(text: &str) -> Result<Vec<McqItem>, DecodeError> {
  let cleaned = strip_code_fences(text);
  let value: Value =
    serde_json::from_str(cleaned.trim()).map_err(|e| DecodeError::Parse(e.to_string()))?;

  let items = match value {
    Value::Array(a) => a,
    Value::Object(mut o) => match o.remove("mcqs") {
      Some(Value::Array(a)) => a,
      _ => {
        return Err(DecodeError::Shape(
          "expected a JSON array or an object with an `mcqs` array".into(),
        ))
      }
    },
    _ => return Err(DecodeError::Shape("expected a JSON array at the top level".into())),
  };

  if items.is_empty() {
    return Err(DecodeError::Shape("empty item array".into()));
  }
  // Cheap probe the client also relies on: the first element must carry `q`.
  if items[0].get("q").is_none() {
    return Err(DecodeError::Shape("first item has no `q` field".into()));
  }

  let mcqs: Vec<McqItem> = serde_json::from_value(Value::Array(items))
    .map_err(|e| DecodeError::Shape(e.to_string()))?;

  for (i, item) in mcqs.iter().enumerate() {
    if item.options.len() != OPTIONS_PER_QUESTION {
      return Err(DecodeError::Shape(format!(
        "item {}: expected {} options, got {}",
        i,
        OPTIONS_PER_QUESTION,
        item.options.len()
      )));
    }
    if usize::from(item.correct) >= OPTIONS_PER_QUESTION {
      return Err(DecodeError::Shape(format!(
        "item {}: correct index {} out of range",
        i, item.correct
      )));
    }
  }

  Ok(mcqs)
}

fn strip_code_fences(text: &str) -> String {
  text.replace("```json", "").replace("```", "")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Stream;

  fn req(stream: Option<Stream>) -> QuizRequest {
    QuizRequest {
      class_number: 10,
      subject: "Science".into(),
      chapter: "Life Processes".into(),
      difficulty: Difficulty::Hard,
      stream,
      variation_seed: "seed-1".into(),
    }
  }

  fn valid_items(n: usize) -> String {
    let items: Vec<Value> = (0..n)
      .map(|i| {
        serde_json::json!({
          "q": format!("Question {}", i + 1),
          "options": ["A", "B", "C", "D"],
          "correct": i % 4,
          "explanation": "Because."
        })
      })
      .collect();
    serde_json::to_string(&items).expect("items")
  }

  #[test]
  fn prompt_embeds_request_fields() {
    let prompts = Prompts::default();
    let p = build_mcq_prompt(&prompts, &req(None), false);
    assert!(p.contains("Class: 10"));
    assert!(p.contains("Chapter/Unit: Life Processes"));
    assert!(p.contains("Difficulty Level: Hard"));
    assert!(p.contains("Variation ID: seed-1"));
    assert!(p.contains("exactly 10 multiple-choice questions"));
    assert!(p.ends_with("Output ONLY JSON."));
    assert!(!p.contains("Stream:"));
  }

  #[test]
  fn strict_prompt_appends_self_verification() {
    let prompts = Prompts::default();
    let p = build_mcq_prompt(&prompts, &req(None), true);
    assert!(p.contains("verify every question is on 'Life Processes'"));
    assert!(p.contains("matches Hard difficulty"));
  }

  #[test]
  fn stream_request_mentions_stream_twice() {
    let prompts = Prompts::default();
    let p = build_mcq_prompt(&prompts, &req(Some(Stream::Pcb)), false);
    assert!(p.contains("Stream: PCB (focus on Physics, Chemistry, Biology content)"));
    assert!(p.contains("Focus questions on PCB stream content: Biology and related concepts."));
  }

  #[test]
  fn decode_accepts_bare_array() {
    let mcqs = decode_mcqs(&valid_items(QUESTIONS_PER_TEST)).expect("decode");
    assert_eq!(mcqs.len(), QUESTIONS_PER_TEST);
    assert_eq!(mcqs[0].q, "Question 1");
    assert_eq!(mcqs[3].correct, 3);
  }

  #[test]
  fn decode_accepts_fenced_and_wrapped_output() {
    let fenced = format!("```json\n{}\n```", valid_items(10));
    assert!(decode_mcqs(&fenced).is_ok());

    let wrapped = format!("{{\"mcqs\": {}}}", valid_items(10));
    assert!(decode_mcqs(&wrapped).is_ok());
  }

  #[test]
  fn decode_tags_parse_and_shape_failures() {
    match decode_mcqs("this is not json") {
      Err(DecodeError::Parse(_)) => {}
      other => panic!("expected Parse error, got {:?}", other),
    }
    match decode_mcqs("{\"answers\": []}") {
      Err(DecodeError::Shape(_)) => {}
      other => panic!("expected Shape error, got {:?}", other),
    }
    match decode_mcqs("[{\"question\": \"no q field\"}]") {
      Err(DecodeError::Shape(_)) => {}
      other => panic!("expected Shape error, got {:?}", other),
    }
  }

  #[test]
  fn decode_rejects_bad_options_and_indices() {
    let three_options =
      "[{\"q\": \"Q\", \"options\": [\"A\", \"B\", \"C\"], \"correct\": 0, \"explanation\": \"\"}]";
    match decode_mcqs(three_options) {
      Err(DecodeError::Shape(msg)) => assert!(msg.contains("options")),
      other => panic!("expected Shape error, got {:?}", other),
    }

    let out_of_range =
      "[{\"q\": \"Q\", \"options\": [\"A\", \"B\", \"C\", \"D\"], \"correct\": 7, \"explanation\": \"\"}]";
    match decode_mcqs(out_of_range) {
      Err(DecodeError::Shape(msg)) => assert!(msg.contains("out of range")),
      other => panic!("expected Shape error, got {:?}", other),
    }
  }

  #[test]
  fn decode_tolerates_missing_explanation() {
    let no_explanation = "[{\"q\": \"Q\", \"options\": [\"A\", \"B\", \"C\", \"D\"], \"correct\": 1}]";
    let mcqs = decode_mcqs(no_explanation).expect("decode");
    assert_eq!(mcqs[0].explanation, "");
  }
}
