// src/models/submission.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::{llm, models::question::Question};

/// DTO for submitting quiz answers.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid submission"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid submission"))]
    pub classlevel: String,

    /// Token returned by the generate endpoint. Optional: when present it
    /// must match the live session, when absent the submission is graded
    /// against whatever is currently live.
    #[serde(default)]
    pub quiz_id: Option<String>,

    /// Question id (stringified) -> chosen label.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// Explanation attached to a wrong or unattempted answer.
///
/// The model is instructed to return the structured triple; output that
/// fails to parse is wrapped as `{raw_text}` instead of being passed through
/// shapeless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Explanation {
    Structured {
        why_your_answer_is_wrong: String,
        why_correct_answer_is_right: String,
        key_takeaway: String,
    },
    Raw {
        raw_text: String,
    },
}

impl Explanation {
    /// Parses a model completion into the structured schema, falling back to
    /// the raw wrapper when the output is not the JSON we asked for.
    pub fn from_model_output(raw: &str) -> Self {
        let payload = match llm::extract_json_payload(raw) {
            Some(p) => p,
            None => return Explanation::Raw {
                raw_text: raw.to_string(),
            },
        };

        match serde_json::from_str::<Explanation>(payload) {
            Ok(parsed @ Explanation::Structured { .. }) => parsed,
            _ => {
                tracing::warn!("Explanation output did not match schema: {}", raw);
                Explanation::Raw {
                    raw_text: raw.to_string(),
                }
            }
        }
    }

    /// Canned explanation for a question the student skipped. No model call
    /// is made for these.
    pub fn not_attempted(correct: &str) -> Self {
        Explanation::Structured {
            why_your_answer_is_wrong: "You did not attempt this question.".to_string(),
            why_correct_answer_is_right: format!("The correct answer is option {}.", correct),
            key_takeaway: "Always attempt every question in an exam.".to_string(),
        }
    }
}

/// One wrong or unattempted question in the grading response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrongAnswer {
    pub question_id: String,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub explanation: Explanation,
}

impl WrongAnswer {
    pub fn not_attempted(question: &Question) -> Self {
        Self {
            question_id: question.id.to_string(),
            question: question.question.clone(),
            your_answer: "Not Attempted".to_string(),
            correct_answer: question.correct_answer.clone(),
            explanation: Explanation::not_attempted(&question.correct_answer),
        }
    }
}

/// DTO for the grading result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub score: u32,
    pub out_of: u32,
    pub wrong_answers: Vec<WrongAnswer>,
}
