// src/models/question.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// One multiple-choice question as produced by the model.
///
/// `options` maps the label ("A".."D") to the option text; `correct_answer`
/// is one of those labels. The full record, answer key included, is returned
/// to the client — a trust assumption this design accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub correct_answer: String,
}

/// The payload the generation prompt instructs the model to emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuiz {
    pub questions: Vec<Question>,
}

/// The live quiz: the most recently generated question set, used as the
/// grading key until the next generation call replaces it. Question order is
/// the model's output order and is also the grading iteration order.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub quiz_id: String,
    pub questions: Vec<Question>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            quiz_id: uuid::Uuid::new_v4().to_string(),
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// DTO for requesting a new quiz.
/// `difficultiy_level` is misspelt on the wire; that is the original client
/// contract and is kept as-is.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[serde(default)]
    pub classlevel: String,

    #[serde(default, rename = "difficultiy_level")]
    pub difficulty_level: String,
}
