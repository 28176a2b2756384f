// src/prompts.rs

use std::fmt::Write;

use crate::models::question::Question;

/// Prompt for generating one quiz: exactly 10 MCQs, strict JSON, options
/// labelled A-D with the correct label called out.
pub fn question_set(subject: &str, class_level: &str, difficulty_level: &str) -> String {
    format!(
        r#"
Strict rules:
1. Questions must test conceptual understanding.
2. Include multi-step reasoning where possible.
3. Include application-based and situation-based questions.
4. Assume these questions are for scholarship-level practice, not basic revision.

You are a JSON generator.

ABSOLUTE RULES:
- Output ONLY JSON
- No text before JSON
- No text after JSON
- No markdown
- No explanations
- No comments

Generate exactly 10 Class {class_level} {subject} MCQs considering {difficulty_level} level questions.

JSON FORMAT:
{{
  "questions": [
    {{
      "id": 1,
      "question": "string",
      "options": {{
        "A": "string",
        "B": "string",
        "C": "string",
        "D": "string"
      }},
      "correct_answer": "A"
    }}
  ]
}}
"#
    )
}

/// Prompt for explaining one wrong answer.
pub fn explanation(class_level: &str, question: &Question, student_choice: &str) -> String {
    let mut options = String::new();
    for (label, text) in &question.options {
        let _ = writeln!(options, "{}. {}", label, text);
    }

    format!(
        r#"
You are a Class {class_level} teacher.

Return the explanation STRICTLY in JSON.

JSON format:
{{
  "why_your_answer_is_wrong": "",
  "why_correct_answer_is_right": "",
  "key_takeaway": ""
}}

Question: {question}
Options:
{options}
Student chose: {choice}
Correct answer: {correct}
"#,
        question = question.question,
        choice = student_choice,
        correct = question.correct_answer,
    )
}
