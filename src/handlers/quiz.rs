// src/handlers/quiz.rs

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    llm,
    models::{
        leaderboard::{ClassSummary, LeaderboardEntry, TopStudent},
        question::{GenerateQuizRequest, GeneratedQuiz, QuizSession},
        submission::{Explanation, SubmitRequest, SubmitResponse, WrongAnswer},
    },
    prompts,
    state::AppState,
};

/// Serves the bundled client page.
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Generates a fresh quiz from the completion model.
///
/// * Validates that a subject was supplied.
/// * Sends the strict-JSON prompt to the gateway (single call, no retry).
/// * Repairs and parses the model output.
/// * Replaces the live session wholesale and returns the question set,
///   answer key included, plus the new `quiz_id` token.
///
/// On any failure the previous session is left untouched.
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::BadRequest("Subject is required".to_string()));
    }

    let prompt = prompts::question_set(
        &payload.subject,
        &payload.classlevel,
        &payload.difficulty_level,
    );

    let raw = state.gateway.complete(&prompt).await?;

    let json_payload = llm::extract_json_payload(&raw).ok_or_else(|| AppError::UpstreamFormat {
        raw: raw.clone(),
    })?;

    let quiz: GeneratedQuiz =
        serde_json::from_str(json_payload).map_err(|e| AppError::UpstreamParse {
            raw: json_payload.to_string(),
            detail: e.to_string(),
        })?;

    let session = QuizSession::new(quiz.questions);
    tracing::info!(
        subject = %payload.subject,
        quiz_id = %session.quiz_id,
        questions = session.len(),
        "Generated new quiz"
    );

    let response = json!({
        "quiz_id": &session.quiz_id,
        "questions": &session.questions,
    });

    *state.session.write().await = Some(session);

    Ok(Json(response))
}

/// Grades a submission against the live session.
///
/// * Validates name, class level and a non-empty answer map.
/// * If a `quiz_id` token is supplied it must match the live session.
/// * Iterates questions in their stored order; each wrong answer costs one
///   sequential gateway call for an explanation, unattempted questions get a
///   canned one with no call.
/// * Writes the leaderboard once, after the final score is known.
///
/// Gateway or storage failure mid-grade reports a zero score with no partial
/// wrong-answer list rather than propagating partial results.
pub async fn submit_answers(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Response, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::BadRequest("Invalid submission".to_string()));
    }

    if payload.answers.is_empty() {
        return Err(AppError::BadRequest("Empty answers rejected".to_string()));
    }

    // Clone the session out so the lock is not held across gateway calls.
    let session = state.session.read().await.clone();

    if let Some(token) = payload.quiz_id.as_deref() {
        let live = session.as_ref().map(|s| s.quiz_id.as_str());
        if live != Some(token) {
            return Err(AppError::BadRequest(
                "Quiz session expired, generate a new quiz".to_string(),
            ));
        }
    }

    let out_of = session.as_ref().map(|s| s.len()).unwrap_or(0) as u32;

    match grade(&state, session.as_ref(), &payload).await {
        Ok(result) => Ok(Json(result).into_response()),
        Err(e) => {
            tracing::error!("Submission failed: {}", e);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "score": 0,
                    "out_of": out_of,
                    "wrong_answers": [],
                    "error": "Submission failed",
                })),
            )
                .into_response())
        }
    }
}

async fn grade(
    state: &AppState,
    session: Option<&QuizSession>,
    payload: &SubmitRequest,
) -> Result<SubmitResponse, AppError> {
    let Some(session) = session else {
        // Nothing generated yet; nothing to grade, nothing to record.
        return Ok(SubmitResponse {
            score: 0,
            out_of: 0,
            wrong_answers: Vec::new(),
        });
    };

    let mut score: u32 = 0;
    let mut wrong_answers = Vec::new();

    for question in &session.questions {
        let choice = payload
            .answers
            .get(&question.id.to_string())
            .map(String::as_str)
            .filter(|c| !c.is_empty());

        match choice {
            None => wrong_answers.push(WrongAnswer::not_attempted(question)),
            Some(choice) if choice == question.correct_answer => score += 1,
            Some(choice) => {
                let prompt = prompts::explanation(&payload.classlevel, question, choice);
                let raw = state.gateway.complete(&prompt).await?;

                wrong_answers.push(WrongAnswer {
                    question_id: question.id.to_string(),
                    question: question.question.clone(),
                    your_answer: choice.to_string(),
                    correct_answer: question.correct_answer.clone(),
                    explanation: Explanation::from_model_output(&raw),
                });
            }
        }
    }

    let out_of = session.len() as u32;

    if out_of > 0 {
        state
            .store
            .record_score(&payload.name, &payload.classlevel, score, out_of)
            .await?;
    }

    tracing::info!(
        name = %payload.name,
        class = %payload.classlevel,
        score,
        out_of,
        wrong = wrong_answers.len(),
        "Graded submission"
    );

    Ok(SubmitResponse {
        score,
        out_of,
        wrong_answers,
    })
}

/// Returns the per-class leaderboard view, best class first.
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let loaded = state.store.load().await;
    Ok(Json(summarize_classes(&loaded.entries)))
}

/// Groups entries by exact class string and ranks the classes.
///
/// Averages are of raw scores, rounded to 2 decimal places; quizzes of
/// different lengths are not normalized. All sorts are stable, so storage
/// order breaks student ties and first-seen order breaks class ties.
pub fn summarize_classes(entries: &[LeaderboardEntry]) -> Vec<ClassSummary> {
    let mut classes: Vec<(String, Vec<&LeaderboardEntry>)> = Vec::new();
    for entry in entries {
        match classes.iter_mut().find(|(class, _)| *class == entry.class) {
            Some((_, members)) => members.push(entry),
            None => classes.push((entry.class.clone(), vec![entry])),
        }
    }

    let mut result: Vec<ClassSummary> = classes
        .into_iter()
        .map(|(class, mut members)| {
            let total: u32 = members.iter().map(|e| e.score).sum();
            let average = (total as f64 / members.len() as f64 * 100.0).round() / 100.0;

            members.sort_by(|a, b| b.score.cmp(&a.score));
            let top_students = members
                .iter()
                .take(3)
                .map(|e| TopStudent {
                    name: e.name.clone(),
                    score: e.score,
                })
                .collect();

            ClassSummary {
                class,
                average,
                top_students,
            }
        })
        .collect();

    result.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    result
}
