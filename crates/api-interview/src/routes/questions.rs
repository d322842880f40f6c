use axum::{Json, extract::Path};
use serde::Serialize;

use crate::error::{ErrorDetail, InterviewError, Result};

const BEHAVIOURAL_QUESTIONS: [&str; 8] = [
    "Tell me about yourself.",
    "What is your greatest weakness?",
    "Describe a time when you worked in a team.",
    "How do you handle pressure and deadlines?",
    "Where do you see yourself in 5 years?",
    "Tell me about a challenge you overcame.",
    "Why should we hire you?",
    "What motivates you?",
];

const TECHNICAL_QUESTIONS: [&str; 8] = [
    "What is Object-Oriented Programming?",
    "Explain the difference between SQL and NoSQL.",
    "What is a REST API?",
    "Explain time complexity in algorithms.",
    "What is version control and why is it important?",
    "Explain the concept of recursion.",
    "What is a design pattern? Name a few.",
    "How does a database index work?",
];

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
    pub category: String,
}

#[utoipa::path(
    get,
    path = "/questions/{category}",
    params(
        ("category" = String, Path, description = "Question category, behavioural or technical")
    ),
    responses(
        (status = 200, description = "Questions for the category", body = QuestionsResponse),
        (status = 404, description = "Unknown category", body = ErrorDetail),
    ),
    tag = "interview",
)]
pub async fn list(Path(category): Path<String>) -> Result<Json<QuestionsResponse>> {
    let category = category.to_lowercase();

    let questions = match category.as_str() {
        "behavioural" => BEHAVIOURAL_QUESTIONS,
        "technical" => TECHNICAL_QUESTIONS,
        _ => return Err(InterviewError::CategoryNotFound),
    };

    Ok(Json(QuestionsResponse {
        questions: questions.iter().map(|q| q.to_string()).collect(),
        category,
    }))
}
