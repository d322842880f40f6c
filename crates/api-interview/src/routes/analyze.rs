use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use greenroom_interview::{Analysis, Feedback, FillerReport};

use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AnalyzeRequest {
    pub transcript: String,
    pub question: String,
    /// Opaque client token, echoed into logs only.
    pub session_id: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub transcript: String,
    pub confidence_score: u8,
    pub fillers: FillerReport,
    pub word_count: usize,
    pub feedback: Feedback,
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Transcript analysis with coach feedback", body = AnalyzeResponse),
    ),
    tag = "interview",
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let analysis = Analysis::of(&payload.transcript);

    tracing::info!(
        session_id = %payload.session_id,
        confidence_score = analysis.confidence_score,
        total_fillers = analysis.fillers.total_count,
        word_count = analysis.word_count,
        "analyze_request"
    );

    let feedback =
        derive_feedback(&state, &payload.question, &payload.transcript, &analysis).await;

    Json(AnalyzeResponse {
        success: true,
        transcript: payload.transcript,
        confidence_score: analysis.confidence_score,
        fillers: analysis.fillers,
        word_count: analysis.word_count,
        feedback,
    })
}

/// Asks the model for coach feedback. Every failure on this path is
/// absorbed into deterministic fallback feedback, so `/analyze` itself
/// never errors.
async fn derive_feedback(
    state: &AppState,
    question: &str,
    transcript: &str,
    analysis: &Analysis,
) -> Feedback {
    let Some(gemini) = state.gemini.as_ref() else {
        tracing::warn!("gemini_client_unconfigured");
        return Feedback::fallback(analysis.confidence_score);
    };

    let prompt = match greenroom_interview::coach_prompt(question, transcript, analysis) {
        Ok(prompt) => prompt,
        Err(e) => {
            tracing::warn!(error = %e, "coach_prompt_render_failed");
            return Feedback::fallback(analysis.confidence_score);
        }
    };

    let raw = match gemini.generate_content(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "gemini_request_failed");
            return Feedback::fallback(analysis.confidence_score);
        }
    };

    match greenroom_interview::parse_feedback(&raw) {
        Ok(feedback) => feedback,
        Err(e) => {
            tracing::warn!(error = %e, "feedback_parse_failed");
            Feedback::fallback(analysis.confidence_score)
        }
    }
}
