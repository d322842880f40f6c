use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum OverallRating {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

/// Coach feedback for one answer. Produced by parsing the model output
/// or, when that fails, by [`Feedback::fallback`]. Both paths yield the
/// same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Feedback {
    pub overall_rating: OverallRating,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub better_answer_tip: String,
    pub star_method_suggestion: String,
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("invalid feedback JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses model output into [`Feedback`], tolerating a fenced code
/// block around the JSON and an optional `json` language tag.
pub fn parse_feedback(raw: &str) -> Result<Feedback, FeedbackError> {
    let mut text = raw.trim();

    if text.starts_with("```") {
        let inner = text.split("```").nth(1).unwrap_or_default();
        text = inner.strip_prefix("json").unwrap_or(inner).trim();
    }

    Ok(serde_json::from_str(text)?)
}

impl Feedback {
    /// Deterministic feedback used whenever the model path fails. Never
    /// fails itself.
    pub fn fallback(score: u8) -> Self {
        let overall_rating = if score >= 80 {
            OverallRating::Excellent
        } else if score >= 60 {
            OverallRating::Good
        } else {
            OverallRating::NeedsImprovement
        };

        Self {
            overall_rating,
            summary: "Your answer showed effort. Focus on reducing filler words and adding specific examples."
                .to_string(),
            strengths: vec![
                "Attempted the question".to_string(),
                "Basic structure present".to_string(),
            ],
            improvements: vec![
                "Reduce filler words".to_string(),
                "Add specific examples".to_string(),
                "Use STAR method".to_string(),
            ],
            better_answer_tip: "Try to give a concrete example from your experience.".to_string(),
            star_method_suggestion: "Structure: Situation → Task → Action → Result".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "overall_rating": "Good",
        "summary": "Solid answer with a clear arc.",
        "strengths": ["Clear opening", "Team focus", "Positive tone"],
        "improvements": ["Cut filler words", "Add metrics", "Tighten the ending"],
        "better_answer_tip": "Quantify the project outcome.",
        "star_method_suggestion": "Lead with the situation, then task, action, result."
    }"#;

    #[test]
    fn parses_plain_json() {
        let feedback = parse_feedback(VALID).unwrap();

        assert_eq!(feedback.overall_rating, OverallRating::Good);
        assert_eq!(feedback.strengths.len(), 3);
        assert_eq!(feedback.summary, "Solid answer with a clear arc.");
    }

    #[test]
    fn parses_fenced_json_with_language_tag() {
        let wrapped = format!("```json\n{VALID}\n```");
        assert_eq!(parse_feedback(&wrapped).unwrap(), parse_feedback(VALID).unwrap());
    }

    #[test]
    fn parses_fenced_json_without_language_tag() {
        let wrapped = format!("```\n{VALID}\n```");
        assert_eq!(parse_feedback(&wrapped).unwrap(), parse_feedback(VALID).unwrap());
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        let padded = format!("\n\n  {VALID}  \n");
        assert!(parse_feedback(&padded).is_ok());
    }

    #[test]
    fn rejects_prose() {
        assert!(parse_feedback("Sure! Here is my assessment of the answer.").is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        let partial = r#"{"overall_rating": "Good", "summary": "ok"}"#;
        assert!(parse_feedback(partial).is_err());
    }

    #[test]
    fn rejects_unknown_rating() {
        let bad_rating = VALID.replace("\"Good\"", "\"Outstanding\"");
        assert!(parse_feedback(&bad_rating).is_err());
    }

    #[test]
    fn parses_needs_improvement_rating() {
        let needs_work = VALID.replace("\"Good\"", "\"Needs Improvement\"");
        let feedback = parse_feedback(&needs_work).unwrap();
        assert_eq!(feedback.overall_rating, OverallRating::NeedsImprovement);
    }

    #[test]
    fn fallback_rating_thresholds() {
        assert_eq!(Feedback::fallback(80).overall_rating, OverallRating::Excellent);
        assert_eq!(Feedback::fallback(100).overall_rating, OverallRating::Excellent);
        assert_eq!(Feedback::fallback(79).overall_rating, OverallRating::Good);
        assert_eq!(Feedback::fallback(60).overall_rating, OverallRating::Good);
        assert_eq!(Feedback::fallback(59).overall_rating, OverallRating::NeedsImprovement);
        assert_eq!(Feedback::fallback(0).overall_rating, OverallRating::NeedsImprovement);
    }

    #[test]
    fn fallback_matches_parsed_shape() {
        let fallback = Feedback::fallback(70);
        let json = serde_json::to_string(&fallback).unwrap();
        let reparsed = parse_feedback(&json).unwrap();
        assert_eq!(fallback, reparsed);
    }
}
