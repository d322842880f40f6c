use askama::Template;

use crate::analysis::Analysis;

#[derive(Template)]
#[template(path = "coach_feedback.md.jinja", escape = "none")]
struct CoachPrompt<'a> {
    question: &'a str,
    transcript: &'a str,
    confidence_score: u8,
    fillers_display: String,
    word_count: usize,
}

/// Renders the coach instruction sent to the model. The filler map is
/// embedded as compact JSON, or the literal `None` when the answer had
/// no fillers.
pub fn coach_prompt(
    question: &str,
    transcript: &str,
    analysis: &Analysis,
) -> Result<String, askama::Error> {
    let fillers_display = if analysis.fillers.is_empty() {
        "None".to_string()
    } else {
        serde_json::to_string(&analysis.fillers.found_fillers)
            .map_err(|e| askama::Error::Custom(e.into()))?
    };

    CoachPrompt {
        question,
        transcript,
        confidence_score: analysis.confidence_score,
        fillers_display,
        word_count: analysis.word_count,
    }
    .render()
}
