use crate::fillers::FillerReport;
use crate::score::confidence_score;

/// Deterministic part of the answer-scoring pipeline: tokenization,
/// filler detection and the heuristic confidence score.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub fillers: FillerReport,
    pub word_count: usize,
    pub confidence_score: u8,
}

impl Analysis {
    pub fn of(transcript: &str) -> Self {
        let tokens: Vec<String> = transcript
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();

        let fillers = FillerReport::from_tokens(&tokens);
        let word_count = tokens.len();
        let confidence_score = confidence_score(fillers.total_count, word_count);

        Self {
            fillers,
            word_count,
            confidence_score,
        }
    }
}
