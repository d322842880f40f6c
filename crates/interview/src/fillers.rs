use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tokens counted as filler words. Matching is exact per token, so
/// "um," with trailing punctuation does not count.
pub const FILLER_WORDS: [&str; 6] = ["um", "uh", "ah", "like", "basically", "literally"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Severity {
    Excellent,
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl Severity {
    pub fn from_total(total: u32) -> Self {
        match total {
            0 => Self::Excellent,
            1..=3 => Self::Good,
            _ => Self::NeedsWork,
        }
    }
}

/// Per-word filler counts over a tokenized transcript. Only words that
/// actually occur are present in `found_fillers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FillerReport {
    pub found_fillers: BTreeMap<String, u32>,
    pub total_count: u32,
    pub severity: Severity,
}

impl FillerReport {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut found = BTreeMap::new();

        for filler in FILLER_WORDS {
            let count = tokens.iter().filter(|t| t.as_ref() == filler).count() as u32;
            if count > 0 {
                found.insert(filler.to_string(), count);
            }
        }

        let total_count = found.values().sum();

        Self {
            found_fillers: found,
            total_count,
            severity: Severity::from_total(total_count),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
