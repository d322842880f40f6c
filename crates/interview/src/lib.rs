mod analysis;
mod feedback;
mod fillers;
mod prompt;
mod score;

pub use analysis::Analysis;
pub use feedback::{Feedback, FeedbackError, OverallRating, parse_feedback};
pub use fillers::{FILLER_WORDS, FillerReport, Severity};
pub use prompt::coach_prompt;
pub use score::confidence_score;
