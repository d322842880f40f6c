pub(crate) mod analyze;
pub(crate) mod questions;

use axum::{
    Router,
    routing::{get, post},
};

use crate::config::InterviewConfig;
use crate::state::make_state;

pub fn router(config: InterviewConfig) -> Router {
    let state = make_state(config);

    Router::new()
        .route("/questions/{category}", get(questions::list))
        .route("/analyze", post(analyze::analyze))
        .with_state(state)
}
