use std::time::Duration;

use greenroom_gemini::GeminiClient;

use crate::config::InterviewConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    /// `None` when the client could not be built, e.g. no API key. The
    /// analyze route then falls back to heuristic feedback.
    pub gemini: Option<GeminiClient>,
}

pub(crate) fn make_state(config: InterviewConfig) -> AppState {
    let mut builder = GeminiClient::builder()
        .api_key(config.gemini.gemini_api_key)
        .model(config.gemini.gemini_model);

    if let Some(base_url) = config.gemini_base_url {
        builder = builder.api_base(base_url);
    }
    if let Some(secs) = config.gemini.gemini_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let gemini = match builder.build() {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!(error = %e, "gemini_client_unconfigured");
            None
        }
    };

    AppState { gemini }
}
