use crate::env::GeminiEnv;

#[derive(Clone)]
pub struct InterviewConfig {
    pub gemini: GeminiEnv,
    pub gemini_base_url: Option<String>,
}

impl InterviewConfig {
    pub fn new(gemini: &GeminiEnv) -> Self {
        Self {
            gemini: gemini.clone(),
            gemini_base_url: None,
        }
    }

    /// Points the Gemini client at a different base URL, e.g. a local
    /// stub server in tests.
    pub fn with_gemini_base_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_base_url = Some(url.into());
        self
    }
}
