use serde::Deserialize;

fn default_gemini_model() -> String {
    greenroom_gemini::DEFAULT_MODEL.to_string()
}

#[derive(Clone, Deserialize)]
pub struct GeminiEnv {
    pub gemini_api_key: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default, deserialize_with = "string_to_opt_u64")]
    pub gemini_timeout_secs: Option<u64>,
}

// Env values arrive as strings, also through `#[serde(flatten)]`, so
// numeric fields need an explicit conversion.
fn string_to_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse::<u64>().map(Some).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(flatten)]
        gemini: GeminiEnv,
    }

    #[test]
    fn model_defaults_when_absent() {
        let env: Wrapper =
            serde_json::from_str(r#"{"gemini_api_key": "key"}"#).unwrap();

        assert_eq!(env.gemini.gemini_model, "gemini-1.5-flash");
        assert_eq!(env.gemini.gemini_timeout_secs, None);
    }

    #[test]
    fn timeout_parses_from_string() {
        let env: Wrapper = serde_json::from_str(
            r#"{"gemini_api_key": "key", "gemini_timeout_secs": "30"}"#,
        )
        .unwrap();

        assert_eq!(env.gemini.gemini_timeout_secs, Some(30));
    }

    #[test]
    fn empty_timeout_is_none() {
        let env: Wrapper = serde_json::from_str(
            r#"{"gemini_api_key": "key", "gemini_timeout_secs": ""}"#,
        )
        .unwrap();

        assert_eq!(env.gemini.gemini_timeout_secs, None);
    }
}
