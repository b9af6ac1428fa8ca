use std::env;

pub const DEFAULT_AI_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Clone)]
pub struct AppConfig {
    /// Bearer credential for the completion service. `None` when unset or empty,
    /// reported per request rather than at startup.
    pub ai_api_key: Option<String>,
    pub ai_gateway_url: String,
    pub ai_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let ai_gateway_url =
            env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_AI_GATEWAY_URL.to_string());
        validate_gateway_url(&ai_gateway_url)
            .map_err(|e| format!("AI_GATEWAY_URL: {}", e))?;

        Ok(Self {
            ai_api_key: env::var("AI_GATEWAY_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            ai_gateway_url,
            ai_model: env::var("AI_MODEL")
                .ok()
                .filter(|model| !model.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_api_key: None,
            ai_gateway_url: DEFAULT_AI_GATEWAY_URL.to_string(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
        }
    }
}

// Manual impl keeps the credential out of `{:?}` log lines.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("ai_api_key", &self.ai_api_key.as_ref().map(|_| "<redacted>"))
            .field("ai_gateway_url", &self.ai_gateway_url)
            .field("ai_model", &self.ai_model)
            .finish()
    }
}

fn validate_gateway_url(raw: &str) -> Result<(), String> {
    let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_credential() {
        let config = AppConfig {
            ai_api_key: Some("sk-secret".to_string()),
            ..AppConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_validate_gateway_url() {
        assert!(validate_gateway_url("https://example.com/v1/chat/completions").is_ok());
        assert!(validate_gateway_url("http://localhost:8080/v1").is_ok());
        assert!(validate_gateway_url("ftp://example.com").is_err());
        assert!(validate_gateway_url("not a url").is_err());
    }

    #[test]
    fn test_default_has_no_credential() {
        let config = AppConfig::default();
        assert!(config.ai_api_key.is_none());
        assert_eq!(config.ai_model, DEFAULT_AI_MODEL);
    }
}
