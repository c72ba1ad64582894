use std::env;
use secrecy::SecretString;

pub const DEFAULT_AI_MODEL: &str = "google/gemini-2.0-pro-exp-02-05:free";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub ai_api_base: String,
    pub ai_api_key: Option<SecretString>,
    pub ai_model: String,
    pub app_origin: String,
    pub app_title: String,
    pub ai_request_timeout_secs: u64,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            ai_api_base: env::var("AI_API_BASE")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            ai_api_key: env::var("AI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(|key| SecretString::from(key.trim().to_string())),
            ai_model: env::var("AI_MODEL")
                .ok()
                .filter(|model| !model.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            app_origin: env::var("APP_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            app_title: env::var("APP_TITLE").unwrap_or_else(|_| "TeachMaster AI".to_string()),
            ai_request_timeout_secs: env::var("AI_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            ai_api_base: "http://127.0.0.1:9/api/v1".to_string(),
            ai_api_key: None,
            ai_model: DEFAULT_AI_MODEL.to_string(),
            app_origin: "http://localhost:8080".to_string(),
            app_title: "TeachMaster AI".to_string(),
            ai_request_timeout_secs: 5,
            cors_allowed_origin: None,
        }
    }
}
