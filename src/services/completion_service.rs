use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::AiSettings,
};

pub const NOT_CONFIGURED_MESSAGE: &str =
    "API key not configured. Please set your API key in Settings.";
const GENERIC_FAILURE_MESSAGE: &str = "Failed to get AI response";

/// A single user turn sent to the completion endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionPrompt {
    pub text: String,
    pub image_url: Option<String>,
}

impl CompletionPrompt {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the text of the first choice, or an empty string when the
    /// endpoint answered without one.
    async fn complete(&self, settings: &AiSettings, prompt: &CompletionPrompt) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn chat_request<'a>(model: &'a str, prompt: &'a CompletionPrompt) -> ChatRequest<'a> {
    let mut content = vec![ContentPart::Text { text: &prompt.text }];
    if let Some(url) = prompt.image_url.as_deref() {
        content.push(ContentPart::ImageUrl {
            image_url: ImageUrl { url },
        });
    }

    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content,
        }],
    }
}

/// OpenAI-compatible chat completions client (OpenRouter by default).
pub struct OpenRouterClient {
    client: Client,
    api_base: String,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.ai_request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.ai_api_base.trim_end_matches('/').to_string(),
            referer: config.app_origin.clone(),
            title: config.app_title.clone(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, settings: &AiSettings, prompt: &CompletionPrompt) -> AppResult<String> {
        let api_key = settings
            .api_key
            .as_ref()
            .filter(|_| settings.is_configured())
            .ok_or_else(|| AppError::NotConfigured(NOT_CONFIGURED_MESSAGE.to_string()))?;

        log::debug!(
            "Requesting completion from {} with model {}",
            self.api_base,
            settings.model
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&chat_request(&settings.model, prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            log::error!("AI generation error ({}): {}", status, message);
            return Err(AppError::UpstreamError(message));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default())
    }
}

/// Parses a JSON reply; anything unparseable is `InvalidResponseFormat`.
pub fn parse_json_reply<T: DeserializeOwned>(reply: &str) -> AppResult<T> {
    Ok(serde_json::from_str(reply.trim())?)
}
