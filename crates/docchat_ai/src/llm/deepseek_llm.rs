use std::io;
use std::time::Duration;

use docchat_core::config::GenerationConfig;
use docchat_core::error::AppError;
use serde::{Deserialize, Serialize};

use super::prompts::{answer_prompt, SYSTEM_PROMPT};
use super::Generator;
use crate::deepseek::DeepSeekClient;

#[derive(Debug)]
pub struct DeepSeekLlm {
    client: DeepSeekClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl DeepSeekLlm {
    pub fn new(client: DeepSeekClient, cfg: &GenerationConfig) -> Self {
        Self {
            client,
            model: cfg.model.clone(),
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
            timeout: cfg.timeout(),
        }
    }

    pub fn from_config(cfg: &GenerationConfig) -> Result<Self, AppError> {
        let client = DeepSeekClient::new(&cfg.api_url, cfg.api_key.clone())?;
        Ok(Self::new(client, cfg))
    }

    pub fn client(&self) -> &DeepSeekClient {
        &self.client
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl Generator for DeepSeekLlm {
    fn generate(&self, context: &str, query: &str) -> Result<String, AppError> {
        let api_key = self.client.api_key().ok_or_else(|| {
            AppError::new("GEN_NOT_CONFIGURED", "Generation API key is not configured")
        })?;

        let prompt = answer_prompt(context, query);
        let req = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        let body = serde_json::to_value(req).map_err(|e| {
            AppError::new("GEN_ENCODE_FAILED", "Failed to encode completion request")
                .with_details(e.to_string())
        })?;

        let resp = ureq::post(self.client.api_url())
            .timeout(self.timeout)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {api_key}"))
            .send_json(body);

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: ChatCompletionResponse = r.into_json().map_err(|e| {
                    AppError::new("GEN_DECODE", "Failed to decode completion response")
                        .with_details(e.to_string())
                })?;
                v.choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .ok_or_else(|| {
                        AppError::new("GEN_DECODE", "Completion response had no choices")
                            .with_details("choices is empty")
                    })
            }
            Ok(r) => Err(status_error(r.status(), r)),
            Err(ureq::Error::Status(status, r)) => Err(status_error(status, r)),
            Err(ureq::Error::Transport(t)) => {
                if is_timeout(&t) {
                    Err(AppError::new("GEN_TIMEOUT", "Completion request timed out")
                        .with_details(t.to_string())
                        .with_retryable(true))
                } else {
                    Err(AppError::new("GEN_TRANSPORT", "Failed to call completion endpoint")
                        .with_details(t.to_string())
                        .with_retryable(true))
                }
            }
        }
    }
}

fn status_error(status: u16, resp: ureq::Response) -> AppError {
    let body = resp.into_string().unwrap_or_default();
    AppError::new("GEN_HTTP_STATUS", "Completion request failed")
        .with_details(format!("{status} - {body}"))
        .with_retryable(status == 429 || status >= 500)
}

fn is_timeout(t: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(t);
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if matches!(io_err.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) {
                return true;
            }
        }
        source = err.source();
    }
    t.to_string().contains("timed out")
}
