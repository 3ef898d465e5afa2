use std::sync::RwLock;

use docchat_core::error::AppError;

/// Endpoint and credential for a DeepSeek-compatible chat completions API.
#[derive(Debug)]
pub struct DeepSeekClient {
    api_url: String,
    api_key: RwLock<Option<String>>,
}

impl DeepSeekClient {
    pub fn new(api_url: &str, api_key: Option<String>) -> Result<Self, AppError> {
        let api_url = api_url.trim().to_string();
        let has_host = api_url
            .strip_prefix("https://")
            .or_else(|| api_url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'));
        if !has_host {
            return Err(AppError::new(
                "GEN_URL_INVALID",
                "Generation API URL must be an http(s) URL with a host",
            )
            .with_details(format!("api_url={api_url}")));
        }

        Ok(Self {
            api_url,
            api_key: RwLock::new(api_key.filter(|k| !k.trim().is_empty())),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the key used by subsequent requests. An empty key clears it.
    pub fn set_api_key(&self, key: &str) {
        let key = key.trim();
        let mut slot = self
            .api_key
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        };
    }
}
