use super::*;
use crate::*;
use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;

/// Which dialect of the chat-completions API the endpoint speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// `{url}/openai/deployments/{model}/chat/completions?api-version=..`
    /// authenticated with an `api-key` header.
    Azure,
    /// `{url}/chat/completions` authenticated with a bearer token.
    #[default]
    OpenAi,
}

/// Where and how to reach the chat-completions service.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// Base URL, e.g. `https://example.openai.azure.com` or `https://api.openai.com/v1`.
    pub url: String,
    /// Model name, or deployment name for Azure.
    pub model: String,
    #[serde(default)]
    pub flavor: Flavor,
    #[serde(default = "Endpoint::default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "Endpoint::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Endpoint {
    fn default_api_version() -> String {
        String::from("2023-03-15-preview")
    }
    fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }
    /// Fully qualified completion URL for this flavor.
    pub fn address(&self) -> String {
        let base = self.url.trim_end_matches('/');
        match self.flavor {
            Flavor::Azure => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                base, self.model, self.api_version
            ),
            Flavor::OpenAi => format!("{}/chat/completions", base),
        }
    }
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    stream: bool,
    #[serde(flatten)]
    sampling: Sampling,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

impl ChatResponse {
    /// Content of the first choice; no choices or null content is an error.
    fn into_text(self) -> anyhow::Result<String> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("chat response carried no choices"))?
            .message
            .content
            .ok_or_else(|| anyhow::anyhow!("chat response carried no content"))
    }
}

#[derive(Deserialize)]
struct Choice {
    message: Reply,
}

#[derive(Deserialize)]
struct Reply {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct Chat {
    client: Client,
    endpoint: Endpoint,
    key: String,
}

impl Chat {
    /// Builds the client, failing when no usable credential is configured.
    pub fn new(endpoint: Endpoint) -> Result<Self, ConfigError> {
        let key = endpoint
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::Credentials(String::from("no api key configured")))?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(endpoint.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Malformed(format!("http client: {}", e)))?;
        Ok(Self {
            client,
            endpoint,
            key,
        })
    }
}

#[async_trait::async_trait]
impl Generator for Chat {
    async fn complete(&self, request: &Request) -> anyhow::Result<String> {
        let body = ChatRequest {
            model: &self.endpoint.model,
            messages: [Message {
                role: "user",
                content: &request.prompt,
            }],
            stream: false,
            sampling: request.sampling,
        };
        let builder = self.client.post(self.endpoint.address()).json(&body);
        let builder = match self.endpoint.flavor {
            Flavor::Azure => builder.header("api-key", &self.key),
            Flavor::OpenAi => builder.bearer_auth(&self.key),
        };
        log::debug!("[llm] requesting completion from {}", self.endpoint.model);
        builder
            .send()
            .await
            .context("chat request failed")?
            .error_for_status()
            .context("chat non-2xx response")?
            .json::<ChatResponse>()
            .await
            .context("chat response decode failed")?
            .into_text()
    }
}
