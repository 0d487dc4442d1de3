use super::*;

/// A single-turn prompt plus how to sample the answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub prompt: String,
    pub sampling: Sampling,
}

impl From<String> for Request {
    fn from(prompt: String) -> Self {
        Self {
            prompt,
            sampling: Sampling::default(),
        }
    }
}

/// Anything that turns a prompt into completion text.
///
/// Implementations own transport, authentication and timeouts. A request that
/// never comes back within the implementation's deadline is just an error.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn complete(&self, request: &Request) -> anyhow::Result<String>;
}
