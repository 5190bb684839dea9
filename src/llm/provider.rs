use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;
    fn name(&self) -> &str;
}
