use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub pa_access_key: String,
    pub pa_secret_key: String,
    pub affiliate_tag: String,
    pub site_dir: String,
    pub product_count: usize,
    pub llm_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let groq_api_key = env::var("GROQ_API_KEY")
            .map_err(|_| Error::Config("GROQ_API_KEY environment variable not set".to_string()))?;

        let pa_access_key = env::var("PA_ACCESS_KEY")
            .map_err(|_| Error::Config("PA_ACCESS_KEY environment variable not set".to_string()))?;

        let pa_secret_key = env::var("PA_SECRET_KEY")
            .map_err(|_| Error::Config("PA_SECRET_KEY environment variable not set".to_string()))?;

        let affiliate_tag =
            env::var("AFFILIATE_TAG").unwrap_or_else(|_| "snapxacc-20".to_string());

        let site_dir = env::var("SITE_DIR").unwrap_or_else(|_| ".".to_string());

        let product_count = env::var("PRODUCT_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let llm_model =
            env::var("LLM_MODEL").unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        Ok(Self {
            groq_api_key,
            pa_access_key,
            pa_secret_key,
            affiliate_tag,
            site_dir,
            product_count,
            llm_model,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub product_count: usize,
    pub pause_between_products: Duration,
    pub update_homepage: bool,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            product_count: config.product_count,
            pause_between_products: Duration::from_millis(1200),
            update_homepage: true,
        }
    }
}
