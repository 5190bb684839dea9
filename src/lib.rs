pub mod config;
pub mod error;
pub mod images;
pub mod llm;
pub mod models;
pub mod paapi;
pub mod pipeline;
pub mod retry;
pub mod scrape;
pub mod site;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use llm::{GroqProvider, LlmProvider};
pub use paapi::PaapiClient;
pub use pipeline::GeneratorPipeline;
