use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reviewgen::{Config, GeneratorPipeline, GroqProvider, PaapiClient, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "reviewgen")]
#[command(version = "0.1.0")]
#[command(about = "Generate affiliate review pages for trending products")]
struct Args {
    /// Number of products to review
    #[arg(short, long)]
    count: Option<usize>,

    /// Root directory of the generated site
    #[arg(long)]
    site_dir: Option<String>,

    /// Model used for idea and review generation
    #[arg(long)]
    model: Option<String>,

    /// Pause between products in milliseconds
    #[arg(long, default_value = "1200")]
    pause_ms: u64,

    /// Skip the homepage update step
    #[arg(long)]
    skip_homepage: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("reviewgen=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration, CLI flags win over the environment
    let mut config = Config::from_env()?;
    if let Some(count) = args.count {
        config.product_count = count;
    }
    if let Some(site_dir) = args.site_dir {
        config.site_dir = site_dir;
    }
    if let Some(model) = args.model {
        config.llm_model = model;
    }

    // Initialize clients
    let llm = GroqProvider::new(config.groq_api_key.clone(), Some(config.llm_model.clone()));
    let paapi = PaapiClient::new(
        config.pa_access_key.clone(),
        config.pa_secret_key.clone(),
        config.affiliate_tag.clone(),
    );

    // Create pipeline
    let mut pipeline_config = PipelineConfig::from(&config);
    pipeline_config.pause_between_products = Duration::from_millis(args.pause_ms);
    pipeline_config.update_homepage = !args.skip_homepage;

    let pipeline = GeneratorPipeline::new(
        llm,
        paapi,
        config.affiliate_tag.clone(),
        PathBuf::from(&config.site_dir),
        pipeline_config,
    )?;

    // Run generation
    tracing::info!("Starting review generation...");
    let pages = pipeline.run().await?;

    println!("Done. Created {} review page(s).", pages.len());
    for page in &pages {
        println!("  - reviews/{} ({})", page.filename, page.title);
    }

    Ok(())
}
