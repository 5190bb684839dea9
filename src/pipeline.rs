use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::fs;
use tokio::time::sleep;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::images::{ImageStore, PLACEHOLDER_URL};
use crate::llm::{parse_product_ideas, prompts, LlmProvider};
use crate::models::{ProductFacts, ProductIdea, ReviewPage};
use crate::paapi::extract::{extract_facts, search_fallback_url};
use crate::paapi::PaapiClient;
use crate::scrape;
use crate::site::{
    fallback_review, insert_cards, page_filename, render_review_page, slugify, PageContext,
};

const IDEA_MAX_TOKENS: u32 = 400;
const REVIEW_MAX_TOKENS: u32 = 1600;

pub struct GeneratorPipeline {
    llm: Arc<dyn LlmProvider>,
    paapi: PaapiClient,
    images: ImageStore,
    scrape_client: Client,
    affiliate_tag: String,
    site_dir: PathBuf,
    reviews_dir: PathBuf,
    config: PipelineConfig,
}

impl GeneratorPipeline {
    pub fn new(
        llm: impl LlmProvider + 'static,
        paapi: PaapiClient,
        affiliate_tag: String,
        site_dir: PathBuf,
        config: PipelineConfig,
    ) -> Result<Self> {
        let reviews_dir = site_dir.join("reviews");
        std::fs::create_dir_all(&reviews_dir)?;
        let images = ImageStore::new(reviews_dir.join("images"))?;

        let scrape_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            llm: Arc::new(llm),
            paapi,
            images,
            scrape_client,
            affiliate_tag,
            site_dir,
            reviews_dir,
            config,
        })
    }

    /// Runs the whole batch: discover ideas, build one review page per
    /// idea, then surface the new pages on the homepage. A failed product
    /// is logged and skipped; only a failed discovery step aborts.
    pub async fn run(&self) -> Result<Vec<ReviewPage>> {
        tracing::info!("Discovering trending products...");
        let ideas = self.discover_products().await?;
        tracing::info!("Got {} product ideas", ideas.len());

        let pb = ProgressBar::new(ideas.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} products",
                )
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut pages = Vec::new();
        for (i, idea) in ideas.iter().enumerate() {
            match self.generate_review(idea).await {
                Ok(page) => {
                    tracing::info!("Created: {}", page.title);
                    pages.push(page);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to create review for {} ({}): {}",
                        idea.name,
                        idea.search_term,
                        e
                    );
                }
            }
            pb.inc(1);

            if i + 1 < ideas.len() {
                sleep(self.config.pause_between_products).await;
            }
        }
        pb.finish_with_message("Review generation complete");

        if self.config.update_homepage && !pages.is_empty() {
            if let Err(e) = self.update_homepage(&pages).await {
                tracing::warn!("Failed to update homepage: {}", e);
            }
        }

        Ok(pages)
    }

    async fn discover_products(&self) -> Result<Vec<ProductIdea>> {
        let prompt = prompts::trending_products_prompt(self.config.product_count);
        let raw = self.llm.complete(&prompt, IDEA_MAX_TOKENS).await?;
        parse_product_ideas(&raw, self.config.product_count)
    }

    async fn generate_review(&self, idea: &ProductIdea) -> Result<ReviewPage> {
        tracing::info!("Fetching product data for: {}", idea.search_term);

        let facts = match self.paapi.search_items(&idea.search_term, 1).await {
            Ok(response) => extract_facts(&response, idea, &self.affiliate_tag),
            Err(e) => {
                tracing::warn!("Product lookup failed for '{}': {}", idea.search_term, e);
                ProductFacts {
                    title: idea.name.clone(),
                    image_url: None,
                    detail_url: search_fallback_url(&idea.search_term, &self.affiliate_tag),
                }
            }
        };

        let image_url = match facts.image_url.clone() {
            Some(url) => Some(url),
            None => scrape::fetch_meta_image(&self.scrape_client, &facts.detail_url).await,
        };

        let local_image = match &image_url {
            Some(url) => {
                let basename = {
                    let slug = slugify(&facts.title, 100);
                    if slug.is_empty() {
                        "product".to_string()
                    } else {
                        slug
                    }
                };
                match self.images.download(url, &basename).await {
                    Ok(filename) => Some(filename),
                    Err(e) => {
                        tracing::warn!("Image download failed for {}: {}", url, e);
                        None
                    }
                }
            }
            None => self.images.placeholder().await,
        };

        let (review_image_src, homepage_image) = match &local_image {
            Some(filename) => (
                format!("images/{}", filename),
                format!("reviews/images/{}", filename),
            ),
            None => (PLACEHOLDER_URL.to_string(), PLACEHOLDER_URL.to_string()),
        };

        tracing::info!("Generating review copy for: {}", facts.title);
        let body = match self
            .llm
            .complete(
                &prompts::review_prompt(&facts.title, &facts.detail_url),
                REVIEW_MAX_TOKENS,
            )
            .await
        {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Copy generation failed: {}. Using fallback review.", e);
                fallback_review(&facts.detail_url)
            }
        };

        self.write_page(idea, &facts, &review_image_src, homepage_image, &body)
            .await
    }

    async fn write_page(
        &self,
        idea: &ProductIdea,
        facts: &ProductFacts,
        review_image_src: &str,
        homepage_image: String,
        body: &str,
    ) -> Result<ReviewPage> {
        let filename = page_filename(&facts.title, &idea.name);
        let html = render_review_page(&PageContext {
            title: &facts.title,
            image_src: review_image_src,
            detail_url: &facts.detail_url,
            body_html: body,
            published: Utc::now().date_naive(),
        });

        let path = self.reviews_dir.join(&filename);
        fs::write(&path, html).await?;
        tracing::info!("Saved review to {}", path.display());

        Ok(ReviewPage {
            filename,
            title: facts.title.clone(),
            homepage_image,
        })
    }

    async fn update_homepage(&self, pages: &[ReviewPage]) -> Result<()> {
        let index_path = self.site_dir.join("index.html");
        if !index_path.exists() {
            tracing::warn!("index.html not found, skipping homepage update");
            return Ok(());
        }

        let index_html = fs::read_to_string(&index_path).await?;
        match insert_cards(&index_html, pages) {
            Some(updated) => {
                fs::write(&index_path, updated).await?;
                tracing::info!("Homepage updated with {} new reviews", pages.len());
            }
            None => {
                tracing::warn!("No reviews grid found in index.html, skipping homepage update");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubLlm {
        response: String,
    }

    #[async_trait]
    impl LlmProvider for StubLlm {
        async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
            Ok(self.response.clone())
        }

        fn name(&self) -> &str {
            "Stub"
        }
    }

    fn test_pipeline(site_dir: PathBuf, response: &str) -> GeneratorPipeline {
        GeneratorPipeline::new(
            StubLlm {
                response: response.to_string(),
            },
            PaapiClient::new("ak".to_string(), "sk".to_string(), "mytag-20".to_string()),
            "mytag-20".to_string(),
            site_dir,
            PipelineConfig {
                product_count: 2,
                pause_between_products: Duration::from_millis(0),
                update_homepage: true,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn discovery_parses_stubbed_ideas() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline(
            tmp.path().to_path_buf(),
            "Cordless Water Flosser | cordless water flosser\nHeated Mug | heated coffee mug",
        );

        let ideas = pipeline.discover_products().await.unwrap();
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[1].search_term, "heated coffee mug");
    }

    #[tokio::test]
    async fn discovery_fails_on_unusable_response() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline(tmp.path().to_path_buf(), "Sorry, I cannot help.");
        assert!(pipeline.discover_products().await.is_err());
    }

    #[tokio::test]
    async fn written_page_contains_title_and_link() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline(tmp.path().to_path_buf(), "");

        let idea = ProductIdea {
            name: "Cordless Water Flosser".to_string(),
            search_term: "cordless water flosser".to_string(),
        };
        let facts = ProductFacts {
            title: "Fancy Flosser 3000".to_string(),
            image_url: None,
            detail_url: "https://www.amazon.com/dp/B0TEST?tag=mytag-20".to_string(),
        };

        let page = pipeline
            .write_page(
                &idea,
                &facts,
                "images/flosser.jpg",
                "reviews/images/flosser.jpg".to_string(),
                "<h2>Verdict</h2><p>Great.</p>",
            )
            .await
            .unwrap();

        assert_eq!(page.filename, "fancy-flosser-3000.html");
        let written = std::fs::read_to_string(
            tmp.path().join("reviews").join("fancy-flosser-3000.html"),
        )
        .unwrap();
        assert!(written.contains("Fancy Flosser 3000"));
        assert!(written.contains("https://www.amazon.com/dp/B0TEST?tag=mytag-20"));
        assert!(written.contains("<h2>Verdict</h2>"));
    }

    #[tokio::test]
    async fn homepage_update_inserts_cards() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("index.html"),
            r#"<html><body><div id="reviews"></div></body></html>"#,
        )
        .unwrap();
        let pipeline = test_pipeline(tmp.path().to_path_buf(), "");

        let pages = vec![ReviewPage {
            filename: "fancy-flosser-3000.html".to_string(),
            title: "Fancy Flosser 3000".to_string(),
            homepage_image: "reviews/images/flosser.jpg".to_string(),
        }];
        pipeline.update_homepage(&pages).await.unwrap();

        let updated = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(updated.contains("Fancy Flosser 3000"));
        assert!(updated.contains(r#"href="reviews/fancy-flosser-3000.html""#));
    }

    #[tokio::test]
    async fn missing_homepage_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = test_pipeline(tmp.path().to_path_buf(), "");

        let pages = vec![ReviewPage {
            filename: "a.html".to_string(),
            title: "A".to_string(),
            homepage_image: "reviews/images/a.jpg".to_string(),
        }];
        assert!(pipeline.update_homepage(&pages).await.is_ok());
    }
}
