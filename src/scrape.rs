use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};

const BROWSER_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

const META_SELECTORS: &[&str] = &[
    r#"meta[property="og:image"]"#,
    r#"meta[name="og:image"]"#,
    r#"meta[name="twitter:image"]"#,
    r#"meta[property="twitter:image"]"#,
];

/// Pulls a product image out of a page's social-card meta tags.
pub fn extract_meta_image(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for css in META_SELECTORS {
        let selector = Selector::parse(css).unwrap();
        if let Some(element) = document.select(&selector).next() {
            if let Some(content) = element.value().attr("content") {
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }

    None
}

/// Best-effort scrape of a product page for its social-card image. Pages
/// frequently block non-browser clients, so every failure maps to `None`.
pub async fn fetch_meta_image(client: &Client, url: &str) -> Option<String> {
    if !url.starts_with("http") {
        return None;
    }

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, BROWSER_UA)
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .ok()?;

    if !response.status().is_success() {
        tracing::debug!("Scrape fallback got status {} for {}", response.status(), url);
        return None;
    }

    let body = response.text().await.ok()?;
    extract_meta_image(&body)
}
