use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tokio::fs;

use crate::error::{Error, Result};
use crate::retry::retry_with_backoff;

const BROWSER_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Remote stand-in used when no product image can be found anywhere.
pub const PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/800x600/0d6efd/ffffff.png?text=No+Image";

const PLACEHOLDER_FILENAME: &str = "placeholder-no-image.png";

/// Derives a filesystem-safe filename from the last path segment of a URL.
/// Query strings and fragments are dropped, anything outside `[\w.-]` is
/// replaced with a dash, and the result is capped at 120 characters.
pub fn safe_filename_from_url(url: &str, fallback: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or("");
    let after_scheme = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);

    let name = match after_scheme.split_once('/') {
        Some((_, path)) => path.rsplit('/').next().unwrap_or(""),
        None => "",
    };
    let name = if name.is_empty() { fallback } else { name };

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    sanitized.chars().take(120).collect()
}

/// Mirrors remote product images into a local directory so review pages
/// never hot-link vendor CDNs.
pub struct ImageStore {
    client: Client,
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { client, dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Downloads `url` into the store and returns the stored filename.
    pub async fn download(&self, url: &str, fallback_basename: &str) -> Result<String> {
        retry_with_backoff(2, Duration::from_millis(500), || {
            self.download_once(url, fallback_basename)
        })
        .await
    }

    async fn download_once(&self, url: &str, fallback_basename: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, BROWSER_UA)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ImageFetch(format!(
                "Bad status {} for {}",
                status, url
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let bytes = response.bytes().await?;

        let mut filename = safe_filename_from_url(url, fallback_basename);
        if Path::new(&filename).extension().is_none() {
            filename.push_str(extension_for(&content_type));
        }

        let path = self.dir.join(&filename);
        if !path.exists() {
            fs::write(&path, &bytes).await?;
            tracing::debug!("Stored image {} ({} bytes)", filename, bytes.len());
        }

        Ok(filename)
    }

    /// Mirrors the remote placeholder once. `None` means even the
    /// placeholder could not be fetched and pages should reference the
    /// remote URL directly.
    pub async fn placeholder(&self) -> Option<String> {
        let path = self.dir.join(PLACEHOLDER_FILENAME);
        if path.exists() {
            return Some(PLACEHOLDER_FILENAME.to_string());
        }

        let response = self
            .client
            .get(PLACEHOLDER_URL)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;
        let bytes = response.bytes().await.ok()?;

        match fs::write(&path, &bytes).await {
            Ok(()) => Some(PLACEHOLDER_FILENAME.to_string()),
            Err(e) => {
                tracing::warn!("Failed to store placeholder image: {}", e);
                None
            }
        }
    }
}

fn extension_for(content_type: &str) -> &'static str {
    if content_type.contains("jpeg") {
        ".jpg"
    } else if content_type.contains("png") {
        ".png"
    } else if content_type.contains("gif") {
        ".gif"
    } else if content_type.contains("webp") {
        ".webp"
    } else {
        ".jpg"
    }
}
