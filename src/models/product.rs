use serde::{Deserialize, Serialize};

/// One product suggestion from the idea generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductIdea {
    pub name: String,
    pub search_term: String,
}

/// Product facts resolved from the product API, with per-field fallbacks
/// already applied: title falls back to the idea name, detail_url to an
/// affiliate search-results link, image_url stays None until the scrape
/// fallback has had its chance.
#[derive(Debug, Clone)]
pub struct ProductFacts {
    pub title: String,
    pub image_url: Option<String>,
    pub detail_url: String,
}

/// A rendered review page, as the homepage update consumes it.
#[derive(Debug, Clone)]
pub struct ReviewPage {
    pub filename: String,
    pub title: String,
    pub homepage_image: String,
}
