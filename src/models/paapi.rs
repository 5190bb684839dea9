use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchItemsResponse {
    #[serde(rename = "SearchResult", default)]
    pub search_result: Option<SearchResult>,
    #[serde(rename = "Errors", default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResult {
    #[serde(rename = "Items", default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Item {
    #[serde(rename = "ASIN", default)]
    pub asin: Option<String>,
    #[serde(rename = "DetailPageURL", default)]
    pub detail_page_url: Option<String>,
    #[serde(rename = "ItemInfo", default)]
    pub item_info: Option<ItemInfo>,
    #[serde(rename = "Images", default)]
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ItemInfo {
    #[serde(rename = "Title", default)]
    pub title: Option<TitleInfo>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TitleInfo {
    #[serde(rename = "DisplayValue", default)]
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Images {
    #[serde(rename = "Primary", default)]
    pub primary: Option<ImageSet>,
    #[serde(rename = "Variants", default)]
    pub variants: Vec<ImageSet>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImageSet {
    #[serde(rename = "Large", default)]
    pub large: Option<ImageSpec>,
    #[serde(rename = "Medium", default)]
    pub medium: Option<ImageSpec>,
    #[serde(rename = "Small", default)]
    pub small: Option<ImageSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSpec {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Height", default)]
    pub height: Option<u32>,
    #[serde(rename = "Width", default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}
