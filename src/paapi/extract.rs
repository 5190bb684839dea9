use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Images, ProductFacts, ProductIdea, SearchItemsResponse};

const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Affiliate search-results link used whenever no direct product page is
/// available.
pub fn search_fallback_url(search_term: &str, tag: &str) -> String {
    let keywords = utf8_percent_encode(search_term, QUERY)
        .to_string()
        .replace(' ', "+");
    format!("https://www.amazon.com/s?k={}&tag={}", keywords, tag)
}

/// Turns a search response into per-field product facts, applying the
/// fallbacks for anything the response is missing. The image stays `None`
/// here so the scrape fallback can still have its chance.
pub fn extract_facts(
    response: &SearchItemsResponse,
    idea: &ProductIdea,
    tag: &str,
) -> ProductFacts {
    for error in &response.errors {
        tracing::warn!(
            "PA-API reported error {}: {}",
            error.code.as_deref().unwrap_or("unknown"),
            error.message.as_deref().unwrap_or("")
        );
    }

    let item = response
        .search_result
        .as_ref()
        .and_then(|r| r.items.first());

    let title = item
        .and_then(|i| {
            i.item_info
                .as_ref()
                .and_then(|info| info.title.as_ref())
                .and_then(|t| t.display_value.clone())
                .or_else(|| i.asin.clone())
        })
        .unwrap_or_else(|| idea.name.clone());

    let detail_url = item
        .and_then(|i| i.detail_page_url.clone())
        .unwrap_or_else(|| search_fallback_url(&idea.search_term, tag));

    let image_url = item.and_then(|i| i.images.as_ref()).and_then(best_image_url);

    ProductFacts {
        title,
        image_url,
        detail_url,
    }
}

// Preference order: primary large, medium, small, then the first variant.
fn best_image_url(images: &Images) -> Option<String> {
    if let Some(primary) = &images.primary {
        let primary_url = primary
            .large
            .as_ref()
            .or(primary.medium.as_ref())
            .or(primary.small.as_ref())
            .map(|spec| spec.url.clone());
        if primary_url.is_some() {
            return primary_url;
        }
    }

    images.variants.first().and_then(|v| {
        v.large
            .as_ref()
            .or(v.medium.as_ref())
            .map(|spec| spec.url.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageSet, ImageSpec, Item, ItemInfo, SearchResult, TitleInfo};

    fn idea() -> ProductIdea {
        ProductIdea {
            name: "Cordless Water Flosser".to_string(),
            search_term: "cordless water flosser".to_string(),
        }
    }

    fn spec(url: &str) -> ImageSpec {
        ImageSpec {
            url: url.to_string(),
            height: None,
            width: None,
        }
    }

    fn response_with(item: Item) -> SearchItemsResponse {
        SearchItemsResponse {
            search_result: Some(SearchResult { items: vec![item] }),
            errors: Vec::new(),
        }
    }

    #[test]
    fn fallback_url_encodes_like_a_query() {
        let url = search_fallback_url("heated eye massager & case", "mytag-20");
        assert_eq!(
            url,
            "https://www.amazon.com/s?k=heated+eye+massager+%26+case&tag=mytag-20"
        );
    }

    #[test]
    fn empty_response_falls_back_everywhere() {
        let facts = extract_facts(&SearchItemsResponse::default(), &idea(), "mytag-20");
        assert_eq!(facts.title, "Cordless Water Flosser");
        assert_eq!(
            facts.detail_url,
            "https://www.amazon.com/s?k=cordless+water+flosser&tag=mytag-20"
        );
        assert!(facts.image_url.is_none());
    }

    #[test]
    fn title_prefers_display_value_then_asin() {
        let response = response_with(Item {
            asin: Some("B0TEST123".to_string()),
            detail_page_url: None,
            item_info: None,
            images: None,
        });
        let facts = extract_facts(&response, &idea(), "mytag-20");
        assert_eq!(facts.title, "B0TEST123");

        let response = response_with(Item {
            asin: Some("B0TEST123".to_string()),
            detail_page_url: Some("https://www.amazon.com/dp/B0TEST123".to_string()),
            item_info: Some(ItemInfo {
                title: Some(TitleInfo {
                    display_value: Some("Fancy Flosser 3000".to_string()),
                }),
            }),
            images: None,
        });
        let facts = extract_facts(&response, &idea(), "mytag-20");
        assert_eq!(facts.title, "Fancy Flosser 3000");
        assert_eq!(facts.detail_url, "https://www.amazon.com/dp/B0TEST123");
    }

    #[test]
    fn image_prefers_primary_large_then_medium() {
        let images = Images {
            primary: Some(ImageSet {
                large: Some(spec("https://img/large.jpg")),
                medium: Some(spec("https://img/medium.jpg")),
                small: None,
            }),
            variants: Vec::new(),
        };
        assert_eq!(
            best_image_url(&images),
            Some("https://img/large.jpg".to_string())
        );

        let images = Images {
            primary: Some(ImageSet {
                large: None,
                medium: Some(spec("https://img/medium.jpg")),
                small: Some(spec("https://img/small.jpg")),
            }),
            variants: Vec::new(),
        };
        assert_eq!(
            best_image_url(&images),
            Some("https://img/medium.jpg".to_string())
        );
    }

    #[test]
    fn image_falls_back_to_first_variant() {
        let images = Images {
            primary: None,
            variants: vec![ImageSet {
                large: Some(spec("https://img/variant.jpg")),
                medium: None,
                small: None,
            }],
        };
        assert_eq!(
            best_image_url(&images),
            Some("https://img/variant.jpg".to_string())
        );
    }
}
