use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::models::SearchItemsResponse;
use crate::paapi::pacer::Pacer;
use crate::paapi::signer::SigV4Signer;
use crate::retry::retry_with_backoff;

const PA_HOST: &str = "webservices.amazon.com";
const PA_PATH: &str = "/paapi5/searchitems";
const PA_REGION: &str = "us-east-1";
const PA_SERVICE: &str = "ProductAdvertisingAPI";
const PA_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems";

pub struct PaapiClient {
    client: Client,
    signer: SigV4Signer,
    partner_tag: String,
    pacer: Pacer,
}

impl PaapiClient {
    pub fn new(access_key: String, secret_key: String, partner_tag: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            signer: SigV4Signer::new(access_key, secret_key, PA_REGION, PA_SERVICE),
            partner_tag,
            pacer: Pacer::new(Duration::from_millis(1100)),
        }
    }

    pub async fn search_items(
        &self,
        keywords: &str,
        item_count: u32,
    ) -> Result<SearchItemsResponse> {
        retry_with_backoff(3, Duration::from_secs(1), || {
            self.search_items_once(keywords, item_count)
        })
        .await
    }

    fn build_payload(&self, keywords: &str, item_count: u32) -> Value {
        json!({
            "Keywords": keywords,
            "SearchIndex": "All",
            "ItemCount": item_count,
            "PartnerTag": self.partner_tag,
            "PartnerType": "Associates",
            "Marketplace": "www.amazon.com",
            "Resources": [
                "ItemInfo.Title",
                "Images.Primary.Medium",
                "Images.Primary.Large",
                "Images.Primary.Small",
                "ItemInfo.ByLineInfo",
                "Offers.Listings.Price",
                "DetailPageURL"
            ]
        })
    }

    async fn search_items_once(
        &self,
        keywords: &str,
        item_count: u32,
    ) -> Result<SearchItemsResponse> {
        self.pacer.wait().await;

        let payload = serde_json::to_vec(&self.build_payload(keywords, item_count))?;

        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("host".to_string(), PA_HOST.to_string());
        headers.insert("x-amz-target".to_string(), PA_TARGET.to_string());

        let signed = self
            .signer
            .sign("POST", PA_PATH, &headers, &payload, Utc::now())?;

        tracing::debug!("Searching products for: {}", keywords);

        let response = self
            .client
            .post(format!("https://{}{}", PA_HOST, PA_PATH))
            .header("content-type", "application/json")
            .header("x-amz-date", &signed.amz_date)
            .header("x-amz-target", PA_TARGET)
            .header("authorization", &signed.authorization)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProductApi(format!(
                "PA-API error ({}): {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}
