use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// AWS Signature Version 4 signer. Deterministic for a given set of
/// credentials, headers, payload and timestamp, so the timestamp is a
/// parameter rather than read from the clock inside.
pub struct SigV4Signer {
    access_key: String,
    secret_key: String,
    region: String,
    service: String,
}

pub struct SignedRequest {
    pub amz_date: String,
    pub authorization: String,
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| Error::Signing(format!("Invalid HMAC key: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn hex_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

impl SigV4Signer {
    pub fn new(access_key: String, secret_key: String, region: &str, service: &str) -> Self {
        Self {
            access_key,
            secret_key,
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Signs a request. `headers` must hold lowercase header names; the
    /// `x-amz-date` header is derived from `now` and added here.
    pub fn sign(
        &self,
        method: &str,
        path: &str,
        headers: &BTreeMap<String, String>,
        payload: &[u8],
        now: DateTime<Utc>,
    ) -> Result<SignedRequest> {
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let datestamp = now.format("%Y%m%d").to_string();

        let mut all_headers = headers.clone();
        all_headers.insert("x-amz-date".to_string(), amz_date.clone());

        let signed_headers = all_headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";");

        let canonical_request =
            build_canonical_request(method, path, &all_headers, &signed_headers, payload);

        let credential_scope = format!(
            "{}/{}/{}/aws4_request",
            datestamp, self.region, self.service
        );
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date,
            credential_scope,
            hex_sha256(canonical_request.as_bytes())
        );

        let signing_key = self.derive_signing_key(&datestamp)?;
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, self.access_key, credential_scope, signed_headers, signature
        );

        Ok(SignedRequest {
            amz_date,
            authorization,
        })
    }

    // AWS4<secret> -> date -> region -> service -> "aws4_request"
    fn derive_signing_key(&self, datestamp: &str) -> Result<Vec<u8>> {
        let k_date = hmac_sha256(
            format!("AWS4{}", self.secret_key).as_bytes(),
            datestamp.as_bytes(),
        )?;
        let k_region = hmac_sha256(&k_date, self.region.as_bytes())?;
        let k_service = hmac_sha256(&k_region, self.service.as_bytes())?;
        hmac_sha256(&k_service, b"aws4_request")
    }
}

fn build_canonical_request(
    method: &str,
    path: &str,
    headers: &BTreeMap<String, String>,
    signed_headers: &str,
    payload: &[u8],
) -> String {
    let canonical_headers: String = headers
        .iter()
        .map(|(k, v)| format!("{}:{}\n", k, v.trim()))
        .collect();

    format!(
        "{}\n{}\n\n{}\n{}\n{}",
        method,
        path,
        canonical_headers,
        signed_headers,
        hex_sha256(payload)
    )
}
