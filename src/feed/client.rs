//! Feed HTTP client
//!
//! Fetches the full current-legislators data set in one request. The source
//! holds on the order of a few hundred records, so there is no pagination.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::types::RawLegislator;
use crate::error::FetchError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct FeedClient {
    client: Client,
    url: Url,
}

impl FeedClient {
    pub fn new(url: Url) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, url })
    }

    /// Fetch the full list of raw legislator records.
    pub async fn fetch(&self) -> Result<Vec<RawLegislator>, FetchError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            FetchError::Decode(format!(
                "JSON parse error at line {} col {}: {}",
                e.line(),
                e.column(),
                e
            ))
        })
    }
}
