use super::PageFetcher;
use crate::error::Result;
use crate::model::Page;
use async_trait::async_trait;
use std::time::Duration;

/// Production fetcher for the remote paging API.
///
/// Issues `GET {endpoint}?page={n}` and decodes the JSON body. The endpoint
/// and request timeout come from configuration.
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("artable/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, page_one_based: usize) -> Result<Page> {
        log::debug!("GET {}?page={}", self.endpoint, page_one_based);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("page", page_one_based)])
            .send()
            .await?
            .error_for_status()?;

        // Decode via serde_json so a malformed body surfaces as a distinct
        // error from transport failures.
        let body = response.text().await?;
        let page: Page = serde_json::from_str(&body)?;

        log::debug!(
            "page {} -> {} rows (total_pages {})",
            page_one_based,
            page.data.len(),
            page.pagination.total_pages
        );

        Ok(page)
    }
}
