use crate::core::{ConfigProvider, Occupancy, OccupancySource};
use crate::utils::error::{InSpaceError, Result};
use reqwest::Client;

/// Fetches the occupancy snapshot over HTTP. Every call issues a fresh request.
pub struct HttpFetcher<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpFetcher<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> OccupancySource for HttpFetcher<C> {
    async fn fetch_occupancy(&self) -> Result<Occupancy> {
        let endpoint = self.config.api_endpoint();

        tracing::debug!("Making API request to: {}", endpoint);
        let response = self.client.get(endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(InSpaceError::HttpStatusError {
                status: status.as_u16(),
                url: endpoint.to_string(),
            });
        }

        // Decode from raw bytes so a bad body surfaces as a parse error.
        let body = response.bytes().await?;
        let occupancy: Occupancy = serde_json::from_slice(&body)?;

        if !occupancy.is_consistent() {
            tracing::warn!(
                "Upstream reports {} people but lists {}",
                occupancy.number,
                occupancy.people.len()
            );
        }

        tracing::debug!("Fetched {} people", occupancy.people.len());
        Ok(occupancy)
    }
}
