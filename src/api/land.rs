use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use tokio::time::sleep;
use url::Url;

use super::client::{ClientConfig, Endpoint, LandApi};
use super::http_client::build_http_client;
use crate::error::{CrawlError, Result};

/// Naver Land API client: one throttled GET per call, no retries
pub struct NaverLandClient {
    config: ClientConfig,
    base_url: Url,
    http_client: Client,
}

impl NaverLandClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http_client = build_http_client(&config)?;

        Ok(Self {
            config,
            base_url,
            http_client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL for an endpoint
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.base_url.join(&endpoint.path())?;
        url.query_pairs_mut().extend_pairs(endpoint.query());
        Ok(url)
    }
}

#[async_trait]
impl LandApi for NaverLandClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        // Throttle even when the previous call failed.
        if !self.config.request_delay.is_zero() {
            sleep(self.config.request_delay).await;
        }

        let url = self.endpoint_url(endpoint)?;
        debug!("GET {}", url);

        let response = self.http_client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            CrawlError::Decode(format!(
                "{} (response starts with: {})",
                e,
                body.chars().take(100).collect::<String>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> NaverLandClient {
        NaverLandClient::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_region_url() {
        let url = client("https://new.land.naver.com")
            .endpoint_url(&Endpoint::regions("0000000000"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://new.land.naver.com/api/regions/list?cortarNo=0000000000&sameAddressGroup=false"
        );
    }

    #[test]
    fn test_complex_detail_url() {
        let url = client("http://127.0.0.1:1234")
            .endpoint_url(&Endpoint::complex_detail("102378"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:1234/api/complexes/102378?sameAddressGroup=false"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = NaverLandClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(CrawlError::Url(_))));
    }
}
