use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use super::client::ClientConfig;
use crate::error::{CrawlError, Result};

/// Convert configured header pairs into a `HeaderMap`
pub fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| CrawlError::Config(format!("Invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            CrawlError::Config(format!("Invalid value for header '{}': {}", name.as_str(), e))
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Build the HTTP client used for every upstream call.
///
/// One connection is enough since requests are strictly sequential.
pub fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        .default_headers(header_map(&config.headers)?)
        .pool_max_idle_per_host(1)
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(60))
        .cookie_store(true)
        .use_rustls_tls();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}
