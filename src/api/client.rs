use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::error::Result;

/// Default Naver Land host
pub const DEFAULT_BASE_URL: &str = "https://new.land.naver.com";

/// Pause before every request unless configured otherwise
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(5);

/// Browser-session headers sent with every request.
///
/// `Host` and `Accept-Encoding` are left to reqwest, which derives the first from
/// the URL and negotiates gzip itself.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "Referer",
        "https://new.land.naver.com/complexes/102378?ms=37.5018495,127.0438028,16&a=APT&b=A1&e=RETAIL",
    ),
    ("Sec-Fetch-Dest", "empty"),
    ("Sec-Fetch-Mode", "cors"),
    ("Sec-Fetch-Site", "same-origin"),
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/86.0.4240.198 Safari/537.36",
    ),
];

/// The three upstream JSON resources
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Child regions of a region code
    Regions { cortar_no: String },
    /// Apartment complexes located in a region
    Complexes { cortar_no: String },
    /// Building detail and unit-size list of one complex
    ComplexDetail { complex_no: String },
}

impl Endpoint {
    pub fn regions(cortar_no: impl Into<String>) -> Self {
        Self::Regions {
            cortar_no: cortar_no.into(),
        }
    }

    pub fn complexes(cortar_no: impl Into<String>) -> Self {
        Self::Complexes {
            cortar_no: cortar_no.into(),
        }
    }

    pub fn complex_detail(complex_no: impl Into<String>) -> Self {
        Self::ComplexDetail {
            complex_no: complex_no.into(),
        }
    }

    /// Path relative to the API host
    pub fn path(&self) -> String {
        match self {
            Self::Regions { .. } => "/api/regions/list".to_string(),
            Self::Complexes { .. } => "/api/regions/complexes".to_string(),
            Self::ComplexDetail { complex_no } => format!("/api/complexes/{}", complex_no),
        }
    }

    /// Query parameters in the order they are sent
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Regions { cortar_no } => vec![
                ("cortarNo", cortar_no.clone()),
                ("sameAddressGroup", "false".to_string()),
            ],
            Self::Complexes { cortar_no } => vec![
                ("cortarNo", cortar_no.clone()),
                ("realEstateType", "APT".to_string()),
                ("order", String::new()),
            ],
            Self::ComplexDetail { .. } => vec![("sameAddressGroup", "false".to_string())],
        }
    }
}

/// Fetch capability over the listings API.
///
/// Implementations return the decoded JSON body or a typed transport error;
/// callers decide whether a failure counts as "no data".
#[async_trait]
pub trait LandApi: Send + Sync {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value>;
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, e.g. `https://new.land.naver.com`
    pub base_url: String,
    /// Headers installed on every request
    pub headers: Vec<(String, String)>,
    /// Unconditional pause before each request
    pub request_delay: Duration,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: BROWSER_HEADERS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            request_delay: DEFAULT_REQUEST_DELAY,
            timeout: None,
        }
    }
}
