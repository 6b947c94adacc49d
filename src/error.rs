use thiserror::Error;

use crate::api::types::RegionLevel;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Response is not valid JSON: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("'{name}'을(를) 찾을 수 없습니다. ({level})")]
    RegionNotFound { level: RegionLevel, name: String },

    #[error("{region}에서 아파트 정보를 찾을 수 없습니다.")]
    NoComplexes { region: String },

    #[error("수집된 아파트 정보가 없습니다. ({region})")]
    NoListings { region: String },

    #[error("{0}")]
    Other(String),
}

impl CrawlError {
    /// Get user-friendly hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::RegionNotFound { level, .. } => Some(format!(
                "Check the {} name. It must match the Naver Land region name exactly (예: {}).",
                level.label(),
                level.example()
            )),
            Self::NoComplexes { .. } => {
                Some("The neighborhood has no apartment complexes listed.".to_string())
            }
            Self::NoListings { .. } => Some(
                "No complex reported a unit-size listing: detail requests failed or returned no unit sizes. Run with RUST_LOG=warn to see skipped complexes."
                    .to_string(),
            ),
            Self::Network(_) | Self::HttpStatus { .. } => {
                Some("Check your internet connection and try again.".to_string())
            }
            Self::Config(_) => Some("Check ~/.aptcrawl/config.yaml.".to_string()),
            _ => None,
        }
    }

    /// Whether the error came from the fetch layer (request, status or body)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::HttpStatus { .. } | Self::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
