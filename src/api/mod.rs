pub mod client;
pub mod fields;
pub mod http_client;
pub mod land;
pub mod types;

pub use client::{ClientConfig, Endpoint, LandApi};
pub use land::NaverLandClient;
