pub mod crawl;

use clap::Parser;

use crate::crawler::RegionQuery;
use crate::error::{CrawlError, Result};

/// Naver Land apartment crawler
#[derive(Parser, Debug)]
#[command(
    name = "aptcrawl",
    about = "네이버 부동산 아파트 정보를 크롤링합니다.",
    long_about = None
)]
pub struct Cli {
    /// 시/도 이름 (예: 서울특별시)
    pub sido: String,

    /// 시/군/구 이름 (예: 강남구)
    pub gungu: String,

    /// 읍/면/동 이름 (예: 개포동)
    pub dong: String,
}

impl Cli {
    pub fn query(&self) -> RegionQuery {
        RegionQuery::new(&self.sido, &self.gungu, &self.dong)
    }

    /// Run the CLI application
    pub async fn run() -> Result<()> {
        let cli = Self::parse();

        // RUST_LOG overrides the default filter
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

        let result = crawl::execute(cli.query()).await;

        if let Err(ref e) = result {
            match e {
                CrawlError::RegionNotFound { .. }
                | CrawlError::NoComplexes { .. }
                | CrawlError::NoListings { .. } => {
                    eprintln!("{}", e);
                }
                CrawlError::Network(err) => {
                    eprintln!("Network error: {}", err);
                }
                _ => {
                    eprintln!("Error: {}", e);
                }
            }
            if let Some(hint) = e.hint() {
                eprintln!("\nHint: {}", hint);
            }
        }

        result
    }
}
