use log::info;
use std::env;

use crate::api::NaverLandClient;
use crate::config::Config;
use crate::crawler::{Crawler, RegionQuery};
use crate::error::Result;
use crate::output;
use crate::progress::ProgressManager;

/// Crawl one neighborhood and export it to the current directory
pub async fn execute(query: RegionQuery) -> Result<()> {
    let config = Config::load()?;
    let client = NaverLandClient::new(config.client_config())?;
    info!(
        "Using {} with a {:?} delay between requests",
        client.config().base_url,
        client.config().request_delay
    );

    let progress = ProgressManager::new(false);
    let crawler = Crawler::new(&client, &progress);

    let export = crawler.export(&query, &env::current_dir()?).await?;

    let path = export.path.canonicalize().unwrap_or(export.path);
    println!(
        "\n아파트 정보가 '{}' 파일로 저장되었습니다.",
        path.display()
    );
    if !export.report.skipped.is_empty() {
        println!(
            "{}개 단지의 상세 정보를 가져오지 못했습니다.",
            export.report.skipped.len()
        );
    }
    println!(
        "{}",
        output::render_preview(&export.report.rows, output::PREVIEW_ROWS)
    );

    Ok(())
}
