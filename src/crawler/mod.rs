//! Sequential crawl pipeline: region resolution, complex listing, detail
//! aggregation and CSV export.

pub mod complex;
pub mod detail;
pub mod region;

pub use complex::list_complexes;
pub use detail::{aggregate, fetch_detail, Aggregate};
pub use region::{find_region, resolve, resolve_path, ResolvedRegion};

use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::api::types::ListingRow;
use crate::api::LandApi;
use crate::error::{CrawlError, Result};
use crate::output;
use crate::progress::{found_line, ProgressManager};

/// Region names as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionQuery {
    /// 시/도
    pub province: String,
    /// 시/군/구
    pub district: String,
    /// 읍/면/동
    pub neighborhood: String,
}

impl RegionQuery {
    pub fn new(
        province: impl Into<String>,
        district: impl Into<String>,
        neighborhood: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            district: district.into(),
            neighborhood: neighborhood.into(),
        }
    }

    /// Reject names that cannot be looked up or used in the export file name
    pub fn validate(&self) -> Result<()> {
        for name in [&self.province, &self.district, &self.neighborhood] {
            if name.trim().is_empty() {
                return Err(CrawlError::InvalidInput(
                    "Region names cannot be empty".to_string(),
                ));
            }
            if name.contains(['/', '\\']) {
                return Err(CrawlError::InvalidInput(format!(
                    "Region name '{}' cannot contain a path separator",
                    name
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for RegionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.province, self.district, self.neighborhood)
    }
}

/// Everything collected for one query
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub region: ResolvedRegion,
    pub complex_count: usize,
    pub rows: Vec<ListingRow>,
    pub skipped: Vec<String>,
}

/// A written export
#[derive(Debug, Clone)]
pub struct Export {
    pub path: PathBuf,
    pub report: CrawlReport,
}

/// Runs the pipeline against a fetch capability
pub struct Crawler<'a> {
    api: &'a dyn LandApi,
    progress: &'a ProgressManager,
}

impl<'a> Crawler<'a> {
    pub fn new(api: &'a dyn LandApi, progress: &'a ProgressManager) -> Self {
        Self { api, progress }
    }

    /// Resolve the region, list its complexes and aggregate their details.
    ///
    /// Fails on an unresolved name, an empty complex list, or when no complex
    /// produced a row.
    pub async fn collect(&self, query: &RegionQuery) -> Result<CrawlReport> {
        query.validate()?;

        let region = resolve_path(self.api, query).await?;
        info!("Resolved {} to {}", query, region.neighborhood.code);

        let complexes = list_complexes(self.api, &region.neighborhood.code).await;
        if complexes.is_empty() {
            return Err(CrawlError::NoComplexes {
                region: query.to_string(),
            });
        }

        self.progress.announce(&found_line(complexes.len()));

        let bar = self.progress.create_complex_progress(complexes.len() as u64);
        let Aggregate { rows, skipped } = aggregate(self.api, &complexes, &bar).await;
        if rows.is_empty() {
            return Err(CrawlError::NoListings {
                region: query.to_string(),
            });
        }

        info!(
            "Collected {} rows from {} complexes ({} skipped)",
            rows.len(),
            complexes.len(),
            skipped.len()
        );

        Ok(CrawlReport {
            region,
            complex_count: complexes.len(),
            rows,
            skipped,
        })
    }

    /// Collect and write the CSV into `dir`. Nothing is written on failure.
    pub async fn export(&self, query: &RegionQuery, dir: &Path) -> Result<Export> {
        let report = self.collect(query).await?;
        let path = dir.join(output::export_file_name(query));
        output::write_csv(&path, &report.rows)?;

        Ok(Export { path, report })
    }
}
