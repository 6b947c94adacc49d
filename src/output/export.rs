use std::fs;
use std::path::Path;

use crate::api::types::ListingRow;
use crate::crawler::RegionQuery;
use crate::error::{CrawlError, Result};

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

const FILE_SUFFIX: &str = "아파트_매물.csv";

/// `<시/도>_<시/군/구>_<읍/면/동>_아파트_매물.csv`
pub fn export_file_name(query: &RegionQuery) -> String {
    format!(
        "{}_{}_{}_{}",
        query.province, query.district, query.neighborhood, FILE_SUFFIX
    )
}

/// Render rows as CSV bytes with a leading BOM and a header row
pub fn render_csv(rows: &[ListingRow]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(BOM.to_vec());
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.into_inner()
        .map_err(|e| CrawlError::Other(e.to_string()))
}

/// Write the export file, replacing any previous one
pub fn write_csv(path: &Path, rows: &[ListingRow]) -> Result<()> {
    let data = render_csv(rows)?;
    fs::write(path, data)?;
    Ok(())
}
