use log::{debug, warn};

use crate::api::types::{ApartmentComplex, ComplexListing, ListingRow};
use crate::api::{Endpoint, LandApi};
use crate::progress::{collected_line, failed_line, ComplexProgress};

/// Result of aggregating every complex of a neighborhood
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    /// Rows in complex order, then variant order
    pub rows: Vec<ListingRow>,
    /// Labels of complexes whose detail could not be used
    pub skipped: Vec<String>,
}

/// Detail of one complex, or `None` when the request failed or the payload
/// lacks the building detail or the unit-size list
pub async fn fetch_detail(api: &dyn LandApi, complex_no: &str) -> Option<ComplexListing> {
    let payload = match api.fetch(&Endpoint::complex_detail(complex_no)).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Failed to fetch detail of complex {}: {}", complex_no, e);
            return None;
        }
    };

    let listing = ComplexListing::from_payload(&payload);
    if listing.is_none() {
        debug!("Complex {} detail is missing required sections", complex_no);
    }
    listing
}

/// Fetch and flatten every complex in order. A bad complex is skipped, never fatal.
pub async fn aggregate(
    api: &dyn LandApi,
    complexes: &[ApartmentComplex],
    progress: &ComplexProgress,
) -> Aggregate {
    let mut result = Aggregate::default();

    for complex in complexes {
        let label = complex.label();
        progress.start(&label);

        let listing = match complex.complex_no.as_deref() {
            Some(complex_no) => fetch_detail(api, complex_no).await,
            None => None,
        };

        match listing {
            Some(listing) => {
                progress.complete(&collected_line(
                    &listing.detail.complex_name,
                    listing.variants.len(),
                ));
                result.rows.extend(listing.rows());
            }
            None => {
                warn!("Skipping complex {}: detail unavailable", label);
                progress.complete(&failed_line(&label));
                result.skipped.push(label);
            }
        }
    }

    progress.finish();
    result
}
