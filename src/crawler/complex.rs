use log::{info, warn};

use crate::api::types::{parse_complex_list, ApartmentComplex};
use crate::api::{Endpoint, LandApi};

/// Apartment complexes in a neighborhood, in upstream order.
///
/// No data and failed requests both yield an empty list.
pub async fn list_complexes(api: &dyn LandApi, cortar_no: &str) -> Vec<ApartmentComplex> {
    match api.fetch(&Endpoint::complexes(cortar_no)).await {
        Ok(payload) => {
            let complexes = parse_complex_list(&payload);
            info!("{} complexes listed under {}", complexes.len(), cortar_no);
            complexes
        }
        Err(e) => {
            warn!("Failed to fetch complexes under {}: {}", cortar_no, e);
            Vec::new()
        }
    }
}
