use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::fields::{list, text, text_or};

/// Parent code used to list the top-level regions (시/도)
pub const ROOT_CORTAR_NO: &str = "0000000000";

/// Marker written for price statistics the upstream did not report
pub const MISSING_PRICE: &str = "N/A";

/// Level in the region hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionLevel {
    /// 시/도
    Province,
    /// 시/군/구
    District,
    /// 읍/면/동
    Neighborhood,
}

impl RegionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Province => "시/도",
            Self::District => "시/군/구",
            Self::Neighborhood => "읍/면/동",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            Self::Province => "서울특별시",
            Self::District => "강남구",
            Self::Neighborhood => "개포동",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of a region list (`cortarNo` / `cortarName`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNode {
    pub code: String,
    pub name: String,
}

impl RegionNode {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Build a node from a `regionList` record; both code and name are required
    pub fn from_record(record: &Value) -> Option<Self> {
        Some(Self {
            code: text(record, "cortarNo")?,
            name: text(record, "cortarName")?,
        })
    }
}

/// Extract the `regionList` of a region payload, dropping unusable entries
pub fn parse_region_list(payload: &Value) -> Vec<RegionNode> {
    list(payload, "regionList")
        .map(|records| records.iter().filter_map(RegionNode::from_record).collect())
        .unwrap_or_default()
}

/// Apartment complex as listed for a neighborhood
#[derive(Debug, Clone, PartialEq)]
pub struct ApartmentComplex {
    pub complex_no: Option<String>,
    pub complex_name: Option<String>,
    /// Full upstream record; most fields are unused
    pub raw: Value,
}

impl ApartmentComplex {
    pub fn from_record(record: Value) -> Self {
        Self {
            complex_no: text(&record, "complexNo"),
            complex_name: text(&record, "complexName"),
            raw: record,
        }
    }

    /// Name used in progress and warning lines: the name, else the code
    pub fn label(&self) -> String {
        self.complex_name
            .clone()
            .or_else(|| self.complex_no.clone())
            .unwrap_or_else(|| "(unknown complex)".to_string())
    }
}

/// Extract the `complexList` of a complex-list payload in upstream order
pub fn parse_complex_list(payload: &Value) -> Vec<ApartmentComplex> {
    list(payload, "complexList")
        .map(|records| {
            records
                .iter()
                .cloned()
                .map(ApartmentComplex::from_record)
                .collect()
        })
        .unwrap_or_default()
}

/// Building-level attributes from `complexDetail`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexDetail {
    pub complex_name: String,
    pub address: String,
    pub detail_address: String,
    pub total_household_count: String,
    pub use_approve_ym: String,
}

impl ComplexDetail {
    pub fn from_record(record: &Value) -> Self {
        Self {
            complex_name: text_or(record, "complexName", ""),
            address: text_or(record, "address", ""),
            detail_address: text_or(record, "detailAddress", ""),
            total_household_count: text_or(record, "totalHouseholdCount", ""),
            use_approve_ym: text_or(record, "useApproveYm", ""),
        }
    }

    /// `address` and `detailAddress` joined by a space when both are present
    pub fn full_address(&self) -> String {
        if self.detail_address.is_empty() {
            self.address.clone()
        } else {
            format!("{} {}", self.address, self.detail_address)
        }
    }
}

/// One unit-size configuration with its current asking-price strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyeongVariant {
    pub pyeong_name: String,
    pub supply_area: String,
    pub exclusive_area: String,
    pub deal_price: String,
    pub lease_price: String,
    pub rent_price: String,
}

impl PyeongVariant {
    pub fn from_record(record: &Value) -> Self {
        let stats = record
            .get("articleStatistics")
            .cloned()
            .unwrap_or(Value::Null);

        Self {
            pyeong_name: text_or(record, "pyeongName", ""),
            supply_area: text_or(record, "supplyArea", ""),
            exclusive_area: text_or(record, "exclusiveArea", ""),
            deal_price: text_or(&stats, "dealPriceString", MISSING_PRICE),
            lease_price: text_or(&stats, "leasePriceString", MISSING_PRICE),
            rent_price: text_or(&stats, "rentPriceString", MISSING_PRICE),
        }
    }
}

/// A complex detail payload that passed the presence checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexListing {
    pub detail: ComplexDetail,
    pub variants: Vec<PyeongVariant>,
}

impl ComplexListing {
    /// Returns `None` unless the payload carries both a `complexDetail` object
    /// and a `complexPyeongDetailList` array
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let detail = payload.get("complexDetail").filter(|v| v.is_object())?;
        let variants = list(payload, "complexPyeongDetailList")?;

        Some(Self {
            detail: ComplexDetail::from_record(detail),
            variants: variants.iter().map(PyeongVariant::from_record).collect(),
        })
    }

    /// One row per variant, in variant order
    pub fn rows(&self) -> Vec<ListingRow> {
        self.variants
            .iter()
            .map(|variant| ListingRow::new(&self.detail, variant))
            .collect()
    }
}

/// Flattened export row: building fields repeated for every unit-size variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    #[serde(rename = "아파트명")]
    pub complex_name: String,
    #[serde(rename = "주소")]
    pub address: String,
    #[serde(rename = "총세대수")]
    pub total_household_count: String,
    #[serde(rename = "입주년월")]
    pub use_approve_ym: String,
    #[serde(rename = "평형")]
    pub pyeong_name: String,
    #[serde(rename = "공급면적 (㎡)")]
    pub supply_area: String,
    #[serde(rename = "전용면적 (㎡)")]
    pub exclusive_area: String,
    #[serde(rename = "매매호가")]
    pub deal_price: String,
    #[serde(rename = "전세호가")]
    pub lease_price: String,
    #[serde(rename = "월세호가")]
    pub rent_price: String,
}

impl ListingRow {
    pub fn new(detail: &ComplexDetail, variant: &PyeongVariant) -> Self {
        Self {
            complex_name: detail.complex_name.clone(),
            address: detail.full_address(),
            total_household_count: detail.total_household_count.clone(),
            use_approve_ym: detail.use_approve_ym.clone(),
            pyeong_name: variant.pyeong_name.clone(),
            supply_area: variant.supply_area.clone(),
            exclusive_area: variant.exclusive_area.clone(),
            deal_price: variant.deal_price.clone(),
            lease_price: variant.lease_price.clone(),
            rent_price: variant.rent_price.clone(),
        }
    }
}
