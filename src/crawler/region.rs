use log::{debug, warn};

use super::RegionQuery;
use crate::api::types::{parse_region_list, RegionLevel, RegionNode, ROOT_CORTAR_NO};
use crate::api::{Endpoint, LandApi};
use crate::error::{CrawlError, Result};

/// Codes resolved for the three levels of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegion {
    pub province: RegionNode,
    pub district: RegionNode,
    pub neighborhood: RegionNode,
}

/// First node whose name equals `name` exactly
pub fn find_region<'a>(nodes: &'a [RegionNode], name: &str) -> Option<&'a RegionNode> {
    nodes.iter().find(|node| node.name == name)
}

/// Child regions of `parent_code`; a failed fetch reads as an empty list
pub async fn child_regions(api: &dyn LandApi, parent_code: &str) -> Vec<RegionNode> {
    match api.fetch(&Endpoint::regions(parent_code)).await {
        Ok(payload) => parse_region_list(&payload),
        Err(e) => {
            warn!("Failed to fetch regions under {}: {}", parent_code, e);
            Vec::new()
        }
    }
}

/// Resolve one level by name under `parent_code`
pub async fn resolve(
    api: &dyn LandApi,
    level: RegionLevel,
    name: &str,
    parent_code: &str,
) -> Result<RegionNode> {
    let children = child_regions(api, parent_code).await;
    debug!(
        "{} candidates for {} under {}",
        children.len(),
        level,
        parent_code
    );

    find_region(&children, name)
        .cloned()
        .ok_or_else(|| CrawlError::RegionNotFound {
            level,
            name: name.to_string(),
        })
}

/// Walk province, district and neighborhood in order
pub async fn resolve_path(api: &dyn LandApi, query: &RegionQuery) -> Result<ResolvedRegion> {
    let province = resolve(api, RegionLevel::Province, &query.province, ROOT_CORTAR_NO).await?;
    let district = resolve(api, RegionLevel::District, &query.district, &province.code).await?;
    let neighborhood = resolve(
        api,
        RegionLevel::Neighborhood,
        &query.neighborhood,
        &district.code,
    )
    .await?;

    Ok(ResolvedRegion {
        province,
        district,
        neighborhood,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::testing::StaticApi;
    use serde_json::json;

    fn nodes() -> Vec<RegionNode> {
        vec![
            RegionNode::new("1168010100", "개포동"),
            RegionNode::new("1168010300", "개포동"),
            RegionNode::new("1168010600", "대치동"),
        ]
    }

    #[test]
    fn test_find_region_first_match_wins() {
        let nodes = nodes();
        assert_eq!(find_region(&nodes, "개포동").unwrap().code, "1168010100");
        assert_eq!(find_region(&nodes, "대치동").unwrap().code, "1168010600");
    }

    #[test]
    fn test_find_region_is_exact() {
        let nodes = nodes();
        assert!(find_region(&nodes, "개포").is_none());
        assert!(find_region(&nodes, " 개포동").is_none());
        assert!(find_region(&[], "개포동").is_none());
    }

    #[tokio::test]
    async fn test_resolve_uses_parent_code() {
        let api = StaticApi::new().with(
            Endpoint::regions("11"),
            json!({"regionList": [{"cortarNo": "1168", "cortarName": "강남구"}]}),
        );

        let node = resolve(&api, RegionLevel::District, "강남구", "11")
            .await
            .unwrap();
        assert_eq!(node, RegionNode::new("1168", "강남구"));
        assert_eq!(api.requests(), vec![Endpoint::regions("11")]);
    }

    #[tokio::test]
    async fn test_resolve_fetch_failure_is_not_found() {
        let api = StaticApi::new();

        let err = resolve(&api, RegionLevel::Province, "서울특별시", ROOT_CORTAR_NO)
            .await
            .unwrap_err();
        match err {
            CrawlError::RegionNotFound { level, name } => {
                assert_eq!(level, RegionLevel::Province);
                assert_eq!(name, "서울특별시");
            }
            other => panic!("Expected RegionNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_path_stops_at_missing_district() {
        let api = StaticApi::new().with(
            Endpoint::regions(ROOT_CORTAR_NO),
            json!({"regionList": [{"cortarNo": "11", "cortarName": "서울특별시"}]}),
        );
        let query = RegionQuery::new("서울특별시", "강남구", "개포동");

        let err = resolve_path(&api, &query).await.unwrap_err();
        assert!(matches!(
            err,
            CrawlError::RegionNotFound { level: RegionLevel::District, .. }
        ));
        assert_eq!(
            api.requests(),
            vec![Endpoint::regions(ROOT_CORTAR_NO), Endpoint::regions("11")]
        );
    }
}
