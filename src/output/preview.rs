use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::api::types::ListingRow;

const HEADERS: [&str; 10] = [
    "아파트명",
    "주소",
    "총세대수",
    "입주년월",
    "평형",
    "공급면적 (㎡)",
    "전용면적 (㎡)",
    "매매호가",
    "전세호가",
    "월세호가",
];

/// Table of the first `limit` rows, printed after an export
pub fn render_preview(rows: &[ListingRow], limit: usize) -> String {
    let mut table = Table::new();
    table.set_header(
        HEADERS
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );

    for row in rows.iter().take(limit) {
        table.add_row(vec![
            Cell::new(truncate_string(&row.complex_name, 20)),
            Cell::new(truncate_string(&row.address, 30)),
            Cell::new(&row.total_household_count),
            Cell::new(&row.use_approve_ym),
            Cell::new(&row.pyeong_name),
            Cell::new(&row.supply_area),
            Cell::new(&row.exclusive_area),
            Cell::new(&row.deal_price),
            Cell::new(&row.lease_price),
            Cell::new(&row.rent_price),
        ]);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut result = String::new();
    result.push_str(&format!(
        "\n--- 수집된 아파트 정보 --- {} Rows: {}\n\n",
        "📊".cyan(),
        rows.len().to_string().yellow()
    ));
    result.push_str(&table.to_string());
    result
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
