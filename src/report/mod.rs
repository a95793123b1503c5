pub mod console;
pub mod json;
pub mod svg;

pub use console::{print_diagnostics, print_sync_summary, print_totals, print_unclassified};
pub use json::{build_report, output_json};
pub use svg::{render_svg, write_svg};

use crate::model::LineTable;

/// Entries by count descending, ties broken by key so output is stable.
pub fn sorted_desc(table: &LineTable) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = table.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Fraction of `total` taken by `count`; the total is floored at 1.
pub fn share(count: u64, total: u64) -> f64 {
    count as f64 / total.max(1) as f64
}
