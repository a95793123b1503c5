use super::sorted_desc;
use crate::aggregate::Totals;
use crate::config::UNCLASSIFIED_REPORT_LIMIT;
use crate::model::{LineTable, SyncSummary};
use crate::util::group_thousands;
use console::style;

pub fn print_totals(languages: &LineTable) {
    println!("\n{}", style("=== FINAL TOTALS (ALL BRANCHES) ===").bold());
    if languages.is_empty() {
        println!("No lines counted");
        return;
    }
    for (language, count) in sorted_desc(languages) {
        println!("{:<15}: {:>12}", language, group_thousands(count));
    }
}

/// Extensions neither classified nor ignored. Diagnostic only, never charted.
pub fn print_unclassified(unclassified: &LineTable) {
    if unclassified.is_empty() {
        return;
    }
    println!(
        "\n{}",
        style(format!(
            "=== EXCLUDED: top {UNCLASSIFIED_REPORT_LIMIT} unclassified extensions ==="
        ))
        .dim()
    );
    for (ext, count) in sorted_desc(unclassified).into_iter().take(UNCLASSIFIED_REPORT_LIMIT) {
        println!("{:<15}: {:>12}", ext, group_thousands(count));
    }
    if unclassified.len() > UNCLASSIFIED_REPORT_LIMIT {
        println!("... and {} more", unclassified.len() - UNCLASSIFIED_REPORT_LIMIT);
    }
}

pub fn print_sync_summary(summary: &SyncSummary) {
    println!(
        "Mirrors: {} cloned, {} updated, {} failed",
        style(summary.cloned).green(),
        style(summary.updated).cyan(),
        style(summary.failed).red()
    );
}

pub fn print_diagnostics(totals: &Totals) {
    if totals.repositories_failed == 0 && totals.unparsed_lines == 0 {
        return;
    }
    println!(
        "\n{} {} repositories dropped, {} unparseable grep lines skipped",
        style("Dropped:").yellow(),
        totals.repositories_failed,
        totals.unparsed_lines
    );
}
