use super::{share, sorted_desc};
use crate::aggregate::Totals;
use crate::config::{Settings, UNCLASSIFIED_REPORT_LIMIT};
use crate::model::{ExtensionEntry, LanguageEntry, ReportOutput, SCHEMA_VERSION};
use chrono::Utc;

pub fn build_report(totals: &Totals, settings: &Settings) -> ReportOutput {
    let total_lines = totals.total_lines();

    let languages = sorted_desc(&totals.languages)
        .into_iter()
        .map(|(language, lines)| LanguageEntry {
            language: language.to_string(),
            lines,
            percent: (share(lines, total_lines) * 1000.0).round() / 10.0,
        })
        .collect();

    let unclassified = sorted_desc(&totals.unclassified)
        .into_iter()
        .take(UNCLASSIFIED_REPORT_LIMIT)
        .map(|(extension, lines)| ExtensionEntry {
            extension: extension.to_string(),
            lines,
        })
        .collect();

    ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        workspace: settings.workspace.to_string_lossy().to_string(),
        output_svg: settings.output.to_string_lossy().to_string(),
        total_lines,
        languages,
        unclassified,
        diagnostics: totals.diagnostics(),
    }
}

pub fn output_json(totals: &Totals, settings: &Settings) -> anyhow::Result<()> {
    let report = build_report(totals, settings);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RepoCounts;

    #[test]
    fn report_percentages_round_to_one_decimal() {
        let mut counts = RepoCounts::new();
        counts.add_language("Python", 100);
        counts.add_language("Rust", 50);
        counts.add_unclassified("xyz", 3);
        let mut totals = Totals::new();
        totals.merge(counts);

        let report = build_report(&totals, &Settings::default());
        assert_eq!(report.total_lines, 150);
        assert_eq!(report.languages[0].language, "Python");
        assert_eq!(report.languages[0].percent, 66.7);
        assert_eq!(report.languages[1].percent, 33.3);
        assert_eq!(report.unclassified[0].extension, "xyz");
        assert_eq!(report.diagnostics.repositories_counted, 1);
    }
}
