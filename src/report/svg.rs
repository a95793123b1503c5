use super::{share, sorted_desc};
use crate::languages::color_for;
use crate::model::LineTable;
use crate::util::{escape_xml, group_thousands};
use std::path::Path;

pub const WIDTH: u32 = 500;
const HEADER_HEIGHT: u32 = 50;
const BAR_HEIGHT: u32 = 25;
const GAP: u32 = 12;
const PADDING: u32 = 20;
const BAR_X: u32 = 110;
/// Horizontal space reserved for label and annotation.
const BAR_RESERVED: u32 = 160;
const MIN_BAR_WIDTH: f64 = 2.0;

const FONT_STACK: &str =
    r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif"#;

pub fn canvas_height(languages: usize) -> u32 {
    HEADER_HEIGHT + languages as u32 * (BAR_HEIGHT + GAP) + PADDING
}

/// Width of the colored bar for a share in `0.0..=1.0`. `None` means no bar is drawn.
pub fn bar_width(share: f64) -> Option<f64> {
    let width = f64::from(WIDTH - BAR_RESERVED) * share;
    if width > 0.0 {
        Some(width.max(MIN_BAR_WIDTH))
    } else {
        None
    }
}

pub fn render_svg(languages: &LineTable) -> String {
    let rows = sorted_desc(languages);
    let total: u64 = languages.values().sum();
    let height = canvas_height(rows.len());

    let mut svg = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" viewBox="0 0 {WIDTH} {height}">"#
        ),
        format!("<style>text {{ font-family: {FONT_STACK}; }}</style>"),
        format!(r#"<rect width="{WIDTH}" height="{height}" fill="white" rx="6" />"#),
        format!(
            r##"<text x="{PADDING}" y="30" font-weight="bold" font-size="18" fill="#24292e">Total Volume (All Branches)</text>"##
        ),
        format!(
            r##"<line x1="{PADDING}" y1="45" x2="{}" y2="45" stroke="#e1e4e8" stroke-width="1"/>"##,
            WIDTH - PADDING
        ),
    ];

    let mut y = HEADER_HEIGHT + 15;
    for (language, count) in rows {
        let pct = share(count, total);

        svg.push(format!(
            r##"<text x="{PADDING}" y="{}" font-size="12" fill="#24292e">{}</text>"##,
            y + 16,
            escape_xml(language)
        ));
        svg.push(format!(
            r##"<rect x="{BAR_X}" y="{y}" width="{}" height="12" fill="#f6f8fa" rx="3" />"##,
            WIDTH - 150
        ));
        if let Some(w) = bar_width(pct) {
            svg.push(format!(
                r#"<rect x="{BAR_X}" y="{y}" width="{w:.2}" height="12" fill="{}" rx="3" />"#,
                color_for(language)
            ));
        }
        svg.push(format!(
            r##"<text x="{}" y="{}" font-size="11" fill="#586069" text-anchor="end">{} ({:.1}%)</text>"##,
            WIDTH - PADDING,
            y + 11,
            group_thousands(count),
            pct * 100.0
        ));
        y += BAR_HEIGHT + GAP;
    }

    svg.push("</svg>\n".to_string());
    svg.join("\n")
}

/// Render and write the chart, replacing any previous file.
pub fn write_svg(languages: &LineTable, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_svg(languages))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u64)]) -> LineTable {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn bar_widths(svg: &str) -> Vec<f64> {
        svg.lines()
            .filter(|l| l.starts_with("<rect") && !l.contains("#f6f8fa") && !l.contains("white"))
            .filter_map(|l| {
                let start = l.find("width=\"")? + 7;
                let end = start + l[start..].find('"')?;
                l[start..end].parse().ok()
            })
            .collect()
    }

    #[test]
    fn two_languages_have_two_to_one_bars() {
        let svg = render_svg(&table(&[("Python", 100), ("Rust", 50)]));
        assert!(svg.contains("100 (66.7%)"));
        assert!(svg.contains("50 (33.3%)"));

        let widths = bar_widths(&svg);
        assert_eq!(widths.len(), 2);
        assert!((widths[0] / widths[1] - 2.0).abs() < 1e-3);
        // Python sorts first
        assert!(svg.find(">Python<").unwrap() < svg.find(">Rust<").unwrap());
    }

    #[test]
    fn empty_table_renders_minimal_document() {
        let svg = render_svg(&LineTable::new());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(&format!("height=\"{}\"", canvas_height(0))));
        assert!(bar_widths(&svg).is_empty());
    }

    #[test]
    fn tiny_and_zero_shares() {
        assert_eq!(bar_width(0.0), None);
        assert_eq!(bar_width(0.001), Some(MIN_BAR_WIDTH));
        assert_eq!(bar_width(1.0), Some(340.0));

        let svg = render_svg(&table(&[("Rust", 10), ("Go", 0)]));
        assert_eq!(bar_widths(&svg).len(), 1);
        assert!(svg.contains("0 (0.0%)"));
    }

    #[test]
    fn one_element_per_line() {
        let svg = render_svg(&table(&[("Rust", 3), ("Go", 1)]));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.lines().all(|l| l.starts_with('<')));
        assert_eq!(svg.lines().filter(|l| l.starts_with("<text")).count(), 1 + 2 * 2);
    }

    #[test]
    fn height_grows_per_language() {
        assert_eq!(canvas_height(0), 70);
        assert_eq!(canvas_height(3), 70 + 3 * 37);
    }

    #[test]
    fn unknown_language_uses_default_color_and_is_escaped() {
        let svg = render_svg(&table(&[("C++ <gen>", 5)]));
        assert!(svg.contains("C++ &lt;gen&gt;"));
        assert!(svg.contains(crate::languages::DEFAULT_COLOR));
    }
}
