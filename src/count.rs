use crate::git;
use crate::languages::{classify, Classification};
use crate::model::RepoCounts;
use std::path::Path;
use tracing::{debug, trace};

/// Split a `git grep -c` line of the form `<branch>:<path>:<count>`.
///
/// The count is taken after the last `:` so that colons inside the branch
/// name or the path survive. Lines that do not start with `<branch>:` or
/// whose count is not an integer yield `None`.
pub fn parse_grep_line<'a>(line: &'a str, branch: &str) -> Option<(&'a str, u64)> {
    let (rest, count) = line.rsplit_once(':')?;
    let count = count.trim().parse::<u64>().ok()?;
    let path = rest.strip_prefix(branch)?.strip_prefix(':')?;
    Some((path.trim_matches('"'), count))
}

/// Fold one branch's grep output into `counts`.
pub fn tally_grep_output(output: &str, branch: &str, counts: &mut RepoCounts) {
    for line in output.lines().filter(|l| !l.is_empty()) {
        let Some((path, lines)) = parse_grep_line(line, branch) else {
            trace!(branch, line, "skipping unparseable grep line");
            counts.unparsed_lines += 1;
            continue;
        };

        match classify(path) {
            Classification::Language(language) => counts.add_language(language, lines),
            Classification::Unclassified(ext) => counts.add_unclassified(&ext, lines),
            Classification::ExcludedPath | Classification::IgnoredExtension => {}
        }
    }
}

/// Count lines per language across every local branch of the mirror at `repo_path`.
///
/// A missing mirror or one without branches contributes nothing.
pub fn count_repository(repo_path: &Path) -> RepoCounts {
    let mut counts = RepoCounts::new();
    if !repo_path.exists() {
        debug!(path = %repo_path.display(), "no local mirror, skipping");
        return counts;
    }

    for branch in git::list_branches(repo_path) {
        if let Some(output) = git::grep_counts(repo_path, &branch).into_output() {
            tally_grep_output(&output, &branch, &mut counts);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_simple_line() {
        assert_eq!(parse_grep_line("main:src/lib.rs:42", "main"), Some(("src/lib.rs", 42)));
    }

    #[test]
    fn colons_in_path_and_branch_are_preserved() {
        assert_eq!(
            parse_grep_line("main:docs/a:b:c.md:7", "main"),
            Some(("docs/a:b:c.md", 7))
        );
        assert_eq!(
            parse_grep_line("release:v1:src/x.py:3", "release:v1"),
            Some(("src/x.py", 3))
        );
    }

    #[test]
    fn rejects_foreign_prefix_and_bad_count() {
        assert_eq!(parse_grep_line("other:src/lib.rs:42", "main"), None);
        assert_eq!(parse_grep_line("mainline:src/lib.rs:42", "main"), None);
        assert_eq!(parse_grep_line("main:src/lib.rs:many", "main"), None);
        assert_eq!(parse_grep_line("main:src/lib.rs:-3", "main"), None);
        assert_eq!(parse_grep_line("no separators", "main"), None);
    }

    #[test]
    fn strips_surrounding_quotes() {
        assert_eq!(
            parse_grep_line("main:\"src/we ird.rs\":5", "main"),
            Some(("src/we ird.rs", 5))
        );
    }

    #[test]
    fn tally_routes_each_classification() {
        let output = "\
feat:src/main.rs:100
feat:CMakeLists.txt:20
feat:web/node_modules/left-pad/index.js:999
feat:assets/logo.svg:300
feat:data/blob.xyz:8
feat:README:2
feat:src/lib.rs:50
garbage line
feat:src/bad.rs:NaN";

        let mut counts = RepoCounts::new();
        tally_grep_output(output, "feat", &mut counts);

        assert_eq!(counts.languages.get("Rust"), Some(&150));
        assert_eq!(counts.languages.get("CMake"), Some(&20));
        assert_eq!(counts.languages.get("JavaScript"), None);
        assert_eq!(counts.languages.len(), 2);
        assert_eq!(counts.unclassified.get("xyz"), Some(&8));
        assert_eq!(counts.unclassified.get("(none)"), Some(&2));
        assert_eq!(counts.unclassified.get("svg"), None);
        assert_eq!(counts.unparsed_lines, 2);
    }

    #[test]
    fn missing_mirror_counts_nothing() {
        let counts = count_repository(Path::new("/nonexistent/orgloc/repo.git"));
        assert!(counts.is_empty());
        assert_eq!(counts.unparsed_lines, 0);
    }
}
