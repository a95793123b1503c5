use crate::aggregate::{analyze_all, Totals};
use crate::config::Settings;
use crate::error::{OrglocError, Result};
use crate::git::git_available;
use crate::github::list_repositories;
use crate::model::{Repository, SyncSummary};
use crate::report;
use crate::sync::sync_all;
use crate::util::workspace_path;
use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

fn phase_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

fn require_git() -> Result<()> {
    if git_available() {
        Ok(())
    } else {
        Err(OrglocError::ToolMissing("git".to_string()))
    }
}

/// Mirror directories already present under `root`, sorted by name.
pub fn discover_mirrors(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut mirrors = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .and_then(|s| s.strip_suffix(".git"))
            .map(String::from);
        if let Some(name) = name {
            mirrors.push((name, path));
        }
    }
    mirrors.sort();
    Ok(mirrors)
}

pub fn mirror_paths(repos: &[Repository], root: &Path) -> Vec<(String, PathBuf)> {
    repos
        .iter()
        .map(|r| (r.name.clone(), workspace_path(root, &r.name)))
        .collect()
}

fn sync_phase(repos: &[Repository], settings: &Settings, quiet: bool) -> anyhow::Result<SyncSummary> {
    if !quiet {
        println!(
            "Mirroring {} repositories (workers: {})...",
            repos.len(),
            settings.network_workers
        );
    }
    let pb = phase_bar(repos.len(), quiet);
    let summary = sync_all(repos, &settings.workspace, settings.network_workers, &pb)
        .context("Failed to synchronize mirrors")?;
    pb.finish_and_clear();
    info!(?summary, "sync phase complete");
    if !quiet {
        report::print_sync_summary(&summary);
    }
    Ok(summary)
}

fn count_phase(
    mirrors: Vec<(String, PathBuf)>,
    settings: &Settings,
    quiet: bool,
) -> anyhow::Result<Totals> {
    if !quiet {
        println!(
            "Analyzing all branches of {} repositories (workers: {})...",
            mirrors.len(),
            settings.analysis_workers
        );
    }
    let pb = phase_bar(mirrors.len(), quiet);
    let totals = analyze_all(mirrors, settings.analysis_workers, &pb)
        .context("Failed to analyze mirrors")?;
    pb.finish_and_clear();
    info!(
        counted = totals.repositories_counted,
        failed = totals.repositories_failed,
        "count phase complete"
    );
    Ok(totals)
}

fn finish(totals: &Totals, settings: &Settings, json: bool) -> anyhow::Result<()> {
    report::write_svg(&totals.languages, &settings.output)
        .with_context(|| format!("Failed to write {}", settings.output.display()))?;

    if json {
        return report::output_json(totals, settings);
    }

    report::print_totals(&totals.languages);
    report::print_unclassified(&totals.unclassified);
    report::print_diagnostics(totals);

    let saved = std::fs::canonicalize(&settings.output).unwrap_or_else(|_| settings.output.clone());
    println!("\n{} Saved to {}", style("Done!").green().bold(), saved.display());
    Ok(())
}

fn list_phase(settings: &Settings, quiet: bool) -> anyhow::Result<Vec<Repository>> {
    require_git().context("git is required")?;
    if !quiet {
        println!("Fetching repository list via GitHub CLI...");
    }
    let repos = list_repositories(settings.owner.as_deref(), settings.limit)
        .context("Failed to list repositories")?;
    if !quiet {
        println!("Found {} repositories.", style(repos.len()).cyan());
    }
    Ok(repos)
}

/// List, mirror, count and report.
pub fn exec_run(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let repos = list_phase(settings, json)?;
    sync_phase(&repos, settings, json)?;
    let totals = count_phase(mirror_paths(&repos, &settings.workspace), settings, json)?;
    finish(&totals, settings, json)
}

pub fn exec_sync(settings: &Settings) -> anyhow::Result<()> {
    let repos = list_phase(settings, false)?;
    sync_phase(&repos, settings, false)?;
    Ok(())
}

/// Count whatever mirrors already exist in the workspace, without listing or syncing.
pub fn exec_count(settings: &Settings, json: bool) -> anyhow::Result<()> {
    require_git().context("git is required")?;
    let mirrors = discover_mirrors(&settings.workspace)
        .with_context(|| format!("Failed to read workspace {}", settings.workspace.display()))?;
    let totals = count_phase(mirrors, settings, json)?;
    finish(&totals, settings, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn discovers_only_git_directories() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("beta.git")).unwrap();
        std::fs::create_dir(dir.path().join("alpha.git")).unwrap();
        std::fs::create_dir(dir.path().join("scratch")).unwrap();
        std::fs::write(dir.path().join("loose.git"), "").unwrap();

        let names: Vec<String> = discover_mirrors(dir.path())
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn missing_workspace_has_no_mirrors() {
        assert!(discover_mirrors(Path::new("/nonexistent/orgloc-ws")).unwrap().is_empty());
    }

    #[test]
    fn mirror_paths_follow_workspace_layout() {
        let repos = vec![Repository::new("a", "url")];
        assert_eq!(
            mirror_paths(&repos, Path::new("ws")),
            vec![("a".to_string(), Path::new("ws").join("a.git"))]
        );
    }
}
