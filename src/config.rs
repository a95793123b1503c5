use std::path::PathBuf;

pub const DEFAULT_WORKSPACE: &str = "./github_workspace";
pub const DEFAULT_OUTPUT_SVG: &str = "my_full_metrics.svg";
pub const DEFAULT_NETWORK_WORKERS: usize = 32;
pub const MIN_ANALYSIS_WORKERS: usize = 4;
pub const DEFAULT_REPO_LIMIT: usize = 3000;
pub const UNCLASSIFIED_REPORT_LIMIT: usize = 50;

pub fn default_analysis_workers() -> usize {
    num_cpus::get().max(MIN_ANALYSIS_WORKERS)
}

/// Resolved settings for a single run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub workspace: PathBuf,
    pub output: PathBuf,
    pub network_workers: usize,
    pub analysis_workers: usize,
    pub limit: usize,
    pub owner: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workspace: PathBuf::from(DEFAULT_WORKSPACE),
            output: PathBuf::from(DEFAULT_OUTPUT_SVG),
            network_workers: DEFAULT_NETWORK_WORKERS,
            analysis_workers: default_analysis_workers(),
            limit: DEFAULT_REPO_LIMIT,
            owner: None,
        }
    }
}
