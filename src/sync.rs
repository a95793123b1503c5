use crate::error::Result;
use crate::git;
use crate::model::{Repository, SyncSummary};
use crate::util::workspace_path;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Cloned,
    Updated,
    Failed,
}

/// Bring the local mirror of `repo` up to date, cloning it on first sight.
///
/// A failed update leaves the stale mirror in place; a failed clone leaves
/// nothing, so the repository simply contributes no lines later on.
pub fn sync_repository(repo: &Repository, root: &Path) -> SyncOutcome {
    let path = workspace_path(root, &repo.name);

    if path.exists() {
        if git::remote_update(&path).is_success() {
            debug!(repo = %repo.name, "updated mirror");
            SyncOutcome::Updated
        } else {
            warn!(repo = %repo.name, "mirror update failed, keeping stale copy");
            SyncOutcome::Failed
        }
    } else if git::clone_mirror(&repo.clone_url, &path).is_success() {
        debug!(repo = %repo.name, "cloned mirror");
        SyncOutcome::Cloned
    } else {
        warn!(repo = %repo.name, url = %repo.clone_url, "mirror clone failed");
        SyncOutcome::Failed
    }
}

/// Synchronize every repository on a dedicated pool of `workers` threads.
///
/// Returns only after every submitted synchronization has finished.
pub fn sync_all(
    repos: &[Repository],
    root: &Path,
    workers: usize,
    progress: &ProgressBar,
) -> Result<SyncSummary> {
    std::fs::create_dir_all(root)?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("orgloc-sync-{i}"))
        .build()?;

    let outcomes: Vec<SyncOutcome> = pool.install(|| {
        repos
            .par_iter()
            .map(|repo| {
                progress.set_message(repo.name.clone());
                let outcome = sync_repository(repo, root);
                progress.inc(1);
                outcome
            })
            .collect()
    });

    let mut summary = SyncSummary::default();
    for outcome in outcomes {
        match outcome {
            SyncOutcome::Cloned => summary.cloned += 1,
            SyncOutcome::Updated => summary.updated += 1,
            SyncOutcome::Failed => summary.failed += 1,
        }
    }
    Ok(summary)
}
