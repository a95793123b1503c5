pub mod command;

pub use command::{is_installed, run, CommandOutcome};

use std::path::Path;

const GIT: &str = "git";

pub fn git_available() -> bool {
    is_installed(GIT)
}

pub fn clone_mirror(url: &str, dest: &Path) -> CommandOutcome {
    let dest = dest.to_string_lossy();
    run::<&Path>(GIT, &["clone", "--mirror", url, dest.as_ref()], None)
}

/// Fetch every ref of an existing mirror from its remote.
pub fn remote_update(repo_path: &Path) -> CommandOutcome {
    run(GIT, &["remote", "update"], Some(repo_path))
}

/// Short names of all local branches. A failed listing yields no branches.
pub fn list_branches(repo_path: &Path) -> Vec<String> {
    run(
        GIT,
        &["for-each-ref", "--format=%(refname:short)", "refs/heads/"],
        Some(repo_path),
    )
    .into_output()
    .map(|out| {
        out.lines()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// Per-file line counts of every tracked text file in `branch`, one
/// `<branch>:<path>:<count>` line per file.
pub fn grep_counts(repo_path: &Path, branch: &str) -> CommandOutcome {
    run(GIT, &["grep", "-I", "-c", "", branch], Some(repo_path))
}
