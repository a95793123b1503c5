use crate::error::{OrglocError, Result};
use crate::git::{is_installed, run};
use crate::model::Repository;
use std::path::Path;
use tracing::info;

const GH: &str = "gh";

pub fn gh_available() -> bool {
    is_installed(GH)
}

/// List repositories of the authenticated account, or of `owner` when given.
///
/// Single attempt: credentials must already be set up with `gh auth login`.
pub fn list_repositories(owner: Option<&str>, limit: usize) -> Result<Vec<Repository>> {
    if !gh_available() {
        return Err(OrglocError::ToolMissing("GitHub CLI (gh)".to_string()));
    }

    let limit = limit.to_string();
    let mut args = vec!["repo", "list"];
    if let Some(owner) = owner {
        args.push(owner);
    }
    args.extend(["--limit", limit.as_str(), "--json", "name,sshUrl"]);

    let output = run::<&Path>(GH, &args, None).into_output().ok_or_else(|| {
        OrglocError::Listing("gh repo list failed; ensure 'gh auth login' is done".to_string())
    })?;

    let repos = parse_repository_list(&output)?;
    info!(count = repos.len(), "listed repositories");
    Ok(repos)
}

pub fn parse_repository_list(json: &str) -> Result<Vec<Repository>> {
    if json.trim().is_empty() {
        return Err(OrglocError::Listing("gh returned no data".to_string()));
    }
    Ok(serde_json::from_str(json)?)
}
