//! Git integration adapter
//!
//! Discovers the repository under check with `git2` and fills in what the
//! directory tree alone cannot tell: the repository name from the `origin`
//! remote and the default branch.

use std::path::Path;

use git2::Repository;

use crate::core::models::RepoInfo;
use crate::repo;

/// Build repository info for `path`
///
/// If `path` is inside a git work tree, the work tree root is scanned and
/// git metadata is attached. Otherwise `path` itself is scanned.
///
/// # Errors
///
/// Returns an error if the directory cannot be scanned.
pub fn discover(path: &Path) -> anyhow::Result<RepoInfo> {
    let git = match Repository::discover(path) {
        Ok(git) => git,
        Err(e) => {
            log::debug!("{} is not inside a git repository: {}", path.display(), e.message());
            return Ok(repo::scan(path)?);
        },
    };

    let root = git.workdir().unwrap_or(path);
    let mut info = repo::scan(root)?;

    if let Some(name) = remote_repo_name(&git) {
        info = info.with_name(name);
    }
    if let Some(branch) = default_branch(&git) {
        info = info.with_default_branch(branch);
    }

    Ok(info)
}

/// Repository name from the `origin` remote URL
fn remote_repo_name(git: &Repository) -> Option<String> {
    let remote = git.find_remote("origin").ok()?;
    remote.url().and_then(repo_name_from_url)
}

/// Default branch: what `origin/HEAD` points at, else the local HEAD branch
fn default_branch(git: &Repository) -> Option<String> {
    let symbolic = |name: &str, prefix: &str| {
        git.find_reference(name)
            .ok()
            .and_then(|r| r.symbolic_target().map(str::to_string))
            .and_then(|target| target.strip_prefix(prefix).map(str::to_string))
    };

    symbolic("refs/remotes/origin/HEAD", "refs/remotes/origin/")
        .or_else(|| symbolic("HEAD", "refs/heads/"))
}

/// Extract a repository name from a remote URL
///
/// `https://github.com/user/repo.git` -> `repo`,
/// `git@github.com:user/repo.git` -> `repo`
#[must_use]
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let last = url.trim().trim_end_matches('/').rsplit(['/', ':']).next()?;
    let name = last.trim_end_matches(".git");
    (!name.is_empty()).then(|| name.to_string())
}
