//! Repository detection from the git remote.

use crate::domain::{parse_github_url, split_owner_repo};
use crate::ports::GitPort;

/// Detect `owner/repo` from a git remote or the `GITHUB_REPOSITORY` env var.
pub fn detect_repository<G: GitPort + ?Sized>(git: &G, remote: &str) -> Option<String> {
    if git.is_repository() {
        match git.remote_url(remote) {
            Ok(Some(url)) => match parse_github_url(&url) {
                Some(slug) => return Some(slug),
                None => log::debug!("Remote '{remote}' is not a GitHub URL: {url}"),
            },
            Ok(None) => log::debug!("Remote '{remote}' is not configured"),
            Err(e) => log::warn!("Could not read remote '{remote}': {e}"),
        }
    }

    std::env::var("GITHUB_REPOSITORY").ok().filter(|slug| split_owner_repo(slug).is_some())
}
