//! Pure parse/validate for archive configuration (`bntf-docs.toml`).

use crate::domain::{AppError, ArchiveConfig};

/// Parse and validate archive configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ArchiveConfig, AppError> {
    let config: ArchiveConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a GitHub remote URL to extract `owner/repo`.
///
/// Supports SSH (`git@github.com:owner/repo.git`) and
/// HTTPS (`https://github.com/owner/repo.git`) formats.
pub fn parse_github_url(url: &str) -> Option<String> {
    let url = url.trim();

    // SSH: git@github.com:owner/repo.git
    if let Some(rest) = url.strip_prefix("git@github.com:") {
        return owner_repo(rest);
    }

    // HTTPS: https://github.com/owner/repo.git, optionally with credentials.
    if let Some(rest) = url.strip_prefix("https://") {
        let host_and_path = rest.rsplit_once('@').map(|(_, tail)| tail).unwrap_or(rest);
        if let Some(path) = host_and_path.strip_prefix("github.com/") {
            return owner_repo(path);
        }
    }

    None
}

/// Split an `owner/repo` pair out of [`parse_github_url`] output.
pub fn split_owner_repo(slug: &str) -> Option<(&str, &str)> {
    let (owner, repo) = slug.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner, repo))
}

fn owner_repo(path: &str) -> Option<String> {
    let repo = path.trim_end_matches('/').trim_end_matches(".git");
    split_owner_repo(repo).map(|_| repo.to_string())
}
