use url::Url;

use crate::domain::{
    AppError, ArchiveConfig, DEFAULT_REPOSITORY_NAME, RawUrlBase, split_owner_repo,
};

/// Configuration with the repository coordinates resolved.
#[derive(Debug, Clone)]
pub struct ArchiveSettings {
    pub config: ArchiveConfig,
    pub owner: String,
    pub repo: String,
    pub raw: RawUrlBase,
}

impl ArchiveSettings {
    /// Fill missing owner/name from a detected `owner/repo` slug.
    ///
    /// Explicit configuration always wins. Without an owner from either
    /// source the raw URLs cannot be built.
    pub fn resolve(config: ArchiveConfig, detected: Option<&str>) -> Result<Self, AppError> {
        let detected = detected.and_then(split_owner_repo);

        let owner = config
            .repository
            .owner
            .clone()
            .or_else(|| detected.map(|(owner, _)| owner.to_string()))
            .ok_or_else(|| {
                AppError::config_error(
                    "repository.owner is not set in bntf-docs.toml and no GitHub remote was found",
                )
            })?;
        let repo = config
            .repository
            .name
            .clone()
            .or_else(|| detected.map(|(_, repo)| repo.to_string()))
            .unwrap_or_else(|| DEFAULT_REPOSITORY_NAME.to_string());

        let raw = RawUrlBase::new(
            &config.repository.raw_host,
            &owner,
            &repo,
            &config.repository.branch,
        )?;

        Ok(Self { config, owner, repo, raw })
    }

    pub fn branch(&self) -> &str {
        &self.config.repository.branch
    }

    pub fn index_file(&self) -> &str {
        &self.config.index.file
    }

    pub fn index_url(&self) -> Url {
        self.raw.index_url(&self.config.index.file)
    }

    pub fn dispatch_url(&self) -> Result<Url, AppError> {
        self.config.notify.dispatch_url(&self.owner)
    }
}
