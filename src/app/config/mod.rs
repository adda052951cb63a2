//! Repository-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::config`; this module reads the file
//! through the store and fills in what the git remote knows.

mod detect_repository;
mod load_config;
mod settings;

pub use detect_repository::detect_repository;
pub use load_config::load_config;
pub use settings::ArchiveSettings;

use crate::domain::{AppError, ArchiveConfig};
use crate::ports::{DocumentStore, GitPort};

/// Load `bntf-docs.toml` and resolve the repository coordinates.
pub fn load_settings<S, G>(store: &S, git: &G) -> Result<ArchiveSettings, AppError>
where
    S: DocumentStore + ?Sized,
    G: GitPort + ?Sized,
{
    resolve_settings(load_config(store)?, git)
}

/// Resolve an already-loaded configuration, consulting git only for missing keys.
pub fn resolve_settings<G: GitPort + ?Sized>(
    config: ArchiveConfig,
    git: &G,
) -> Result<ArchiveSettings, AppError> {
    let detected = if config.repository.owner.is_none() || config.repository.name.is_none() {
        detect_repository(git, &config.sync.remote)
    } else {
        None
    };
    ArchiveSettings::resolve(config, detected.as_deref())
}
