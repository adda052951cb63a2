//! Archive configuration loading from the repository root.

use crate::domain::config::paths::CONFIG_FILE;
use crate::domain::{AppError, ArchiveConfig, parse_config_content};
use crate::ports::DocumentStore;

/// Load and parse `bntf-docs.toml`. A missing file means all defaults.
pub fn load_config<S: DocumentStore + ?Sized>(store: &S) -> Result<ArchiveConfig, AppError> {
    if !store.exists(CONFIG_FILE) {
        log::debug!("{CONFIG_FILE} not found, using default configuration");
        return Ok(ArchiveConfig::default());
    }

    let content = store.read_text(CONFIG_FILE)?;
    parse_config_content(&content)
}
