use std::path::{Path, PathBuf};

use crate::app::config::{self, ArchiveSettings};
use crate::domain::AppError;
use crate::ports::{DocumentStore, GitPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DocumentStore, G: GitPort> {
    root: PathBuf,
    store: S,
    git: G,
}

impl<S: DocumentStore, G: GitPort> AppContext<S, G> {
    /// Create a new application context.
    pub fn new(root: PathBuf, store: S, git: G) -> Self {
        Self { root, store, git }
    }

    /// Archive root, for messages.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a reference to the working tree store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    /// Load `bntf-docs.toml` and resolve the repository coordinates.
    pub fn settings(&self) -> Result<ArchiveSettings, AppError> {
        config::load_settings(&self.store, &self.git)
    }
}
