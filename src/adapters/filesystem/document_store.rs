//! `DocumentStore` implementation for `FilesystemDocumentStore`.

use std::fs;

use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::ports::{DocumentStore, EntryMetadata};

use super::FilesystemDocumentStore;

impl FilesystemDocumentStore {
    /// UTF-8 names and lossily decoded non-UTF-8 names, each sorted.
    fn read_entries(&self, path: &str) -> Result<(Vec<String>, Vec<String>), AppError> {
        let full_path = self.resolve(path)?;
        let mut names = Vec::new();
        let mut undecodable = Vec::new();
        for entry in fs::read_dir(&full_path)? {
            let name = entry?.file_name();
            match name.to_str() {
                Some(name) => names.push(name.to_string()),
                None => {
                    log::debug!("Non UTF-8 entry {:?} in {}", name, full_path.display());
                    undecodable.push(name.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        undecodable.sort();
        Ok((names, undecodable))
    }
}

impl DocumentStore for FilesystemDocumentStore {
    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        Ok(self.read_entries(path)?.0)
    }

    fn undecodable_entries(&self, path: &str) -> Result<Vec<String>, AppError> {
        Ok(self.read_entries(path)?.1)
    }

    fn metadata(&self, path: &str) -> Result<EntryMetadata, AppError> {
        let full_path = self.resolve(path)?;
        let metadata = fs::metadata(full_path)?;
        let modified: DateTime<Utc> = metadata.modified()?.into();
        Ok(EntryMetadata { is_dir: metadata.is_dir(), size: metadata.len(), modified })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|full_path| full_path.exists()).unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).map(|full_path| full_path.is_dir()).unwrap_or(false)
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let full_path = self.resolve(path)?;
        fs::read(full_path).map_err(AppError::from)
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::debug!("Writing {} ({} bytes)", full_path.display(), content.len());
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        log::debug!("Removing {}", full_path.display());
        fs::remove_file(full_path).map_err(AppError::from)
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }
}
