use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::AppError;
use crate::ports::{DocumentStore, EntryMetadata};

#[derive(Debug, Clone)]
struct MemoryFile {
    content: Vec<u8>,
    modified: DateTime<Utc>,
}

/// In-memory working tree for testing.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    files: Mutex<BTreeMap<String, MemoryFile>>,
    dirs: Mutex<BTreeSet<String>>,
    /// Lossy names of non-UTF-8 entries, keyed by directory.
    undecodable: Mutex<BTreeMap<String, BTreeSet<String>>>,
}

/// Timestamp every file written through the memory store carries.
pub fn fixed_mtime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        self.write_bytes(path, content).unwrap();
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.create_dir_all(path).unwrap();
        self
    }

    /// Record an entry whose on-disk name is not valid UTF-8.
    pub fn with_undecodable(self, dir: &str, lossy_name: &str) -> Self {
        self.create_dir_all(dir).unwrap();
        self.undecodable
            .lock()
            .unwrap()
            .entry(dir.to_string())
            .or_default()
            .insert(lossy_name.to_string());
        self
    }

    /// Change the modification time of an existing file, keeping its content.
    pub fn touch(&self, path: &str, modified: DateTime<Utc>) {
        self.files.lock().unwrap().get_mut(path).expect("file to touch must exist").modified =
            modified;
    }

    /// A tree with every category folder present.
    pub fn with_categories(self) -> Self {
        for category in crate::domain::Category::ALL {
            self.create_dir_all(category.dir_name()).unwrap();
        }
        self
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).map(|file| file.content.clone())
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.file(path).map(|content| String::from_utf8(content).unwrap())
    }

    fn clean(path: &str) -> Result<String, AppError> {
        if path.starts_with('/') || path.split('/').any(|segment| segment == "..") {
            return Err(AppError::PathTraversal(path.to_string()));
        }
        Ok(path.trim_end_matches('/').to_string())
    }

    fn add_parents(&self, path: &str) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = String::new();
        let segments: Vec<&str> = path.split('/').collect();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            dirs.insert(current.clone());
        }
    }
}

fn not_found(path: &str) -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("{path} not found")))
}

impl DocumentStore for MemoryDocumentStore {
    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        let path = Self::clean(path)?;
        if !self.is_dir(&path) {
            return Err(not_found(&path));
        }
        let prefix = if path.is_empty() { String::new() } else { format!("{path}/") };

        let files = self.files.lock().unwrap();
        let dirs = self.dirs.lock().unwrap();
        let names: BTreeSet<String> = files
            .keys()
            .chain(dirs.iter())
            .filter_map(|entry| entry.strip_prefix(&prefix))
            .filter_map(|rest| rest.split('/').next())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Ok(names.into_iter().collect())
    }

    fn undecodable_entries(&self, path: &str) -> Result<Vec<String>, AppError> {
        let path = Self::clean(path)?;
        if !self.is_dir(&path) {
            return Err(not_found(&path));
        }
        let undecodable = self.undecodable.lock().unwrap();
        Ok(undecodable.get(&path).map(|names| names.iter().cloned().collect()).unwrap_or_default())
    }

    fn metadata(&self, path: &str) -> Result<EntryMetadata, AppError> {
        let path = Self::clean(path)?;
        if let Some(file) = self.files.lock().unwrap().get(&path) {
            return Ok(EntryMetadata {
                is_dir: false,
                size: file.content.len() as u64,
                modified: file.modified,
            });
        }
        if self.is_dir(&path) {
            return Ok(EntryMetadata { is_dir: true, size: 0, modified: fixed_mtime() });
        }
        Err(not_found(&path))
    }

    fn exists(&self, path: &str) -> bool {
        let Ok(path) = Self::clean(path) else {
            return false;
        };
        self.files.lock().unwrap().contains_key(&path) || self.is_dir(&path)
    }

    fn is_dir(&self, path: &str) -> bool {
        let Ok(path) = Self::clean(path) else {
            return false;
        };
        path.is_empty() || self.dirs.lock().unwrap().contains(&path)
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let path = Self::clean(path)?;
        self.files
            .lock()
            .unwrap()
            .get(&path)
            .map(|file| file.content.clone())
            .ok_or_else(|| not_found(&path))
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        let path = Self::clean(path)?;
        self.add_parents(&path);
        self.files
            .lock()
            .unwrap()
            .insert(path, MemoryFile { content: content.to_vec(), modified: fixed_mtime() });
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        let path = Self::clean(path)?;
        self.files.lock().unwrap().remove(&path).map(|_| ()).ok_or_else(|| not_found(&path))
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let path = Self::clean(path)?;
        if path.is_empty() {
            return Ok(());
        }
        self.add_parents(&path);
        self.dirs.lock().unwrap().insert(path);
        Ok(())
    }
}
