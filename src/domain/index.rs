//! `pdf-index.json`: the catalog the mobile app fetches.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Document, RawUrlBase};

pub const DEFAULT_INDEX_FILE: &str = "pdf-index.json";
pub const DEFAULT_INDEX_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentIndex {
    pub last_updated: String,
    pub base_url: String,
    pub version: String,
    pub categories: BTreeMap<String, String>,
    pub category_icons: BTreeMap<String, String>,
    pub documents: BTreeMap<String, Vec<IndexEntry>>,
    pub statistics: IndexStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub name: String,
    pub filename: String,
    pub url: String,
    pub category: String,
    pub category_display_name: String,
    pub icon: String,
    pub size: u64,
    pub modified: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatistics {
    pub total_documents: usize,
    pub total_size: u64,
    pub category_counts: BTreeMap<String, usize>,
}

impl DocumentIndex {
    /// Build the index for the given documents. Every category is listed, even when empty.
    pub fn build(
        documents: &[Document],
        base: &RawUrlBase,
        version: &str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let mut categories = BTreeMap::new();
        let mut category_icons = BTreeMap::new();
        let mut grouped: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();

        for category in Category::ALL {
            categories.insert(category.dir_name().to_string(), category.display_name().to_string());
            category_icons.insert(category.dir_name().to_string(), category.icon().to_string());
            grouped.insert(category.dir_name().to_string(), Vec::new());
        }

        let mut statistics = IndexStatistics::default();
        for document in documents {
            let entry = IndexEntry::from_document(document, base);
            statistics.total_documents += 1;
            statistics.total_size += document.size;
            grouped.entry(entry.category.clone()).or_default().push(entry);
        }

        for (category, entries) in grouped.iter_mut() {
            entries.sort_by(|a, b| a.filename.cmp(&b.filename));
            statistics.category_counts.insert(category.clone(), entries.len());
        }

        Self {
            last_updated: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            base_url: base.base_url().to_string(),
            version: version.to_string(),
            categories,
            category_icons,
            documents: grouped,
            statistics,
        }
    }

    /// Take `modified` from `previous` for entries with the same file name, size and hash.
    ///
    /// Checkouts and clones rewrite mtimes; only content changes reach the published index.
    pub fn carry_forward_modified(&mut self, previous: &DocumentIndex) {
        for (category, entries) in self.documents.iter_mut() {
            let Some(committed) = previous.documents.get(category) else {
                continue;
            };
            for entry in entries.iter_mut() {
                if let Some(old) = committed.iter().find(|old| {
                    old.filename == entry.filename && old.size == entry.size && old.hash == entry.hash
                }) {
                    entry.modified = old.modified.clone();
                }
            }
        }
    }

    /// Equal in everything but the generation timestamp.
    pub fn is_equivalent(&self, other: &DocumentIndex) -> bool {
        self.base_url == other.base_url
            && self.version == other.version
            && self.categories == other.categories
            && self.category_icons == other.category_icons
            && self.documents == other.documents
            && self.statistics == other.statistics
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl IndexEntry {
    fn from_document(document: &Document, base: &RawUrlBase) -> Self {
        let category = document.key.category;
        Self {
            id: document.key.id().to_string(),
            name: document.key.name.stem().to_string(),
            filename: document.key.name.to_string(),
            url: base.document_url(&document.key).to_string(),
            category: category.dir_name().to_string(),
            category_display_name: category.display_name().to_string(),
            icon: category.icon().to_string(),
            size: document.size,
            modified: document.modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            hash: document.sha256.clone(),
        }
    }
}
