//! Repository-relative locations of the files the archive is made of.

use crate::domain::{Category, DocumentKey};

/// `bntf-docs.toml`
pub const CONFIG_FILE: &str = "bntf-docs.toml";

/// `README.md`
pub const README_FILE: &str = "README.md";

/// Placeholder that keeps an empty category folder in git.
pub const KEEP_FILE: &str = ".gitkeep";

/// `<category>/`
pub fn category_dir(category: Category) -> &'static str {
    category.dir_name()
}

/// `<category>/.gitkeep`
pub fn keep_file(category: Category) -> String {
    format!("{}/{}", category.dir_name(), KEEP_FILE)
}

/// `<category>/<filename>`
pub fn document(key: &DocumentKey) -> String {
    key.relative_path()
}
