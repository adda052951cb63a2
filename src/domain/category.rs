use std::fmt;

use super::AppError;

/// Top-level archive folders. Each is a flat container of PDF files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Meeting minutes and protocols.
    Protokoller,
    /// Union statutes.
    Vedtekter,
    /// Agreements with employers, including the main and special agreements.
    Agreements,
    /// Internal policies.
    Policies,
    /// The collective bargaining agreement.
    Overenskomsten,
    /// Everything else.
    Other,
}

impl Category {
    /// All categories in README order.
    pub const ALL: [Category; 6] = [
        Category::Protokoller,
        Category::Vedtekter,
        Category::Agreements,
        Category::Policies,
        Category::Overenskomsten,
        Category::Other,
    ];

    /// Folder name for this category (case-sensitive).
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Protokoller => "Protokoller",
            Category::Vedtekter => "Vedtekter",
            Category::Agreements => "Agreements",
            Category::Policies => "Policies",
            Category::Overenskomsten => "Overenskomsten",
            Category::Other => "Other",
        }
    }

    /// Label shown by the app.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Protokoller => "Protokoller",
            Category::Vedtekter => "Vedtekter",
            Category::Agreements => "Agreements",
            Category::Policies => "Policies",
            Category::Overenskomsten => "Overenskomsten",
            Category::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Protokoller => "📋",
            Category::Vedtekter => "📜",
            Category::Agreements => "🏢",
            Category::Policies => "📑",
            Category::Overenskomsten => "📄",
            Category::Other => "📁",
        }
    }

    /// Match a folder name exactly.
    pub fn from_dir_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.dir_name() == name)
    }

    /// Match a folder name ignoring case.
    pub fn from_dir_name_ignore_case(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.dir_name().eq_ignore_ascii_case(name))
    }

    /// Parse user input into a category.
    pub fn parse(input: &str) -> Result<Category, AppError> {
        Category::from_dir_name_ignore_case(input.trim())
            .ok_or_else(|| AppError::InvalidCategory(input.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
