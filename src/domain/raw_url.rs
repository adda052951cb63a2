//! Raw-content URL convention:
//! `<host>/<owner>/<repo>/<branch>/<category>/<filename>.pdf`.

use url::Url;

use super::{AppError, DocumentKey};

pub const DEFAULT_RAW_HOST: &str = "https://raw.githubusercontent.com";

/// Base of every raw URL served for one repository branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUrlBase {
    base: Url,
}

impl RawUrlBase {
    pub fn new(host: &Url, owner: &str, repo: &str, branch: &str) -> Result<Self, AppError> {
        if !matches!(host.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "raw_host must be an http(s) URL, got '{}'",
                host
            )));
        }
        for (key, value) in [("owner", owner), ("name", repo), ("branch", branch)] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("repository.{key} must not be empty")));
            }
        }

        let mut base = host.clone();
        base.set_query(None);
        base.set_fragment(None);
        {
            let mut segments = base.path_segments_mut().map_err(|_| {
                AppError::config_error(format!("raw_host cannot be a base URL: '{}'", host))
            })?;
            segments.pop_if_empty();
            segments.push(owner);
            segments.push(repo);
            // Branches like `release/2024` span several path segments.
            segments.extend(branch.split('/'));
        }

        Ok(Self { base })
    }

    /// `<host>/<owner>/<repo>/<branch>` without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    pub fn document_url(&self, key: &DocumentKey) -> Url {
        self.file_url(&[key.category.dir_name(), key.name.as_str()])
    }

    /// URL of a file at the repository root, e.g. the index.
    pub fn index_url(&self, file: &str) -> Url {
        self.file_url(&[file])
    }

    /// Placeholder form documented in the README.
    pub fn template(&self) -> String {
        format!("{}/<category>/<filename>.pdf", self.base_url())
    }

    /// Map a URL under this base back to its decoded repository-relative path.
    ///
    /// Returns `None` for URLs on another host, repository, or branch.
    pub fn locate(&self, url: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        if parsed.scheme() != self.base.scheme()
            || parsed.host_str() != self.base.host_str()
            || parsed.port_or_known_default() != self.base.port_or_known_default()
        {
            return None;
        }

        let base_path = self.base.path().trim_end_matches('/');
        let rest = parsed.path().strip_prefix(base_path)?.strip_prefix('/')?;
        if rest.is_empty() {
            return None;
        }

        let segments: Vec<String> = rest.split('/').map(percent_decode).collect();
        if segments.iter().any(|segment| {
            segment.is_empty()
                || segment == "."
                || segment == ".."
                || segment.contains('/')
                || segment.contains('\\')
        }) {
            return None;
        }
        Some(segments.join("/"))
    }

    fn file_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let h1 = bytes[i + 1] as char;
            let h2 = bytes[i + 2] as char;
            if let (Some(a), Some(b)) = (h1.to_digit(16), h2.to_digit(16)) {
                out.push(((a << 4) + b) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
