//! Flat-file persistence for the published lists.
//!
//! Lists are JSON arrays of strings. Contributions are plain text, one
//! domain per line. Any failure other than a missing file is fatal so a run
//! never proceeds on a partial dataset.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DomainListError, Result};

/// File locations for one list repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// JSON array of exact entries
    pub exact: PathBuf,
    /// JSON array of wildcard entries
    pub wildcard: PathBuf,
    /// Contributed candidates, one per line
    pub contributions: PathBuf,
}

impl StorePaths {
    /// Conventional layout under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            exact: dir.join("domains.json"),
            wildcard: dir.join("wildcard.json"),
            contributions: dir.join("contributions.txt"),
        }
    }
}

/// Load a JSON string list. A missing file is an empty list.
pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = match read_optional(path)? {
        Some(text) => text,
        None => return Ok(Vec::new()),
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text).map_err(|e| DomainListError::load(path, e))
}

/// Write a list as pretty-printed JSON, creating parent directories.
pub fn save_list<S: AsRef<str>>(path: impl AsRef<Path>, list: &[S]) -> Result<()> {
    let path = path.as_ref();
    let list: Vec<&str> = list.iter().map(|s| s.as_ref()).collect();

    let mut json =
        serde_json::to_string_pretty(&list).map_err(|e| DomainListError::save(path, e))?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DomainListError::save(path, e))?;
    }
    fs::write(path, json).map_err(|e| DomainListError::save(path, e))
}

/// Read contributed candidates. A missing file yields none.
pub fn read_contributions(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let text = read_optional(path.as_ref())?.unwrap_or_default();
    Ok(parse_contributions(&text))
}

/// Split contribution text into entries, skipping blank lines and `#` comments.
pub fn parse_contributions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Empty the contribution file once its entries are merged.
pub fn clear_contributions(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => fs::write(path, "").map_err(|e| DomainListError::save(path, e)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DomainListError::save(path, e)),
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DomainListError::load(path, e)),
    }
}
