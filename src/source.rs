//! Base version extraction from the version declaration file

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SourceError;

/// One line of the form `__version__ = "1.2.3"`, single or double quotes.
static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^__version__ = ['"]([^'"]+)['"]"#).expect("Failed to compile version regex")
});

/// Version string declared in source, before any disambiguation suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVersion(String);

impl BaseVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads the version declaration file and extracts the base version.
///
/// Fails fatally when the file is unreadable or no declaration line matches;
/// there is no default version to fall back to.
pub fn read_base_version(path: &Path) -> Result<BaseVersion, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_base_version(&text, path)
}

/// Scans `text` for the first `__version__` declaration line.
///
/// `path` is only used to name the offending location in the error.
pub fn extract_base_version(text: &str, path: &Path) -> Result<BaseVersion, SourceError> {
    VERSION_LINE
        .captures(text)
        .map(|captures| BaseVersion(captures[1].to_string()))
        .ok_or_else(|| SourceError::VersionNotFound {
            path: path.to_path_buf(),
        })
}
