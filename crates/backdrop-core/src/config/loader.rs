//! Stub file loading and discovery.

use crate::config::error::ConfigError;
use crate::config::parser::parse_stub_set;
use crate::config::stub::StubSet;
use std::path::Path;

/// Load one stub file, choosing the parser from its extension.
pub async fn load_stub_set(path: impl AsRef<Path>) -> Result<StubSet, ConfigError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
    parse_stub_set(&content, &path.to_string_lossy())
}

/// Discover and load every stub file matching `pattern` (glob syntax).
///
/// Files load in the order the glob yields them, which is sorted by
/// path; mounting the returned sets in order therefore gives earlier
/// files dispatch priority.
pub async fn load_stub_sets(pattern: &str) -> Result<Vec<StubSet>, ConfigError> {
    let paths = glob::glob(pattern).map_err(|source| ConfigError::Glob {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut sets = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| ConfigError::Io {
            path: err.path().display().to_string(),
            source: err.into(),
        })?;
        sets.push(load_stub_set(&path).await?);
    }

    tracing::debug!("loaded {} stub set(s) for `{}`", sets.len(), pattern);
    Ok(sets)
}
