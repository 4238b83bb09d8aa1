//! Content loader - reads the content document and the page template

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::PageContent;

/// Failure to read one of the build inputs
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl PageContent {
    /// Load the page content from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let raw = read(path)?;
        Self::parse(&raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse page content from YAML text. The document must be a mapping.
    pub fn parse(raw: &str) -> Result<Self, serde_yaml::Error> {
        let mapping: IndexMap<String, serde_yaml::Value> = serde_yaml::from_str(raw)?;
        Ok(Self::from_mapping(mapping))
    }
}

/// Load the HTML template verbatim
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    read(path.as_ref())
}

fn read(path: &Path) -> Result<String, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {:?}", text.len(), path);
    Ok(text)
}
