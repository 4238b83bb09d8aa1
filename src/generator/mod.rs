//! Generator module - writes the rendered page to the public directory

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to write the output file
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `html` to `dir/file_name`, creating `dir` if needed and replacing
/// any existing file. Returns the written path.
pub fn write_output(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf, WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let output_path = dir.join(file_name);
    fs::write(&output_path, html).map_err(|source| WriteError::Write {
        path: output_path.clone(),
        source,
    })?;
    tracing::debug!("Generated: {:?}", output_path);

    Ok(output_path)
}
