//! forside-rs: builds a single landing page from YAML content and an HTML template
//!
//! The build reads `content/forside.yml` and `src/index.template.html`,
//! optionally pulls a few recent Instagram posts, fills the `%%TOKEN%%`
//! placeholders and writes `dist/index.html`.

pub mod commands;
pub mod config;
pub mod content;
pub mod feed;
pub mod generator;
pub mod templates;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A landing page project rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content document (YAML)
    pub content_path: PathBuf,
    /// Page template
    pub template_path: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` if it exists
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Invalid site config {:?}", config_path))?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_path = base_dir.join(&config.content_file);
        let template_path = base_dir.join(&config.template_file);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_path,
            template_path,
            public_dir,
        }
    }

    /// Path of the generated page
    pub fn output_path(&self) -> PathBuf {
        self.public_dir.join(&self.config.output_file)
    }

    /// Build the page, reading Instagram credentials from the environment
    pub async fn build(&self) -> Result<commands::build::BuildReport> {
        commands::build::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert_eq!(site.content_path, dir.path().join("content/forside.yml"));
        assert_eq!(site.template_path, dir.path().join("src/index.template.html"));
        assert_eq!(site.output_path(), dir.path().join("dist/index.html"));
    }

    #[test]
    fn test_config_file_overrides_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "public_dir: public\noutput_file: home.html\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.output_path(), dir.path().join("public/home.html"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "instagram: [1, 2\n").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
