//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Input
    pub content_file: String,
    pub template_file: String,

    // Output
    pub public_dir: String,
    pub output_file: String,

    // Enrichment
    #[serde(default)]
    pub instagram: FeedConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_file: "content/forside.yml".to_string(),
            template_file: "src/index.template.html".to_string(),

            public_dir: "dist".to_string(),
            output_file: "index.html".to_string(),

            instagram: FeedConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Instagram Graph API settings.
///
/// Credentials are not part of this struct; they come from the
/// environment through [`crate::feed::Credentials`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub api_base: String,
    pub limit: usize,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base: "https://graph.instagram.com".to_string(),
            limit: 6,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_file, "content/forside.yml");
        assert_eq!(config.public_dir, "dist");
        assert_eq!(config.instagram.limit, 6);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
public_dir: public
instagram:
  limit: 9
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.output_file, "index.html");
        assert_eq!(config.instagram.limit, 9);
        assert_eq!(config.instagram.api_base, "https://graph.instagram.com");
    }
}
