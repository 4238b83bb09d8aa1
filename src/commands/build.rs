//! Build the landing page

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::content::{load_template, PageContent};
use crate::feed::{render_cards, Credentials, InstagramFeed};
use crate::generator::write_output;
use crate::templates::Placeholders;
use crate::Site;

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_path: PathBuf,
    /// Instagram cards rendered into the page
    pub instagram_posts: usize,
    /// Template tokens that had no value
    pub unresolved_tokens: Vec<String>,
}

/// Build using credentials from the environment
pub async fn run(site: &Site) -> Result<BuildReport> {
    run_with_credentials(site, Credentials::from_env()).await
}

/// Build with explicit Instagram credentials
pub async fn run_with_credentials(
    site: &Site,
    credentials: Option<Credentials>,
) -> Result<BuildReport> {
    let start = std::time::Instant::now();

    let content = PageContent::load(&site.content_path)?;
    let template = load_template(&site.template_path)?;
    tracing::info!(
        "Loaded {} content fields from {:?}",
        content.len(),
        site.content_path
    );

    let feed = InstagramFeed::new(credentials, &site.config.instagram)
        .context("Cannot fetch Instagram posts on this system")?;
    let posts = feed.load().await;
    if feed.is_enabled() {
        tracing::info!("Rendering {} Instagram posts", posts.len());
    }
    let instagram_html = render_cards(&posts);

    let placeholders = Placeholders::from_content(&content, &instagram_html);
    let composition = placeholders.compose(&template);

    let output_path = write_output(
        &site.public_dir,
        &site.config.output_file,
        &composition.html,
    )?;

    let duration = start.elapsed();
    tracing::info!("Built {:?} in {:.2}s", output_path, duration.as_secs_f64());

    Ok(BuildReport {
        output_path,
        instagram_posts: posts.len(),
        unresolved_tokens: composition.unresolved,
    })
}
