//! Instagram enrichment for the landing page
//!
//! The feed is optional. Without credentials it is [`InstagramFeed::Disabled`]
//! and never touches the network. With credentials it makes a single request;
//! any failure there is logged and the page is built without the grid.

mod client;
#[cfg(test)]
pub(crate) mod mock;
mod model;

use anyhow::Result;

pub use client::{Credentials, FeedClient, FeedError, TOKEN_VAR, USER_ID_VAR};
pub use model::{MediaPage, MediaType, SocialPost, MEDIA_FIELDS};

use crate::config::FeedConfig;

/// Optional source of recent posts
pub enum InstagramFeed {
    Disabled,
    Enabled(FeedClient),
}

impl InstagramFeed {
    /// Create the feed. Missing credentials disable it; an unusable HTTP
    /// stack is an error.
    pub fn new(credentials: Option<Credentials>, config: &FeedConfig) -> Result<Self> {
        match credentials {
            Some(credentials) => Ok(Self::Enabled(FeedClient::new(credentials, config)?)),
            None => {
                tracing::info!(
                    "No Instagram credentials ({} / {}), skipping Instagram section",
                    TOKEN_VAR,
                    USER_ID_VAR
                );
                Ok(Self::Disabled)
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Fetch picture posts, or nothing if disabled or the request fails
    pub async fn load(&self) -> Vec<SocialPost> {
        let client = match self {
            Self::Disabled => return Vec::new(),
            Self::Enabled(client) => client,
        };

        match client.fetch_posts().await {
            Ok(posts) => {
                let posts = select_pictures(posts);
                if let Some(newest) = posts.iter().filter_map(SocialPost::published_at).max() {
                    tracing::debug!("Newest Instagram post is from {}", newest.format("%Y-%m-%d"));
                }
                posts
            }
            Err(FeedError::Status(status)) => {
                tracing::warn!("Could not fetch Instagram posts: HTTP {}", status.as_u16());
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Error fetching Instagram posts: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch and render the grid fragment
    pub async fn render_fragment(&self) -> String {
        render_cards(&self.load().await)
    }
}

/// Keep images and albums that have a media URL, in API order
pub fn select_pictures(posts: Vec<SocialPost>) -> Vec<SocialPost> {
    posts
        .into_iter()
        .filter(|post| {
            let keep = post.is_picture() && post.media_url.is_some();
            if !keep {
                tracing::debug!("Skipping post {} ({:?})", post.id, post.media_type);
            }
            keep
        })
        .collect()
}

/// Render posts as linked cards, one per line group
pub fn render_cards(posts: &[SocialPost]) -> String {
    posts
        .iter()
        .filter_map(|post| post.media_url.as_deref().map(|url| render_card(post, url)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(post: &SocialPost, media_url: &str) -> String {
    format!(
        r#"<a class="ig-card" href="{}" target="_blank" rel="noopener noreferrer">
  <div class="ig-image" style="background-image:url('{}')"></div>
</a>"#,
        html_escape(&post.permalink),
        html_escape(media_url)
    )
}

/// Simple HTML escaping for attribute values
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
