//! Instagram Graph API client

use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use super::model::{MediaPage, SocialPost, MEDIA_FIELDS};
use crate::config::FeedConfig;

/// Environment variable holding the long-lived access token
pub const TOKEN_VAR: &str = "INSTAGRAM_TOKEN";
/// Environment variable holding the Instagram user id
pub const USER_ID_VAR: &str = "INSTAGRAM_USER_ID";

/// Recoverable failure while fetching posts
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Could not decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Access token and account id for the Graph API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub user_id: String,
}

impl Credentials {
    /// Read both credentials from the process environment
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both credentials through `lookup`. Returns `None` unless both
    /// are present and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v: &String| !v.trim().is_empty());
        Some(Self {
            access_token: non_empty(TOKEN_VAR)?,
            user_id: non_empty(USER_ID_VAR)?,
        })
    }
}

// Keep the token out of debug logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

pub struct FeedClient {
    client: reqwest::Client,
    credentials: Credentials,
    api_base: String,
    limit: usize,
}

impl FeedClient {
    /// Build a client. Fails only when the HTTP stack cannot be initialised.
    pub fn new(credentials: Credentials, config: &FeedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .with_context(|| "HTTP client is not available")?;

        Ok(Self {
            client,
            credentials,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            limit: config.limit,
        })
    }

    fn media_url(&self) -> String {
        format!("{}/{}/media", self.api_base, self.credentials.user_id)
    }

    /// Fetch one page of recent media, in API order
    pub async fn fetch_posts(&self) -> Result<Vec<SocialPost>, FeedError> {
        let limit = self.limit.to_string();
        let resp = self
            .client
            .get(self.media_url())
            .query(&[
                ("fields", MEDIA_FIELDS),
                ("access_token", self.credentials.access_token.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            // the request URL carries the token
            .map_err(|e| FeedError::Transport(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.without_url()))?;
        let page: MediaPage = serde_json::from_str(&text)?;

        tracing::debug!(
            "Fetched {} media items for user {}",
            page.data.len(),
            self.credentials.user_id
        );

        Ok(page.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_credentials_need_both_values() {
        assert!(Credentials::from_lookup(lookup(&[])).is_none());
        assert!(Credentials::from_lookup(lookup(&[(TOKEN_VAR, "tok")])).is_none());
        assert!(Credentials::from_lookup(lookup(&[(USER_ID_VAR, "42")])).is_none());

        let creds =
            Credentials::from_lookup(lookup(&[(TOKEN_VAR, "tok"), (USER_ID_VAR, "42")])).unwrap();
        assert_eq!(creds.access_token, "tok");
        assert_eq!(creds.user_id, "42");
    }

    #[test]
    fn test_blank_credentials_count_as_missing() {
        assert!(Credentials::from_lookup(lookup(&[(TOKEN_VAR, " "), (USER_ID_VAR, "42")])).is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let creds = Credentials {
            access_token: "very-secret".to_string(),
            user_id: "42".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains("42"));
    }

    #[test]
    fn test_media_url_trims_trailing_slash() {
        let config = FeedConfig {
            api_base: "https://graph.example.com/".to_string(),
            ..FeedConfig::default()
        };
        let creds = Credentials {
            access_token: "tok".to_string(),
            user_id: "42".to_string(),
        };
        let client = FeedClient::new(creds, &config).unwrap();
        assert_eq!(client.media_url(), "https://graph.example.com/42/media");
    }
}
