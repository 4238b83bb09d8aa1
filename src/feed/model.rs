use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fields requested from the media edge
pub const MEDIA_FIELDS: &str = "id,caption,media_url,permalink,media_type,timestamp";

// Media is documented at https://developers.facebook.com/docs/instagram-platform/reference/instagram-media
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialPost {
    pub id: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    pub permalink: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Image,
    CarouselAlbum,
    Video,
    #[serde(other)]
    Other,
}

// MediaPage is the envelope around one page of the media edge
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MediaPage {
    #[serde(default)]
    pub data: Vec<SocialPost>,
}

impl SocialPost {
    /// Whether this post can be shown as a picture card
    pub fn is_picture(&self) -> bool {
        matches!(self.media_type, MediaType::Image | MediaType::CarouselAlbum)
    }

    /// Parse the API timestamp, e.g. `2024-05-01T18:10:00+0000`
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        let ts = self.timestamp.as_deref()?;
        DateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%z")
            .or_else(|_| DateTime::parse_from_rfc3339(ts))
            .ok()
    }
}
