//! Stream item model.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Artwork for a stream item: a bundled placeholder plus an optional remote
/// source. The placeholder is used whenever the remote image is absent or
/// cannot be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamArtwork {
    /// Encoded placeholder image shipped with the item.
    pub placeholder: Bytes,
    /// URL of the remote artwork, when the station provides one.
    pub remote_url: Option<String>,
}

impl StreamArtwork {
    pub fn new(placeholder: Bytes, remote_url: Option<String>) -> Self {
        Self {
            placeholder,
            remote_url,
        }
    }

    /// Placeholder-only artwork.
    pub fn placeholder_only(placeholder: Bytes) -> Self {
        Self::new(placeholder, None)
    }
}

/// The description of an internet radio station.
///
/// Immutable once loaded; a new `load` replaces the item wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamItem {
    /// Station name, mirrored as the now-playing title.
    pub name: String,
    /// Station description, mirrored as the now-playing artist line.
    pub description: String,
    /// URL of the audio stream handed to the playback engine.
    pub stream_url: String,
    /// Station artwork.
    pub artwork: StreamArtwork,
}

impl StreamItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        stream_url: impl Into<String>,
        artwork: StreamArtwork,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stream_url: stream_url.into(),
            artwork,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_round_trips_through_json() {
        let item = StreamItem::new(
            "City FM",
            "News and talk",
            "https://stream.example/cityfm.aac",
            StreamArtwork::new(
                Bytes::from_static(&[1, 2, 3]),
                Some("https://img.example/cityfm.png".into()),
            ),
        );

        let json = serde_json::to_string(&item).unwrap();
        let back: StreamItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
