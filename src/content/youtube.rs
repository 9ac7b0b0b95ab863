// SPDX-License-Identifier: MPL-2.0
//! Video embed construction from watch-page URLs.
//!
//! Parsing is best-effort: three URL shapes are recognized, and anything
//! else degrades to an empty id rather than an error. The embed displays
//! immediately; there is no load signal to wait for.

use std::fmt;

/// Base of the canonical embed URL.
pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// An embeddable video node, displayed as soon as it is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    id: String,
    source_url: String,
}

impl VideoEmbed {
    /// Builds an embed for the given watch URL.
    pub fn from_url(url: &str) -> Self {
        Self {
            id: video_id(url),
            source_url: url.to_string(),
        }
    }

    /// The extracted video id. May be empty for an unparseable URL; no
    /// validation is attempted.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The canonical embed URL.
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE}{}", self.id)
    }

    /// The URL the link declared.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

impl fmt::Display for VideoEmbed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.embed_url())
    }
}

/// Extracts the video id from a watch URL.
///
/// Recognized forms:
/// - `…/watch?v=ID` (watch page)
/// - `…/shorts/ID` (shorts path)
/// - `…/ID` (bare id path, e.g. `youtu.be/ID`)
pub fn video_id(url: &str) -> String {
    let without_scheme = url
        .split_once("://")
        .map_or(url, |(_, rest)| rest);

    let (_, path_and_query) = without_scheme.split_once('/').unwrap_or((without_scheme, ""));
    let (path, query) = path_and_query
        .split_once('?')
        .map_or((path_and_query, ""), |(p, q)| (p, q));
    let path = path.split_once('#').map_or(path, |(p, _)| p);

    if path == "watch" {
        query_param(query, "v").unwrap_or_default()
    } else if let Some(rest) = path.strip_prefix("shorts/") {
        rest.rsplit('/').next().unwrap_or_default().to_string()
    } else {
        path.to_string()
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_extracts_query_parameter() {
        assert_eq!(video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn watch_url_with_extra_parameters() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?t=42&v=dQw4w9WgXcQ&list=PL0"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn shorts_url_takes_the_last_path_segment() {
        assert_eq!(video_id("https://youtube.com/shorts/abc123"), "abc123");
        assert_eq!(video_id("https://youtube.com/shorts/abc123?feature=share"), "abc123");
    }

    #[test]
    fn bare_id_path_form() {
        assert_eq!(video_id("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn fragment_is_stripped() {
        assert_eq!(video_id("https://youtu.be/abc#t=30"), "abc");
    }

    #[test]
    fn watch_url_without_v_parameter_yields_empty_id() {
        assert_eq!(video_id("https://www.youtube.com/watch?list=PL0"), "");
    }

    #[test]
    fn host_only_url_yields_empty_id() {
        assert_eq!(video_id("https://www.youtube.com"), "");
        assert_eq!(video_id("https://www.youtube.com/"), "");
    }

    #[test]
    fn embed_url_points_at_canonical_base() {
        let embed = VideoEmbed::from_url("https://www.youtube.com/watch?v=xyz");
        assert_eq!(embed.id(), "xyz");
        assert_eq!(embed.embed_url(), "https://www.youtube.com/embed/xyz");
        assert_eq!(embed.source_url(), "https://www.youtube.com/watch?v=xyz");
    }

    #[test]
    fn unparseable_url_still_builds_an_embed() {
        let embed = VideoEmbed::from_url("https://www.youtube.com/watch");
        assert_eq!(embed.id(), "");
        assert_eq!(embed.embed_url(), EMBED_BASE);
    }
}
