// SPDX-License-Identifier: MPL-2.0
//! Unified handling of the three content kinds a gallery link can target.
//!
//! Each kind has its own loader; all of them resolve into a [`ContentNode`]
//! that the overlay mounts. At most one node is mounted at a time.

pub mod image;
pub mod pano;
pub mod youtube;

pub use image::{load_image, ImageContent};
pub use pano::PanoViewer;
pub use youtube::VideoEmbed;

/// Declared kind of a gallery link, from its `data-type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Image,
    Pano,
    Youtube,
}

impl ContentKind {
    /// Maps a `data-type` attribute value. Absent and unrecognized values
    /// fall back to [`ContentKind::Image`].
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("pano") => ContentKind::Pano,
            Some("youtube") => ContentKind::Youtube,
            _ => ContentKind::Image,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Pano => "pano",
            ContentKind::Youtube => "youtube",
        }
    }
}

/// The single node currently displayed inside the overlay.
#[derive(Debug, Clone)]
pub enum ContentNode {
    Image(ImageContent),
    Pano(PanoViewer),
    Video(VideoEmbed),
}

impl ContentNode {
    /// Returns the kind this node was loaded for.
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentNode::Image(_) => ContentKind::Image,
            ContentNode::Pano(_) => ContentKind::Pano,
            ContentNode::Video(_) => ContentKind::Youtube,
        }
    }
}
