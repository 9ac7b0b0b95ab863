// SPDX-License-Identifier: MPL-2.0
//! The panorama viewer node.
//!
//! The viewer itself is an opaque collaborator: it accepts a source URL and
//! pixel dimensions, and signals readiness exactly once after the source is
//! loaded. The overlay sizes it to the physical viewport (logical size times
//! scale factor) and resyncs those dimensions whenever the window resizes
//! while a panorama is mounted.

use crate::error::LoadError;
use iced::widget::image;
use iced::Size;
use std::path::PathBuf;

/// A mounted panorama viewer: source, physical pixel dimensions, and the
/// render handle produced when its load signal fired.
#[derive(Debug, Clone)]
pub struct PanoViewer {
    src: String,
    width: u32,
    height: u32,
    handle: image::Handle,
}

impl PanoViewer {
    pub(crate) fn new(src: String, width: u32, height: u32, handle: image::Handle) -> Self {
        Self {
            src,
            width,
            height,
            handle,
        }
    }

    /// Source URL the viewer was created for.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    /// Resyncs the viewer dimensions, e.g. after a window resize.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// Physical pixel dimensions for a viewer filling the given logical
/// viewport at the given scale factor.
pub fn physical_size(viewport: Size, scale_factor: f64) -> (u32, u32) {
    let width = (f64::from(viewport.width.max(0.0)) * scale_factor).round() as u32;
    let height = (f64::from(viewport.height.max(0.0)) * scale_factor).round() as u32;
    (width, height)
}

/// Creates a viewer for `src` sized to `width`×`height` and waits for its
/// load signal.
///
/// The stand-in viewer decodes the equirectangular source on a blocking
/// worker; readiness is the resolution of this future.
///
/// # Errors
///
/// Returns [`LoadError::Io`] or [`LoadError::Decode`] when the source
/// cannot be read or decoded.
pub async fn load(src: String, width: u32, height: u32) -> Result<PanoViewer, LoadError> {
    let path = PathBuf::from(&src);
    let decoded = tokio::task::spawn_blocking(move || super::image::load_image(&path))
        .await
        .unwrap_or_else(|e| Err(LoadError::Io(format!("load task failed: {e}"))))?;

    Ok(PanoViewer::new(src, width, height, decoded.handle))
}
