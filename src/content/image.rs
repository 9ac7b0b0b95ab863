// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for overlay display.

use crate::error::LoadError;
use iced::widget::image;
use std::path::{Path, PathBuf};

/// A decoded image ready for the overlay: a render handle plus the pixel
/// dimensions the view sizes itself from.
#[derive(Debug, Clone)]
pub struct ImageContent {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageContent {
    /// Creates a new `ImageContent` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decodes the image at `path`.
///
/// Supports the common raster formats (PNG, JPEG, GIF, WebP, BMP).
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Decode`] if the bytes are not a supported image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageContent, LoadError> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| LoadError::Io(e.to_string()))?;

    let img = image_rs::load_from_memory(&bytes).map_err(|e| LoadError::Decode(e.to_string()))?;

    let width = img.width();
    let height = img.height();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageContent::from_rgba(width, height, pixels))
}

/// Async wrapper used by the gallery loader. Decoding runs on a blocking
/// worker so the UI loop never stalls on a large file.
pub async fn load(path: PathBuf) -> Result<ImageContent, LoadError> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .unwrap_or_else(|e| Err(LoadError::Io(format!("load task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let content = load_image(&image_path).expect("png should load successfully");
        assert_eq!(content.width, 4);
        assert_eq!(content.height, 2);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(LoadError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        std::fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(LoadError::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn async_load_resolves_off_the_ui_thread() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let content = load(image_path).await.expect("async load should succeed");
        assert_eq!((content.width, content.height), (2, 2));
    }
}
