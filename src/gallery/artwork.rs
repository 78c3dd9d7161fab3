// SPDX-License-Identifier: MPL-2.0
//! Decoded thumbnails ready for display.

use crate::config::THUMBNAIL_SIZE;
use iced::widget::image::Handle;
use image_rs::imageops::FilterType;
use std::sync::OnceLock;

/// Whether the thumbnail was downloaded or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkStatus {
    Loaded,
    /// Download or decode failed; the shared placeholder tile is shown.
    Placeholder,
}

/// One candidate image, always [`THUMBNAIL_SIZE`] pixels square.
#[derive(Debug, Clone)]
pub struct Artwork {
    pub url: String,
    pub handle: Handle,
    pub status: ArtworkStatus,
}

impl Artwork {
    #[must_use]
    pub fn loaded(url: impl Into<String>, handle: Handle) -> Self {
        Self {
            url: url.into(),
            handle,
            status: ArtworkStatus::Loaded,
        }
    }

    #[must_use]
    pub fn placeholder(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            handle: placeholder_handle(),
            status: ArtworkStatus::Placeholder,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.status == ArtworkStatus::Placeholder
    }
}

/// Decodes `bytes` and scales the result to exactly
/// `THUMBNAIL_SIZE` x `THUMBNAIL_SIZE`, ignoring the aspect ratio.
pub fn decode_thumbnail(bytes: &[u8]) -> Result<Handle, image_rs::ImageError> {
    let image = image_rs::load_from_memory(bytes)?;
    let scaled = image.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle);
    let pixels = scaled.to_rgba8().into_vec();
    Ok(Handle::from_rgba(THUMBNAIL_SIZE, THUMBNAIL_SIZE, pixels))
}

/// Gray tile with a one pixel darker border, shared by every empty cell.
#[must_use]
pub fn placeholder_handle() -> Handle {
    static PLACEHOLDER: OnceLock<Handle> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Handle::from_rgba(THUMBNAIL_SIZE, THUMBNAIL_SIZE, placeholder_pixels()))
        .clone()
}

fn placeholder_pixels() -> Vec<u8> {
    const FILL: [u8; 4] = [0xC8, 0xC8, 0xC8, 0xFF];
    const EDGE: [u8; 4] = [0x96, 0x96, 0x96, 0xFF];
    let last = THUMBNAIL_SIZE - 1;
    (0..THUMBNAIL_SIZE)
        .flat_map(|y| (0..THUMBNAIL_SIZE).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            if x == 0 || y == 0 || x == last || y == last {
                EDGE
            } else {
                FILL
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([10u8, 20, 30, 255]));
        let mut bytes = Cursor::new(Vec::new());
        image_rs::DynamicImage::ImageRgba8(buffer)
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        bytes.into_inner()
    }

    #[test]
    fn decode_scales_to_thumbnail_size() {
        let handle = decode_thumbnail(&encode_png(37, 250)).expect("decodes");
        match handle {
            Handle::Rgba { width, height, .. } => {
                assert_eq!((width, height), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
            }
            other => panic!("unexpected handle {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_thumbnail(b"definitely not an image").is_err());
    }

    #[test]
    fn placeholder_pixels_cover_the_tile() {
        let pixels = placeholder_pixels();
        assert_eq!(pixels.len(), (THUMBNAIL_SIZE * THUMBNAIL_SIZE * 4) as usize);
        assert_eq!(&pixels[0..4], &[0x96, 0x96, 0x96, 0xFF]);
        let center = ((50 * THUMBNAIL_SIZE + 50) * 4) as usize;
        assert_eq!(&pixels[center..center + 4], &[0xC8, 0xC8, 0xC8, 0xFF]);
    }

    #[test]
    fn placeholder_artwork_is_marked() {
        let artwork = Artwork::placeholder("https://img.test/missing.jpg");
        assert!(artwork.is_placeholder());
        assert_eq!(artwork.url, "https://img.test/missing.jpg");
    }
}
