//! Encoded image fixtures for upload tests.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

/// Encodes a 4x4 gradient in `format`.
pub fn encoded(format: ImageFormat) -> Vec<u8> {
    let pixels = RgbImage::from_fn(4, 4, |x, y| image::Rgb([x as u8 * 60, y as u8 * 60, 128]));
    let mut bytes = Cursor::new(Vec::new());
    pixels
        .write_to(&mut bytes, format)
        .expect("encoding a small RGB image should succeed");

    bytes.into_inner()
}

pub fn png() -> Vec<u8> {
    encoded(ImageFormat::Png)
}

pub fn jpeg() -> Vec<u8> {
    encoded(ImageFormat::Jpeg)
}
