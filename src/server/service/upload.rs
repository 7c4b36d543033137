use base64::{engine::general_purpose::STANDARD, Engine};
use image::ImageFormat;

/// Formats accepted for game images.
const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Detects the format of an uploaded image and checks that it decodes.
///
/// Returns `None` for empty files, formats outside `ACCEPTED_FORMATS`, and payloads whose
/// header names a known format but whose content does not decode.
pub fn image_format(bytes: &[u8]) -> Option<ImageFormat> {
    let format = image::guess_format(bytes).ok()?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return None;
    }

    match image::load_from_memory_with_format(bytes, format) {
        Ok(_) => Some(format),
        Err(e) => {
            tracing::debug!("Rejected {:?} upload that does not decode: {}", format, e);
            None
        }
    }
}

/// Encodes an uploaded image as a `data:` URL, `None` for anything `image_format` rejects.
pub fn image_data_url(bytes: &[u8]) -> Option<String> {
    let format = image_format(bytes)?;

    Some(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    /// Tests encoding of a decodable PNG.
    ///
    /// Expected: data URL with image/png carrying the original bytes
    #[test]
    fn encodes_png() {
        let bytes = fixture::image::png();

        let url = image_data_url(&bytes).unwrap();

        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(
            STANDARD
                .decode(url.trim_start_matches("data:image/png;base64,"))
                .unwrap(),
            bytes
        );
    }

    /// Tests JPEG detection.
    ///
    /// Expected: image/jpeg
    #[test]
    fn encodes_jpeg() {
        let url = image_data_url(&fixture::image::jpeg()).unwrap();

        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    /// Tests that arbitrary bytes and empty files are rejected.
    ///
    /// Expected: None
    #[test]
    fn rejects_unknown_payloads() {
        assert_eq!(image_data_url(b""), None);
        assert_eq!(image_data_url(b"plain text"), None);
    }

    /// Tests that a recognised header over undecodable content is rejected.
    ///
    /// Expected: None for a fake JPEG and a truncated PNG
    #[test]
    fn rejects_malformed_payloads() {
        assert_eq!(image_format(b"\xff\xd8\xffnot really a jpeg at all"), None);

        let png = fixture::image::png();
        assert_eq!(image_format(&png[..png.len() / 2]), None);
    }

    /// Tests that a decodable image in an unaccepted format is rejected.
    ///
    /// Expected: None for a BMP header
    #[test]
    fn rejects_unaccepted_formats() {
        assert_eq!(image_format(b"BM\x00\x00\x00\x00\x00\x00\x00\x00"), None);
    }
}
