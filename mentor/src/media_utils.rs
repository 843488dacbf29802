use crate::id_utils;

/// Sniff an image MIME type from leading magic bytes. Only the formats the
/// submission flow accepts are recognized.
pub fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Placeholder illustration for a generated challenge. The model returns text
/// only, so the image is sourced from a seeded stock-photo service.
pub fn placeholder_image_url() -> String {
    format!(
        "https://picsum.photos/seed/{}/800/600",
        id_utils::generate_string(8)
    )
}
