//! Filename-based media type resolution and label formatting.
//!
//! Browsers report a dropped file's type inconsistently, so acceptance
//! is decided from the filename extension, resolved through a fixed
//! extension-to-MIME table and checked for the `image/` prefix.

/// Maximum characters of a filename shown in the upload label before
/// truncation.
pub const MAX_LABEL_CHARS: usize = 20;

/// Extension-to-MIME table for the formats the pipeline can decode.
const MIME_TABLE: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
];

/// Resolve a filename to a MIME type via its extension.
///
/// Matching is ASCII case-insensitive. Returns `None` for filenames
/// without an extension or with an unknown one.
#[must_use]
pub fn mime_for_filename(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    MIME_TABLE
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
        .map(|&(_, mime)| mime)
}

/// Whether a filename resolves to an `image/` media type.
#[must_use]
pub fn is_image_filename(name: &str) -> bool {
    mime_for_filename(name).is_some_and(|mime| mime.starts_with("image/"))
}

/// Truncate a filename for display: at most [`MAX_LABEL_CHARS`]
/// characters, with a trailing `...` when the name was longer.
///
/// Counts characters, not bytes, so multi-byte names truncate cleanly.
#[must_use]
pub fn truncate_filename(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL_CHARS {
        return name.to_owned();
    }
    let mut truncated: String = name.chars().take(MAX_LABEL_CHARS).collect();
    truncated.push_str("...");
    truncated
}
