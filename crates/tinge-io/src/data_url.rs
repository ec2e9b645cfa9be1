//! Data URL construction for inline image previews.
//!
//! Previews render through `<img src="data:...">` rather than Blob
//! object URLs so nothing needs revoking when the selection changes --
//! a stale data URL is garbage-collected with the element holding it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode bytes as a base64 data URL with the given MIME type.
#[must_use]
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    let encoded = STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_mime_and_payload() {
        let url = to_data_url(b"hello", "image/jpeg");
        assert_eq!(url, "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn empty_payload_yields_empty_base64() {
        assert_eq!(to_data_url(&[], "image/png"), "data:image/png;base64,");
    }

    #[test]
    fn payload_round_trips_through_base64() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let url = to_data_url(&bytes, "application/octet-stream");
        let (_, b64) = url.split_once("base64,").unwrap_or_default();
        let decoded = STANDARD.decode(b64).unwrap_or_default();
        assert_eq!(decoded, bytes);
    }
}
