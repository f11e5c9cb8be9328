//! Top-level MIME type detection for data URIs
//!
//! A data URI looks like `data:image/png;base64,iVBORw0...`. Only the main
//! type (the part before `/`) is reported, and only for the three families
//! attachments are expected to carry.

use serde::{Deserialize, Serialize};

const DATA_PREFIX: &str = "data:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeType {
    Image,
    Text,
    Application,
    Unknown,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Image => "image",
            MimeType::Text => "text",
            MimeType::Application => "application",
            MimeType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sniff the main MIME type of a data URI.
///
/// Anything that is not a `data:` URI, or whose main type is not `image`,
/// `text` or `application`, is [`MimeType::Unknown`]. Matching is case-sensitive.
pub fn sniff_data_uri(url: &str) -> MimeType {
    if !url.starts_with(DATA_PREFIX) {
        return MimeType::Unknown;
    }

    let mime_part = url.split(';').next().unwrap_or_default().replace(DATA_PREFIX, "");
    let main_type = mime_part.split('/').next().unwrap_or_default();

    match main_type {
        "image" => MimeType::Image,
        "text" => MimeType::Text,
        "application" => MimeType::Application,
        _ => MimeType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_image() {
        assert_eq!(
            sniff_data_uri("data:image/png;base64,iVBORw0KGgo="),
            MimeType::Image
        );
    }

    #[test]
    fn test_sniff_text() {
        assert_eq!(
            sniff_data_uri("data:text/plain;base64,SGVsbG8="),
            MimeType::Text
        );
    }

    #[test]
    fn test_sniff_application() {
        assert_eq!(
            sniff_data_uri("data:application/pdf;base64,JVBERi0="),
            MimeType::Application
        );
    }

    #[test]
    fn test_sniff_other_main_type_is_unknown() {
        assert_eq!(
            sniff_data_uri("data:video/mp4;base64,AAAA"),
            MimeType::Unknown
        );
        assert_eq!(
            sniff_data_uri("data:audio/mpeg;base64,AAAA"),
            MimeType::Unknown
        );
    }

    #[test]
    fn test_sniff_non_data_uri_is_unknown() {
        assert_eq!(
            sniff_data_uri("https://example.com/image.png"),
            MimeType::Unknown
        );
        assert_eq!(sniff_data_uri(""), MimeType::Unknown);
    }

    #[test]
    fn test_sniff_without_parameters() {
        assert_eq!(sniff_data_uri("data:text/html,<p>hi</p>"), MimeType::Text);
        assert_eq!(sniff_data_uri("data:image/gif"), MimeType::Image);
    }

    #[test]
    fn test_sniff_is_case_sensitive() {
        assert_eq!(
            sniff_data_uri("data:IMAGE/png;base64,AAAA"),
            MimeType::Unknown
        );
        assert_eq!(
            sniff_data_uri("DATA:image/png;base64,AAAA"),
            MimeType::Unknown
        );
    }

    #[test]
    fn test_mime_type_serializes_lowercase() {
        let json = serde_json::to_string(&MimeType::Application).unwrap();
        assert_eq!(json, "\"application\"");
        assert_eq!(MimeType::Unknown.to_string(), "unknown");
    }
}
