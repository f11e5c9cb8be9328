use crate::prelude::{println, *};
use outline_core::mime::{sniff_data_uri, MimeType};
use serde::{Deserialize, Serialize};

#[derive(Debug, clap::Args, Clone)]
pub struct MimeOptions {
    /// Data URI to inspect, e.g. data:image/png;base64,...
    pub uri: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Body of `POST /file`, mirroring the attachment payload clients send
#[derive(Debug, Deserialize)]
pub struct AttachmentRequest {
    pub attachments: serde_json::Map<String, serde_json::Value>,
}

impl AttachmentRequest {
    /// The attachment URL, or an empty string when absent or not a string
    pub fn url(&self) -> &str {
        self.attachments
            .get("url")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MimeResponse {
    #[serde(rename = "type")]
    pub mime_type: MimeType,
}

pub fn detect_mime(request: &AttachmentRequest) -> MimeResponse {
    MimeResponse {
        mime_type: sniff_data_uri(request.url()),
    }
}

pub fn run(options: MimeOptions) -> Result<()> {
    let mime_type = sniff_data_uri(&options.uri);

    if options.json {
        println!("{}", serde_json::to_string(&MimeResponse { mime_type })?);
    } else {
        println!("{}", mime_type);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> AttachmentRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_detect_mime_image() {
        let response = detect_mime(&request(
            r#"{"attachments": {"url": "data:image/png;base64,iVBORw0KGgo="}}"#,
        ));
        assert_eq!(response.mime_type, MimeType::Image);
    }

    #[test]
    fn test_detect_mime_missing_url() {
        let response = detect_mime(&request(r#"{"attachments": {}}"#));
        assert_eq!(response.mime_type, MimeType::Unknown);
    }

    #[test]
    fn test_detect_mime_non_string_url() {
        let response = detect_mime(&request(r#"{"attachments": {"url": 42}}"#));
        assert_eq!(response.mime_type, MimeType::Unknown);
    }

    #[test]
    fn test_attachment_request_ignores_other_keys() {
        let req = request(r#"{"attachments": {"name": "a.txt", "url": "data:text/plain;,hi"}}"#);
        assert_eq!(req.url(), "data:text/plain;,hi");
        assert_eq!(detect_mime(&req).mime_type, MimeType::Text);
    }

    #[test]
    fn test_mime_response_json() {
        let json = serde_json::to_string(&MimeResponse {
            mime_type: MimeType::Application,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"application"}"#);
    }
}
