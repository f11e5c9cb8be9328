use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use log::{info, warn};
use serde::Deserialize;

use super::AppState;
use crate::mime::{detect_mime, AttachmentRequest, MimeResponse};
use crate::outline::fetch_outline_data;
use crate::prelude::Error;

const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct OutlineQuery {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub format: OutputFormat,
}

pub async fn outline_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OutlineQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let Query(query) = query?;
    let country = query.country.unwrap_or_default();

    let output = fetch_outline_data(&state.client, &state.config, &country)
        .await
        .inspect_err(|e| warn!("Outline request for '{}' failed: {e}", country.trim()))?;

    info!(
        "Outline for '{}': {} headings in {} ms",
        output.country,
        output.headings.len(),
        output.fetch_time_ms
    );

    let response = match query.format {
        OutputFormat::Markdown => (
            [(header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)],
            output.markdown,
        )
            .into_response(),
        OutputFormat::Json => Json(output).into_response(),
    };

    Ok(response)
}

pub async fn mime_handler(
    request: Result<Json<AttachmentRequest>, JsonRejection>,
) -> Result<Json<MimeResponse>, Error> {
    let Json(request) = request?;
    Ok(Json(detect_mime(&request)))
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
