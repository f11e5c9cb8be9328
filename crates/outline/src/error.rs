use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use outline_core::OutlineError;
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Country name must not be empty")]
    EmptyInput,

    #[error("No Wikipedia article found for '{0}'")]
    NotFound(String),

    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("No headings found for '{0}'")]
    NoHeadingsFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::EmptyInput => StatusCode::BAD_REQUEST,
            Error::NotFound(_) | Error::NoHeadingsFound(_) => StatusCode::NOT_FOUND,
            Error::FetchError(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Rejected(status, _) => *status,
        }
    }
}

impl From<OutlineError> for Error {
    fn from(err: OutlineError) -> Self {
        match err {
            OutlineError::EmptyInput => Error::EmptyInput,
            OutlineError::InvalidScope(_, _) => Error::Config(err.to_string()),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Rejected(rejection.status(), rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
