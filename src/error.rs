use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Every way a relay request can fail. Each variant renders as a JSON body
/// with an `error` key; the status class tells caller faults from pipeline faults.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),
    /// The completion service could not be reached or answered with an error.
    #[error("{0}")]
    Oracle(String),
    /// The stripped reply was not valid JSON. `raw` is only disclosed when set.
    #[error("{message}")]
    Decode {
        message: &'static str,
        raw: Option<String>,
    },
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Oracle(_) | RelayError::Decode { .. } | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RelayError::Decode {
                message,
                raw: Some(raw),
            } => json!({ "error": message, "raw_response": raw }),
            other => json!({ "error": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
