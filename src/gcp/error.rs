

use serde::Deserialize;
use thiserror::Error;

use crate::utils::truncate_detail;


#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Deletion blocked by lien: {0}")]
    LienBlocked(String),

    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("API error {code} ({status}): {message}")]
    Status {
        code: u16,
        status: String,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_lien_blocked(&self) -> bool {
        matches!(self, Self::LienBlocked(_))
    }
}


#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<serde_json::Value>,
}

impl ErrorBody {
    fn mentions_lien(&self) -> bool {
        if self.message.to_lowercase().contains("lien") {
            return true;
        }
        self.details.iter().any(|detail| {
            detail
                .get("violations")
                .and_then(|v| v.as_array())
                .is_some_and(|violations| {
                    violations.iter().any(|violation| {
                        violation
                            .get("type")
                            .and_then(|t| t.as_str())
                            .is_some_and(|t| t.eq_ignore_ascii_case("lien"))
                    })
                })
        })
    }
}


/// Maps a non-2xx Resource Manager response onto the typed error taxonomy.
pub fn classify_error(http_status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);

    let (code, status, message) = match &parsed {
        Some(err) => (
            if err.code == 0 { http_status } else { err.code },
            err.status.clone(),
            err.message.clone(),
        ),
        None => (http_status, String::new(), truncate_detail(body.trim(), 300)),
    };

    match status.as_str() {
        "NOT_FOUND" => return ApiError::NotFound(message),
        "PERMISSION_DENIED" => return ApiError::PermissionDenied(message),
        "FAILED_PRECONDITION" => {
            return if parsed.as_ref().is_some_and(ErrorBody::mentions_lien) {
                ApiError::LienBlocked(message)
            } else {
                ApiError::FailedPrecondition(message)
            };
        }
        _ => {}
    }

    match code {
        404 => ApiError::NotFound(message),
        403 => ApiError::PermissionDenied(message),
        _ => ApiError::Status {
            code,
            status,
            message,
        },
    }
}
