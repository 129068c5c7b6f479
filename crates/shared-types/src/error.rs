use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client-side application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Network,
    Timeout,
    ServerError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Timeout => write!(f, "Timeout"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
        }
    }
}

/// Structured application error shared by every client operation.
///
/// Validation errors are raised before any network call and carry a
/// per-field message map; transport and backend failures carry the
/// kind that produced them so callers can surface a distinct message
/// (the poll timeout is the only `Timeout`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Timeout,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ServerError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Build an error from a non-2xx backend response.
    ///
    /// The backend sends structured `AppError` JSON on most failures;
    /// when the body is something else (HTML error page, empty body),
    /// fall back to a kind derived from the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return err;
        }
        let message = if body.trim().is_empty() {
            format!("Request failed with status {}", status)
        } else {
            body.trim().to_string()
        };
        match status {
            404 => Self::not_found(message),
            401 | 403 => Self::unauthorized(message),
            400 | 422 => Self::bad_request(message),
            _ => Self::server(message),
        }
    }

    /// Extract a user-friendly message, with a generic fallback.
    pub fn friendly_message(&self) -> String {
        if self.message.is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
