use axum::http::StatusCode;
use chrono::NaiveDate;

/// Failures reading or writing the storage slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode mood log: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reasons an import is rejected. The log is left untouched in every case.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("import is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid data format: expected a list of entries, found {0}")]
    Format(&'static str),

    #[error("entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("duplicate entry for {0}")]
    DuplicateDate(NaiveDate),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "storage failure");
        Self::internal(err)
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Storage(inner) => inner.into(),
            other => Self::bad_request(other.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
