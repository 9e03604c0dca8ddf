use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sea_orm::DbErr;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error, rendered as `{"error": "..."}` with a matching status.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Unique or foreign-key violation reported by the database.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let Some(sql_err) = err.sql_err() {
            return AppError::Constraint(sql_err.to_string());
        }
        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            other => AppError::Database(other),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Constraint(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::not_found("Contact 1 not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::validation("name must not be blank").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Constraint("duplicate".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Timeout(Duration::from_secs(1)).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err: AppError = DbErr::RecordNotFound("Contact 9 not found".into()).into();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Contact 9 not found"));
    }

    #[test]
    fn other_db_errors_map_to_database() {
        let err: AppError = DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".into())).into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn timeout_message_reports_limit() {
        let err = AppError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "Request timed out after 250ms");
    }
}
