use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::dashboard::DashboardError;
use crate::workflows::reports::ReportServiceError;
use crate::workflows::verification::{RepositoryError, VerificationServiceError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Verification(VerificationServiceError),
    Report(ReportServiceError),
    Dashboard(DashboardError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Verification(VerificationServiceError::Submission(_))
            | AppError::Report(ReportServiceError::Intake(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Verification(VerificationServiceError::Repository(
                RepositoryError::NotFound,
            ))
            | AppError::Report(ReportServiceError::Repository(RepositoryError::NotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Verification(_)
            | AppError::Report(_)
            | AppError::Dashboard(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Verification(err) => write!(f, "verification error: {}", err),
            AppError::Report(err) => write!(f, "report error: {}", err),
            AppError::Dashboard(err) => write!(f, "dashboard error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Verification(err) => Some(err),
            AppError::Report(err) => Some(err),
            AppError::Dashboard(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<VerificationServiceError> for AppError {
    fn from(value: VerificationServiceError) -> Self {
        Self::Verification(value)
    }
}

impl From<ReportServiceError> for AppError {
    fn from(value: ReportServiceError) -> Self {
        Self::Report(value)
    }
}

impl From<DashboardError> for AppError {
    fn from(value: DashboardError) -> Self {
        Self::Dashboard(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::reports::IntakeViolation;
    use crate::workflows::verification::SubmissionViolation;

    #[test]
    fn validation_failures_map_to_unprocessable_entity() {
        let err = AppError::from(VerificationServiceError::from(
            SubmissionViolation::MissingCompanyName,
        ));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = AppError::from(ReportServiceError::from(IntakeViolation::MissingDescription));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.to_string(),
            "report error: a description of what happened is required"
        );
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let err = AppError::from(VerificationServiceError::from(RepositoryError::NotFound));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = AppError::from(ReportServiceError::from(RepositoryError::NotFound));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_failures_map_to_internal_error() {
        let err = AppError::from(VerificationServiceError::from(RepositoryError::Unavailable(
            "offline".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&err).is_some());

        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "posting.txt",
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&err).is_some());
    }
}
