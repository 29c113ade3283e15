use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::advisor::{AdvisorError, EngineError};
use crate::assessment::{AnswerImportError, ResponseError};
use crate::config::ConfigError;
use crate::learning::LearningError;
use crate::market::MarketError;
use crate::storage::StoreError;
use crate::telemetry::TelemetryError;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Import(AnswerImportError),
    Response(ResponseError),
    Market(MarketError),
    Learning(LearningError),
    Store(StoreError),
    Engine(EngineError),
    Json(serde_json::Error),
    UnknownRole(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
            AppError::Server(err) => write!(f, "server error: {err}"),
            AppError::Import(err) => write!(f, "answer import failed: {err}"),
            AppError::Response(err) => write!(f, "invalid response: {err}"),
            AppError::Market(err) => write!(f, "market data error: {err}"),
            AppError::Learning(err) => write!(f, "learning catalog error: {err}"),
            AppError::Store(err) => write!(f, "storage error: {err}"),
            AppError::Engine(err) => write!(f, "assessment engine error: {err}"),
            AppError::Json(err) => write!(f, "invalid JSON: {err}"),
            AppError::UnknownRole(role) => write!(f, "unknown career '{role}'"),
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
            AppError::Import(err) => Some(err),
            AppError::Response(err) => Some(err),
            AppError::Market(err) => Some(err),
            AppError::Learning(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::Engine(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::UnknownRole(_) => None,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Import(_)
            | AppError::Response(_)
            | AppError::Json(_)
            | AppError::Market(MarketError::EmptyRole | MarketError::EmptyIndustry)
            | AppError::Learning(LearningError::EmptyGoal) => StatusCode::BAD_REQUEST,
            AppError::UnknownRole(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
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

impl From<AnswerImportError> for AppError {
    fn from(value: AnswerImportError) -> Self {
        Self::Import(value)
    }
}

impl From<ResponseError> for AppError {
    fn from(value: ResponseError) -> Self {
        Self::Response(value)
    }
}

impl From<MarketError> for AppError {
    fn from(value: MarketError) -> Self {
        Self::Market(value)
    }
}

impl From<LearningError> for AppError {
    fn from(value: LearningError) -> Self {
        Self::Learning(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<EngineError> for AppError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<AdvisorError> for AppError {
    fn from(value: AdvisorError) -> Self {
        match value {
            AdvisorError::Store(err) => Self::Store(err),
            AdvisorError::Learning(err) => Self::Learning(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_input_maps_to_client_errors() {
        let err = AppError::from(ResponseError::UnknownQuestion("z9".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::UnknownRole("Astronaut".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(MarketError::Unavailable("down".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_carries_message() {
        let response = AppError::UnknownRole("Astronaut".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
