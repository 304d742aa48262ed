use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::event::EventBus;
use crate::store::{StoreError, TrackerStore};
use crate::tables::StaticTables;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TrackerStore>,
    pub tables: Arc<StaticTables>,
    pub event_bus: EventBus,
}

impl AppState {
    pub fn new(store: Arc<TrackerStore>, tables: Arc<StaticTables>, event_bus: EventBus) -> Self {
        Self {
            store,
            tables,
            event_bus,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::InvalidItemIndex { .. } | StoreError::ProfileNotFound(_) => {
                AppError::NotFound(message)
            }
            StoreError::ProfileExists(_) | StoreError::DefaultProfileProtected => {
                AppError::Conflict(message)
            }
            StoreError::EmptyItemName
            | StoreError::EmptyProfileName
            | StoreError::InvalidProfileName(_)
            | StoreError::NothingToExport => AppError::BadRequest(message),
            StoreError::Storage(_) | StoreError::Corrupt(_) => AppError::Internal(message),
        }
    }
}
