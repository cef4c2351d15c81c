//! Handlers for the contacts API routes.

use super::AppState;
use crate::domain::{ContactDraft, FieldErrors};
use crate::error::ServiceError;
use crate::models::PageRequest;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::collections::HashMap;

pub(crate) const LIST_FAILED: &str = "Server error";
pub(crate) const CREATE_FAILED: &str = "Failed to create contact";
pub(crate) const DELETE_FAILED: &str = "Failed to delete contact";
pub(crate) const NOT_FOUND: &str = "Contact not found";

/// Error responses of the contacts API.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// 400 `{errors: {field: message}}`
    Validation(FieldErrors),
    /// 404 `{error: "Contact not found"}`
    NotFound,
    /// 500 `{error: message}`; the detail has already been logged
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": NOT_FOUND }))).into_response()
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

fn internal(err: ServiceError, message: &'static str) -> ApiError {
    tracing::error!(error = %err, "{}", message);
    ApiError::Internal(message)
}

pub(crate) async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let request = PageRequest::from_query(
        params.get("page").map(String::as_str),
        params.get("limit").map(String::as_str),
        state.max_page_limit,
    );

    let page = state
        .service
        .list(request)
        .await
        .map_err(|e| internal(e, LIST_FAILED))?;

    Ok(Json(page).into_response())
}

pub(crate) async fn create_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Anything that is not a JSON object is treated as an empty form.
    let draft: ContactDraft = serde_json::from_slice(&body).unwrap_or_default();

    match state.service.create(draft).await {
        Ok(contact) => Ok((StatusCode::CREATED, Json(contact)).into_response()),
        Err(ServiceError::Validation(errors)) => Err(ApiError::Validation(errors)),
        Err(e) => Err(internal(e, CREATE_FAILED)),
    }
}

pub(crate) async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.service.delete(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(ServiceError::NotFound(_)) => Err(ApiError::NotFound),
        Err(e) => Err(internal(e, DELETE_FAILED)),
    }
}
