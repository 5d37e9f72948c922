//! Mobile CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, MobileId};
use crate::model::{Mobile, MobileInput};
use crate::response::{message_created, message_ok};
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};

pub const NOT_FOUND: &str = "Mobile not found";
pub const NOT_FOUND_FOR_DELETION: &str = "Mobile not found for deletion";
pub const ADDED: &str = "Mobile added successfully";
pub const UPDATED: &str = "Mobile updated successfully";
pub const DELETED: &str = "Mobile deleted successfully";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Mobile>>, AppError> {
    let rows = state.store.list_all().await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    MobileId(id): MobileId,
) -> Result<Json<Mobile>, AppError> {
    let mobile = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(mobile))
}

/// Body is the fixed envelope; the new id is only exposed through `Location`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MobileInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.store.create(&input).await?;
    tracing::info!(id, name = %input.name, "mobile created");
    let (status, body) = message_created(ADDED);
    Ok((status, [(header::LOCATION, format!("/mobiles/{}", id))], body))
}

/// Full overwrite. An id with no row still answers 200; the store reports 0 rows and we log it.
pub async fn update(
    State(state): State<AppState>,
    MobileId(id): MobileId,
    JsonBody(input): JsonBody<MobileInput>,
) -> Result<impl IntoResponse, AppError> {
    let affected = state.store.update(id, &input).await?;
    if affected == 0 {
        tracing::warn!(id, "update matched no mobile");
    }
    Ok(message_ok(UPDATED))
}

pub async fn delete(
    State(state): State<AppState>,
    MobileId(id): MobileId,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND_FOR_DELETION.into()));
    }
    tracing::info!(id, "mobile deleted");
    Ok(message_ok(DELETED))
}
