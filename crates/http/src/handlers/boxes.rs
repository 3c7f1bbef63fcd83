//! Handlers for the single `/api/boxes` resource.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use box_tracker_core::{BoxUpdate, MovingBox};

use crate::AppState;
use crate::api_error::{ApiError, ServiceResultExt as _};
use crate::query_types::{CreateBoxRequest, DeleteBoxRequest, ListBoxesQuery, UpdateBoxRequest};
use crate::response_types::DeleteBoxResponse;

const FETCH_FAILED: &str = "Failed to fetch boxes";
const ADD_FAILED: &str = "Failed to add box";
const UPDATE_FAILED: &str = "Failed to update box";
const DELETE_FAILED: &str = "Failed to delete box";

pub async fn list_boxes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListBoxesQuery>, QueryRejection>,
) -> Result<Json<Vec<MovingBox>>, ApiError> {
    let Query(query) = query?;
    let boxes = state.box_service.list(query.include_hidden).await.or_api_error(FETCH_FAILED)?;
    Ok(Json(boxes))
}

pub async fn create_box(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBoxRequest>, JsonRejection>,
) -> Result<Json<MovingBox>, ApiError> {
    let Json(req) = payload?;
    let created = state.box_service.create(req.into()).await.or_api_error(ADD_FAILED)?;
    Ok(Json(created))
}

pub async fn update_box(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateBoxRequest>, JsonRejection>,
) -> Result<Json<MovingBox>, ApiError> {
    let Json(req) = payload?;
    tracing::debug!(id = req.id(), "update box request");
    let service = &state.box_service;
    let updated = match req {
        UpdateBoxRequest::ToggleHidden { id, hidden, .. } => service.set_hidden(id, hidden).await,
        UpdateBoxRequest::Edit { id, room, contents, image_url } => {
            service.update(id, BoxUpdate { room, contents, image_url }).await
        },
    }
    .or_api_error(UPDATE_FAILED)?;
    Ok(Json(updated))
}

pub async fn delete_box(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteBoxRequest>, JsonRejection>,
) -> Result<Json<DeleteBoxResponse>, ApiError> {
    let Json(req) = payload?;
    state.box_service.delete(req.id).await.or_api_error(DELETE_FAILED)?;
    Ok(Json(DeleteBoxResponse { success: true }))
}
