//! Axum request handlers for the HTTP API.
//!
//! Generation keeps running in a background task after `/generate` and
//! `/jobs/:key/regenerate` respond; clients poll `/jobs` for progress.
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::routes::AppState;
use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::generation::suggest::SuggestionField;
use crate::jobs::{Job, Snapshot};
use crate::selection::Selection;
use crate::studio::{BatchRun, PlannedJob};

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub image: String,
}

pub async fn root() -> &'static str {
    "Kritrim API"
}

pub async fn catalog() -> Json<Value> {
    Json(json!({
        "eras": catalog::ERA_CATEGORIES,
        "cultural": catalog::CULTURAL_LOOKS,
        "filters": catalog::FILTERS,
        "styles": catalog::STYLES,
        "figureSizes": catalog::FIGURE_SIZES,
        "aspectRatios": catalog::ASPECT_RATIOS,
        "imageFramings": catalog::IMAGE_FRAMINGS,
    }))
}

pub async fn upload(State(state): State<Arc<AppState>>, Json(payload): Json<UploadRequest>) -> AppResult<Json<Value>> {
    let session = state.studio.upload(payload.image).await?;
    Ok(Json(json!({ "session": session })))
}

pub async fn preview(State(state): State<Arc<AppState>>, Json(selection): Json<Selection>) -> AppResult<Json<Vec<PlannedJob>>> {
    state.studio.preview(&selection).await.map(Json)
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(selection): Json<Selection>,
) -> AppResult<(StatusCode, Json<Snapshot>)> {
    let run = state.studio.launch(&selection).await?;
    let snapshot = state.studio.snapshot().await;
    spawn_run(run);
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

pub async fn jobs(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(state.studio.snapshot().await)
}

pub async fn regenerate(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> AppResult<(StatusCode, Json<Job>)> {
    let run = state.studio.regenerate(&key).await?;
    let job = state.studio.tracker().get(&key).await.ok_or_else(|| AppError::UnknownJob(key.clone()))?;
    spawn_run(run);
    Ok((StatusCode::ACCEPTED, Json(job)))
}

pub async fn reset(State(state): State<Arc<AppState>>) -> Json<Value> {
    let session = state.studio.reset().await;
    Json(json!({ "session": session }))
}

pub async fn album(State(state): State<Arc<AppState>>) -> Json<IndexMap<String, String>> {
    Json(state.studio.album().await)
}

pub async fn suggest(State(state): State<Arc<AppState>>, Path(field): Path<String>) -> AppResult<Json<Value>> {
    let field: SuggestionField = field.parse()?;
    let suggestion = state.studio.suggest(field).await?;
    Ok(Json(json!({ "field": field, "suggestion": suggestion })))
}

fn spawn_run(run: BatchRun) {
    let session = run.session();
    tokio::spawn(async move {
        let summary = run.run().await;
        tracing::debug!(%session, ?summary, "background run finished");
    });
}
