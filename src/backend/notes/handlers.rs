//! Note handlers for `/api/items/{item_id}/notes`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::json::ApiJson;
use crate::backend::notes::db;
use crate::shared::todos::NoteRequest;
use crate::shared::{ItemId, Note, NoteId};

fn parse_ids(item_id: &str, note_id: &str) -> Result<(ItemId, NoteId), BackendError> {
    Ok((item_id.parse()?, note_id.parse()?))
}

pub async fn list_notes(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
) -> Result<Json<Vec<Note>>, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    Ok(Json(db::list_notes(&pool, user.user_id, item_id).await?))
}

pub async fn create_note(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
    ApiJson(request): ApiJson<NoteRequest>,
) -> Result<Json<Note>, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    request.validate()?;
    Ok(Json(
        db::create_note(&pool, user.user_id, item_id, &request.content).await?,
    ))
}

pub async fn get_note(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, note_id)): Path<(String, String)>,
) -> Result<Json<Note>, BackendError> {
    let (item_id, note_id) = parse_ids(&item_id, &note_id)?;
    Ok(Json(db::get_note(&pool, user.user_id, item_id, note_id).await?))
}

pub async fn update_note(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, note_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<NoteRequest>,
) -> Result<Json<Note>, BackendError> {
    let (item_id, note_id) = parse_ids(&item_id, &note_id)?;
    request.validate()?;
    Ok(Json(
        db::update_note(&pool, user.user_id, item_id, note_id, &request.content).await?,
    ))
}

pub async fn delete_note(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, note_id)): Path<(String, String)>,
) -> Result<StatusCode, BackendError> {
    let (item_id, note_id) = parse_ids(&item_id, &note_id)?;
    db::delete_note(&pool, user.user_id, item_id, note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
