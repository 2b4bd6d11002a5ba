/**
 * Todo Handlers
 *
 * HTTP handlers for `/api/items/{item_id}/todos`. Reads need `can_view` on
 * the parent item; every write needs `can_edit`.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::json::ApiJson;
use crate::backend::todos::db;
use crate::shared::todos::TodoRequest;
use crate::shared::{ItemId, Todo, TodoId};

fn parse_ids(item_id: &str, todo_id: &str) -> Result<(ItemId, TodoId), BackendError> {
    Ok((item_id.parse()?, todo_id.parse()?))
}

/// GET /api/items/{item_id}/todos
pub async fn list_todos(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
) -> Result<Json<Vec<Todo>>, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    Ok(Json(db::list_todos(&pool, user.user_id, item_id).await?))
}

/// POST /api/items/{item_id}/todos
pub async fn create_todo(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
    ApiJson(request): ApiJson<TodoRequest>,
) -> Result<Json<Todo>, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    request.validate()?;
    Ok(Json(db::create_todo(&pool, user.user_id, item_id, &request).await?))
}

/// GET /api/items/{item_id}/todos/{todo_id}
pub async fn get_todo(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, todo_id)): Path<(String, String)>,
) -> Result<Json<Todo>, BackendError> {
    let (item_id, todo_id) = parse_ids(&item_id, &todo_id)?;
    Ok(Json(db::get_todo(&pool, user.user_id, item_id, todo_id).await?))
}

/// PUT /api/items/{item_id}/todos/{todo_id}
pub async fn update_todo(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, todo_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<TodoRequest>,
) -> Result<Json<Todo>, BackendError> {
    let (item_id, todo_id) = parse_ids(&item_id, &todo_id)?;
    request.validate()?;
    Ok(Json(
        db::update_todo(&pool, user.user_id, item_id, todo_id, &request).await?,
    ))
}

/// PATCH /api/items/{item_id}/todos/{todo_id}/done
pub async fn mark_done(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, todo_id)): Path<(String, String)>,
) -> Result<Json<Todo>, BackendError> {
    let (item_id, todo_id) = parse_ids(&item_id, &todo_id)?;
    Ok(Json(db::mark_done(&pool, user.user_id, item_id, todo_id).await?))
}

/// DELETE /api/items/{item_id}/todos/{todo_id}
pub async fn delete_todo(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, todo_id)): Path<(String, String)>,
) -> Result<StatusCode, BackendError> {
    let (item_id, todo_id) = parse_ids(&item_id, &todo_id)?;
    db::delete_todo(&pool, user.user_id, item_id, todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
