/**
 * Sharing Handlers
 *
 * HTTP handlers for `/api/items/{item_id}/share`.
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
use crate::backend::sharing::workflow;
use crate::shared::{ItemId, RoleAssignment, ShareRequest, UserId};

/// POST /api/items/{item_id}/share
///
/// # Example Request
///
/// ```http
/// POST /api/items/12/share HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "user_id": 7, "role": "editor" }
/// ```
pub async fn share_item(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
    ApiJson(request): ApiJson<ShareRequest>,
) -> Result<Json<RoleAssignment>, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    let assignment = workflow::share_item(&pool, user.user_id, item_id, &request).await?;
    Ok(Json(assignment))
}

/// GET /api/items/{item_id}/share
pub async fn list_shares(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
) -> Result<Json<Vec<RoleAssignment>>, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    Ok(Json(workflow::list_shares(&pool, user.user_id, item_id).await?))
}

/// DELETE /api/items/{item_id}/share/{user_id}
pub async fn revoke_access(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path((item_id, target)): Path<(String, String)>,
) -> Result<StatusCode, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    let target: UserId = target.parse()?;
    workflow::revoke_access(&pool, user.user_id, item_id, target).await?;
    Ok(StatusCode::NO_CONTENT)
}
