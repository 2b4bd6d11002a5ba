/**
 * Item Handlers
 *
 * HTTP handlers for `/api/items` and `/api/items/{item_id}`.
 *
 * # Version Tags
 *
 * Item responses carry the version as a strong `ETag` (`"3"`). A `PUT`
 * names the version it was based on either in the body (`version`) or in
 * `If-Match`; the body wins when both are present. `GET` with a matching
 * `If-None-Match` answers 304 without a body.
 */

use axum::{
    extract::{Path, State},
    http::{
        header::{ETAG, IF_MATCH, IF_NONE_MATCH},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use sqlx::PgPool;

use crate::backend::error::BackendError;
use crate::backend::items::db;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::json::ApiJson;
use crate::shared::items::{
    default_content, parse_version_etag, validate_name, version_etag, CreateItemRequest,
    UpdateItemRequest,
};
use crate::shared::{ItemId, ItemWithAccess};

fn etag_header(version: i32) -> Result<HeaderValue, BackendError> {
    HeaderValue::from_str(&version_etag(version))
        .map_err(|e| BackendError::state(format!("Invalid ETag value: {}", e)))
}

/// Whether an `If-None-Match` value names `version`
///
/// Accepts `*` and comma-separated tag lists. Unparseable tags never match.
pub fn none_match_hits(header: &str, version: i32) -> bool {
    header.split(',').map(str::trim).any(|tag| {
        tag == "*" || parse_version_etag(tag).map(|v| v == version).unwrap_or(false)
    })
}

/// Resolve the version an edit is based on
///
/// # Errors
/// 400 if neither the body nor `If-Match` carries a version, or if the
/// header is malformed
pub fn expected_version(body: Option<i32>, headers: &HeaderMap) -> Result<i32, BackendError> {
    if let Some(version) = body {
        if version < 1 {
            return Err(BackendError::validation("version", "version must be at least 1"));
        }
        return Ok(version);
    }

    match headers.get(IF_MATCH) {
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| BackendError::validation("If-Match", "If-Match is not valid text"))?;
            Ok(parse_version_etag(raw)?)
        }
        None => Err(BackendError::validation(
            "version",
            "version is required (body field or If-Match header)",
        )),
    }
}

/// GET /api/items
///
/// Items the caller holds any role on, newest first.
pub async fn list_items(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ItemWithAccess>>, BackendError> {
    let items = db::list_items(&pool, user.user_id).await?;
    tracing::debug!(user_id = %user.user_id, count = items.len(), "Listed items");
    Ok(Json(items))
}

/// POST /api/items
///
/// # Example Request
///
/// ```http
/// POST /api/items HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "name": "Groceries", "content": ["milk"] }
/// ```
pub async fn create_item(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateItemRequest>,
) -> Result<Response, BackendError> {
    let name = validate_name(&request.name)?;
    let content = request.content.unwrap_or_else(default_content);

    let item = db::create_item(&pool, user.user_id, name, &content).await?;

    Ok((StatusCode::OK, [(ETAG, etag_header(item.version)?)], Json(item)).into_response())
}

/// GET /api/items/{item_id}
pub async fn get_item(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, BackendError> {
    let item_id: ItemId = item_id.parse()?;

    let detail = db::get_item(&pool, user.user_id, item_id).await?;
    let version = detail.access.item.version;
    let etag = etag_header(version)?;

    let not_modified = headers
        .get(IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(|value| none_match_hits(value, version))
        .unwrap_or(false);
    if not_modified {
        return Ok((StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response());
    }

    Ok((StatusCode::OK, [(ETAG, etag)], Json(detail)).into_response())
}

/// PUT /api/items/{item_id}
///
/// # Errors
/// * `400` - Missing version or invalid name
/// * `403` - Caller's role lacks `can_edit`
/// * `404` - No such item, or no role on it
/// * `409` - The version is stale; the body carries `current_version`
pub async fn update_item(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
    headers: HeaderMap,
    ApiJson(request): ApiJson<UpdateItemRequest>,
) -> Result<Response, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    let expected = expected_version(request.version, &headers)?;
    let name = validate_name(&request.name)?;

    let item = db::edit_item(
        &pool,
        user.user_id,
        item_id,
        expected,
        name,
        request.content.as_ref(),
    )
    .await?;

    Ok((StatusCode::OK, [(ETAG, etag_header(item.version)?)], Json(item)).into_response())
}

/// DELETE /api/items/{item_id}
pub async fn delete_item(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let item_id: ItemId = item_id.parse()?;
    db::delete_item(&pool, user.user_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
