/**
 * Item Database Operations
 *
 * Persistence for items, including the optimistic-locking edit path.
 *
 * # Transactions
 *
 * Creating, editing and deleting an item each run in one transaction, and
 * the caller's permission is evaluated on that same transaction. A
 * `sqlx::Transaction` that is dropped without `commit()` rolls back, so every
 * early return below leaves the database untouched.
 *
 * # Versioning
 *
 * `version` starts at 1 and an edit only applies when the client names the
 * current version. Stale edits are reported as `VersionConflict` together
 * with the version the client should re-read.
 */

use sqlx::{PgExecutor, PgPool};
use crate::backend::access::assignments::upsert_assignment;
use crate::backend::access::{authorize, permissions_for};
use crate::backend::error::BackendError;
use crate::shared::items::ItemDetail;
use crate::shared::{Item, ItemId, ItemWithAccess, Permission, Role, UserId};

const ITEM_COLUMNS: &str = "item_id, name, content, version, created_at, updated_at";

/// Create an item owned by `owner`
///
/// The item row and the owner assignment are written in one transaction.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner` - The creating user, who becomes the item's owner
/// * `name` - Validated item name
/// * `content` - Initial JSON content
///
/// # Returns
/// The created item, at version 1
pub async fn create_item(
    pool: &PgPool,
    owner: UserId,
    name: &str,
    content: &serde_json::Value,
) -> Result<Item, BackendError> {
    let mut tx = pool.begin().await?;

    let item = sqlx::query_as::<_, Item>(&format!(
        "INSERT INTO items (name, content) VALUES ($1, $2) RETURNING {}",
        ITEM_COLUMNS
    ))
    .bind(name)
    .bind(content)
    .fetch_one(&mut *tx)
    .await?;

    upsert_assignment(&mut *tx, item.item_id, owner, Role::Owner, owner).await?;

    tx.commit().await?;

    tracing::info!(item_id = %item.item_id, %owner, "Item created");
    Ok(item)
}

/// Every item the user holds a role on, newest first
///
/// `shared_by` is the email of whoever granted the role; it is omitted for
/// owners.
pub async fn list_items(pool: &PgPool, user_id: UserId) -> Result<Vec<ItemWithAccess>, BackendError> {
    let items = sqlx::query_as::<_, ItemWithAccess>(
        r#"
        SELECT
            i.item_id, i.name, i.content, i.version, i.created_at, i.updated_at,
            r.name AS role,
            CASE WHEN r.name = 'owner' THEN NULL ELSE u.email END AS shared_by
        FROM items i
        JOIN user_roles ur ON ur.item_id = i.item_id
        JOIN roles r ON r.role_id = ur.role_id
        LEFT JOIN users u ON u.user_id = ur.created_by
        WHERE ur.user_id = $1
        ORDER BY i.created_at DESC, i.item_id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

async fn fetch_with_access<'e, E>(
    executor: E,
    user_id: UserId,
    item_id: ItemId,
) -> Result<Option<ItemWithAccess>, BackendError>
where
    E: PgExecutor<'e>,
{
    let item = sqlx::query_as::<_, ItemWithAccess>(
        r#"
        SELECT
            i.item_id, i.name, i.content, i.version, i.created_at, i.updated_at,
            r.name AS role,
            CASE WHEN r.name = 'owner' THEN NULL ELSE u.email END AS shared_by
        FROM items i
        JOIN user_roles ur ON ur.item_id = i.item_id
        JOIN roles r ON r.role_id = ur.role_id
        LEFT JOIN users u ON u.user_id = ur.created_by
        WHERE i.item_id = $1 AND ur.user_id = $2
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(item)
}

/// Read one item with the caller's role and effective permissions
///
/// # Errors
/// `NotFound` if the caller has no role on the item
pub async fn get_item(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
) -> Result<ItemDetail, BackendError> {
    let mut conn = pool.acquire().await?;

    authorize(&mut *conn, user_id, item_id, Permission::CanView).await?;

    let access = fetch_with_access(&mut *conn, user_id, item_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Item not found"))?;
    let permissions = permissions_for(&mut *conn, user_id, item_id).await?;

    Ok(ItemDetail { access, permissions })
}

/// Apply an edit if `expected_version` is still current
///
/// `content` of `None` keeps the stored content.
///
/// # Returns
/// The updated item; its version is `expected_version + 1`
///
/// # Errors
/// - `NotFound` if the caller has no role or the item vanished
/// - `Forbidden` if the caller's role lacks `can_edit`
/// - `VersionConflict` if another edit landed first
pub async fn edit_item(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    expected_version: i32,
    name: &str,
    content: Option<&serde_json::Value>,
) -> Result<Item, BackendError> {
    let mut tx = pool.begin().await?;

    authorize(&mut *tx, user_id, item_id, Permission::CanEdit).await?;

    let updated = sqlx::query_as::<_, Item>(&format!(
        r#"
        UPDATE items
        SET name = $3,
            content = COALESCE($4, content),
            version = version + 1,
            updated_at = NOW()
        WHERE item_id = $1 AND version = $2
        RETURNING {}
        "#,
        ITEM_COLUMNS
    ))
    .bind(item_id)
    .bind(expected_version)
    .bind(name)
    .bind(content)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(item) = updated else {
        let current = current_version(&mut *tx, item_id).await?;
        return match current {
            None => Err(BackendError::not_found("Item not found")),
            Some(current) => {
                tracing::warn!(
                    %item_id,
                    expected = expected_version,
                    current,
                    "Rejected stale edit"
                );
                Err(BackendError::VersionConflict {
                    item_id,
                    expected: expected_version,
                    current,
                })
            }
        };
    };

    tx.commit().await?;

    tracing::info!(%item_id, version = item.version, "Item updated");
    Ok(item)
}

/// Current version of an item, `None` if it does not exist
pub async fn current_version<'e, E>(executor: E, item_id: ItemId) -> Result<Option<i32>, BackendError>
where
    E: PgExecutor<'e>,
{
    let version = sqlx::query_scalar::<_, i32>("SELECT version FROM items WHERE item_id = $1")
        .bind(item_id)
        .fetch_optional(executor)
        .await?;
    Ok(version)
}

/// Delete an item and everything attached to it
///
/// Todos and notes are removed first, then the item row. Role assignments
/// go with the item through the foreign-key cascade; the ownership guard
/// lets those through because the parent row is already gone.
///
/// # Errors
/// - `NotFound` if the caller has no role on the item
/// - `Forbidden` if the caller's role lacks `can_edit`
pub async fn delete_item(pool: &PgPool, user_id: UserId, item_id: ItemId) -> Result<(), BackendError> {
    let mut tx = pool.begin().await?;

    authorize(&mut *tx, user_id, item_id, Permission::CanEdit).await?;

    let todos = sqlx::query("DELETE FROM todos WHERE item_id = $1")
        .bind(item_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let notes = sqlx::query("DELETE FROM notes WHERE item_id = $1")
        .bind(item_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let deleted = sqlx::query("DELETE FROM items WHERE item_id = $1")
        .bind(item_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(BackendError::not_found("Item not found"));
    }

    tx.commit().await?;

    tracing::info!(%item_id, todos, notes, "Item deleted");
    Ok(())
}
