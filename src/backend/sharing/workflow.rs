/**
 * Sharing Workflow
 *
 * Grants, lists and revokes roles on an item.
 *
 * # Process
 *
 * 1. The request body is validated before any transaction opens
 *    (`editor`/`viewer` only; ownership comes from creating the item)
 * 2. The actor is authorized for `can_share` on the same transaction
 * 3. The item row is locked, so the ownership guard and a concurrent item
 *    delete take their locks in the same order
 * 4. The target user must exist
 * 5. The assignment is upserted and the transaction committed
 *
 * Repeating a share with the same arguments leaves one row with that role.
 */

use sqlx::{PgPool, Postgres, Transaction};
use crate::backend::access::assignments::{list_assignments, remove_assignment, upsert_assignment};
use crate::backend::access::authorize;
use crate::backend::access::ownership::lock_item;
use crate::backend::auth::users::user_exists;
use crate::backend::error::BackendError;
use crate::shared::{ItemId, Permission, RoleAssignment, ShareRequest, UserId};

async fn lock_or_not_found(
    tx: &mut Transaction<'static, Postgres>,
    item_id: ItemId,
) -> Result<(), BackendError> {
    if lock_item(&mut **tx, item_id).await? {
        Ok(())
    } else {
        Err(BackendError::not_found("Item not found"))
    }
}

/// Share `item_id` with the user named in `request`
///
/// # Errors
/// - `SharedError` (400) for a missing user ID or a role other than editor/viewer
/// - `NotFound` if the actor has no role on the item, or the target user does not exist
/// - `Forbidden` if the actor lacks `can_share`
/// - `LastOwner` if the target is the item's only owner (the upsert would demote them)
pub async fn share_item(
    pool: &PgPool,
    actor: UserId,
    item_id: ItemId,
    request: &ShareRequest,
) -> Result<RoleAssignment, BackendError> {
    let (target, role) = request.validate()?;

    let mut tx = pool.begin().await?;

    authorize(&mut *tx, actor, item_id, Permission::CanShare).await?;
    lock_or_not_found(&mut tx, item_id).await?;

    if !user_exists(&mut *tx, target).await? {
        tracing::warn!(%item_id, %target, "Share target does not exist");
        return Err(BackendError::not_found("User not found"));
    }

    let assignment = upsert_assignment(&mut *tx, item_id, target, role, actor).await?;

    tx.commit().await?;

    tracing::info!(%item_id, %actor, %target, %role, "Item shared");
    Ok(assignment)
}

/// Every role assignment on an item
///
/// Requires `can_view`: anyone with access can see who else has it.
pub async fn list_shares(
    pool: &PgPool,
    actor: UserId,
    item_id: ItemId,
) -> Result<Vec<RoleAssignment>, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, actor, item_id, Permission::CanView).await?;
    list_assignments(&mut *conn, item_id).await
}

/// Remove `target`'s role on `item_id`
///
/// Removing someone else requires `can_share`. Any member may remove
/// themselves, which only needs a role on the item. The last owner can do
/// neither; that surfaces as `LastOwner`.
///
/// # Errors
/// - `NotFound` if the actor has no role, or the target holds none
/// - `Forbidden` if the actor lacks `can_share` and is not the target
/// - `LastOwner` if `target` is the only owner
pub async fn revoke_access(
    pool: &PgPool,
    actor: UserId,
    item_id: ItemId,
    target: UserId,
) -> Result<(), BackendError> {
    let required = if actor == target {
        Permission::CanView
    } else {
        Permission::CanShare
    };

    let mut tx = pool.begin().await?;

    authorize(&mut *tx, actor, item_id, required).await?;
    lock_or_not_found(&mut tx, item_id).await?;

    if !remove_assignment(&mut *tx, item_id, target).await? {
        return Err(BackendError::not_found("User has no access to this item"));
    }

    tx.commit().await?;

    tracing::info!(%item_id, %actor, %target, "Access revoked");
    Ok(())
}
