/**
 * Role Assignments
 *
 * Reads and writes of the `user_roles` relation. Callers are expected to
 * have authorized the actor already; nothing here checks permissions.
 * Deletes and demotions are still subject to the ownership trigger, which
 * surfaces as `BackendError::LastOwner`.
 */

use sqlx::PgExecutor;
use crate::backend::error::BackendError;
use crate::shared::{ItemId, Role, RoleAssignment, UserId};

/// Grant `role` to `user_id` on `item_id`, replacing any existing role
///
/// Idempotent: repeating the call leaves a single row with that role.
/// `granted_by` is recorded as the assignment's `created_by`.
///
/// # Errors
///
/// - `LastOwner` when the upsert would demote the item's only owner
/// - `DatabaseError` on foreign-key violations or query failure
pub async fn upsert_assignment<'e, E>(
    executor: E,
    item_id: ItemId,
    user_id: UserId,
    role: Role,
    granted_by: UserId,
) -> Result<RoleAssignment, BackendError>
where
    E: PgExecutor<'e>,
{
    let assignment = sqlx::query_as::<_, RoleAssignment>(
        r#"
        WITH upserted AS (
            INSERT INTO user_roles (item_id, user_id, role_id, created_by)
            SELECT $1, $2, r.role_id, $4
            FROM roles r
            WHERE r.name = $3
            ON CONFLICT (item_id, user_id)
            DO UPDATE SET role_id = EXCLUDED.role_id, created_by = EXCLUDED.created_by
            RETURNING item_id, user_id, role_id, created_by, created_at
        )
        SELECT
            up.item_id,
            up.user_id,
            r.name AS role,
            u.email,
            u.username,
            up.created_by,
            up.created_at
        FROM upserted up
        JOIN roles r ON r.role_id = up.role_id
        JOIN users u ON u.user_id = up.user_id
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .bind(role.as_str())
    .bind(granted_by)
    .fetch_one(executor)
    .await?;

    Ok(assignment)
}

/// Remove `user_id`'s role on `item_id`
///
/// # Returns
///
/// `false` if the user held no role.
pub async fn remove_assignment<'e, E>(
    executor: E,
    item_id: ItemId,
    user_id: UserId,
) -> Result<bool, BackendError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM user_roles WHERE item_id = $1 AND user_id = $2")
        .bind(item_id)
        .bind(user_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Every assignment on an item, oldest first
pub async fn list_assignments<'e, E>(
    executor: E,
    item_id: ItemId,
) -> Result<Vec<RoleAssignment>, BackendError>
where
    E: PgExecutor<'e>,
{
    let assignments = sqlx::query_as::<_, RoleAssignment>(
        r#"
        SELECT
            ur.item_id,
            ur.user_id,
            r.name AS role,
            u.email,
            u.username,
            ur.created_by,
            ur.created_at
        FROM user_roles ur
        JOIN roles r ON r.role_id = ur.role_id
        JOIN users u ON u.user_id = ur.user_id
        WHERE ur.item_id = $1
        ORDER BY ur.created_at, ur.user_id
        "#,
    )
    .bind(item_id)
    .fetch_all(executor)
    .await?;

    Ok(assignments)
}
