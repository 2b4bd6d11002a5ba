/**
 * Access Control Evaluator
 *
 * Decides whether a user may perform an action on an item by resolving the
 * user's role through `user_roles ⋈ roles ⋈ role_permissions ⋈ permissions`.
 *
 * # Outcomes
 *
 * - No role on the item: `NotFound`. The response is the same as for an
 *   item that does not exist.
 * - A role without the permission: `Forbidden`.
 * - Otherwise the caller's role is returned.
 *
 * Every function is generic over the executor so that mutating operations
 * can evaluate on the same transaction that performs the write.
 */

use std::str::FromStr;
use sqlx::PgExecutor;
use crate::backend::error::BackendError;
use crate::shared::{ItemId, Permission, Role, UserId};

#[derive(Debug, sqlx::FromRow)]
struct AccessRow {
    role: String,
    granted: bool,
}

/// Authorize `user_id` for `permission` on `item_id`
///
/// # Returns
///
/// The caller's role on the item.
///
/// # Errors
///
/// - `NotFound` if the user holds no role on the item (or it does not exist)
/// - `Forbidden` if the role does not grant `permission`
/// - `DatabaseError` on query failure
pub async fn authorize<'e, E>(
    executor: E,
    user_id: UserId,
    item_id: ItemId,
    permission: Permission,
) -> Result<Role, BackendError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, AccessRow>(
        r#"
        SELECT
            r.name AS role,
            EXISTS (
                SELECT 1
                FROM role_permissions rp
                JOIN permissions p ON p.permission_id = rp.permission_id
                WHERE rp.role_id = ur.role_id AND p.name = $3
            ) AS granted
        FROM user_roles ur
        JOIN roles r ON r.role_id = ur.role_id
        WHERE ur.item_id = $1 AND ur.user_id = $2
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .bind(permission.as_str())
    .fetch_optional(executor)
    .await?;

    let Some(row) = row else {
        tracing::warn!(%user_id, %item_id, %permission, "No role on item");
        return Err(BackendError::not_found("Item not found"));
    };

    if !row.granted {
        tracing::warn!(%user_id, %item_id, %permission, role = %row.role, "Permission denied");
        return Err(BackendError::forbidden(format!(
            "Permission '{}' required",
            permission
        )));
    }

    Ok(Role::from_str(&row.role)?)
}

/// Effective permissions of `user_id` on `item_id`
///
/// Empty when the user holds no role.
pub async fn permissions_for<'e, E>(
    executor: E,
    user_id: UserId,
    item_id: ItemId,
) -> Result<Vec<Permission>, BackendError>
where
    E: PgExecutor<'e>,
{
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT p.name
        FROM user_roles ur
        JOIN role_permissions rp ON rp.role_id = ur.role_id
        JOIN permissions p ON p.permission_id = rp.permission_id
        WHERE ur.item_id = $1 AND ur.user_id = $2
        ORDER BY p.permission_id
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .fetch_all(executor)
    .await?;

    let mut permissions = names
        .iter()
        .map(|name| Permission::from_str(name))
        .collect::<Result<Vec<_>, _>>()?;
    permissions.sort();
    Ok(permissions)
}
