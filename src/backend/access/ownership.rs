/**
 * Ownership Invariant
 *
 * Every item keeps at least one owner. The rule itself lives in the
 * `guard_last_owner` trigger installed by the migrations, which runs inside
 * the statement that deletes or demotes an owner assignment and locks the
 * parent item row first. Concurrent demotions of the last two owners
 * therefore serialise on that lock and the second one fails.
 *
 * Callers that change assignments take the same item lock up front with
 * [`lock_item`]. Deleting an item locks the item row before its cascade
 * reaches `user_roles`, so every path acquires the two in one order.
 *
 * This module recognises the trigger's failure and exposes the owner count
 * for callers and tests that want to observe the invariant.
 */

use sqlx::PgExecutor;
use crate::shared::ItemId;

/// SQLSTATE raised by the `guard_last_owner` trigger
pub const LAST_OWNER_SQLSTATE: &str = "OWN01";

/// Whether `err` is the ownership guard rejecting a statement
pub fn is_last_owner_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(LAST_OWNER_SQLSTATE),
        _ => false,
    }
}

/// Lock an item row for the rest of the transaction
///
/// Returns `false` when the item no longer exists, which includes an item
/// deleted by a transaction this one waited on.
pub async fn lock_item<'e, E>(executor: E, item_id: ItemId) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let locked = sqlx::query_scalar::<_, i32>("SELECT 1 FROM items WHERE item_id = $1 FOR UPDATE")
        .bind(item_id)
        .fetch_optional(executor)
        .await?;
    Ok(locked.is_some())
}

/// Number of owner assignments on an item
pub async fn count_owners<'e, E>(executor: E, item_id: ItemId) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM user_roles ur
        JOIN roles r ON r.role_id = ur.role_id
        WHERE ur.item_id = $1 AND r.name = 'owner'
        "#,
    )
    .bind(item_id)
    .fetch_one(executor)
    .await
}
