/**
 * Todo Database Operations
 *
 * Todos have no access control of their own. Every function authorizes the
 * caller against the parent item on the connection it then queries, and
 * every query is scoped by `item_id` so a todo can only be reached through
 * the item it belongs to.
 */

use sqlx::PgPool;
use crate::backend::access::authorize;
use crate::backend::error::BackendError;
use crate::shared::todos::TodoRequest;
use crate::shared::{ItemId, Permission, Todo, TodoId, UserId};

const TODO_COLUMNS: &str = "todo_id, item_id, title, body, done, created_at, updated_at";

fn todo_not_found() -> BackendError {
    BackendError::not_found("Todo not found")
}

/// Todos of an item, oldest first
pub async fn list_todos(pool: &PgPool, user_id: UserId, item_id: ItemId) -> Result<Vec<Todo>, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanView).await?;

    let todos = sqlx::query_as::<_, Todo>(&format!(
        "SELECT {} FROM todos WHERE item_id = $1 ORDER BY created_at, todo_id",
        TODO_COLUMNS
    ))
    .bind(item_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(todos)
}

/// Add a todo to an item
///
/// # Arguments
/// * `request` - Already validated todo fields
pub async fn create_todo(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    request: &TodoRequest,
) -> Result<Todo, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanEdit).await?;

    let todo = sqlx::query_as::<_, Todo>(&format!(
        "INSERT INTO todos (item_id, title, body, done) VALUES ($1, $2, $3, $4) RETURNING {}",
        TODO_COLUMNS
    ))
    .bind(item_id)
    .bind(request.title.trim())
    .bind(request.body.as_deref())
    .bind(request.done)
    .fetch_one(&mut *conn)
    .await?;

    tracing::info!(%item_id, todo_id = %todo.todo_id, "Todo created");
    Ok(todo)
}

pub async fn get_todo(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    todo_id: TodoId,
) -> Result<Todo, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanView).await?;

    sqlx::query_as::<_, Todo>(&format!(
        "SELECT {} FROM todos WHERE item_id = $1 AND todo_id = $2",
        TODO_COLUMNS
    ))
    .bind(item_id)
    .bind(todo_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(todo_not_found)
}

/// Replace a todo's title, body and done flag
pub async fn update_todo(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    todo_id: TodoId,
    request: &TodoRequest,
) -> Result<Todo, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanEdit).await?;

    sqlx::query_as::<_, Todo>(&format!(
        r#"
        UPDATE todos
        SET title = $3, body = $4, done = $5, updated_at = NOW()
        WHERE item_id = $1 AND todo_id = $2
        RETURNING {}
        "#,
        TODO_COLUMNS
    ))
    .bind(item_id)
    .bind(todo_id)
    .bind(request.title.trim())
    .bind(request.body.as_deref())
    .bind(request.done)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(todo_not_found)
}

/// Mark a todo done; marking it again is a no-op
pub async fn mark_done(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    todo_id: TodoId,
) -> Result<Todo, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanEdit).await?;

    sqlx::query_as::<_, Todo>(&format!(
        r#"
        UPDATE todos
        SET done = TRUE, updated_at = NOW()
        WHERE item_id = $1 AND todo_id = $2
        RETURNING {}
        "#,
        TODO_COLUMNS
    ))
    .bind(item_id)
    .bind(todo_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(todo_not_found)
}

pub async fn delete_todo(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    todo_id: TodoId,
) -> Result<(), BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanEdit).await?;

    let deleted = sqlx::query("DELETE FROM todos WHERE item_id = $1 AND todo_id = $2")
        .bind(item_id)
        .bind(todo_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(todo_not_found());
    }
    Ok(())
}
