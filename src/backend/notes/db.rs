use sqlx::PgPool;
use crate::backend::access::authorize;
use crate::backend::error::BackendError;
use crate::shared::{ItemId, Note, NoteId, Permission, UserId};

const NOTE_COLUMNS: &str = "note_id, item_id, content, created_at, updated_at";

fn note_not_found() -> BackendError {
    BackendError::not_found("Note not found")
}

pub async fn list_notes(pool: &PgPool, user_id: UserId, item_id: ItemId) -> Result<Vec<Note>, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanView).await?;

    let notes = sqlx::query_as::<_, Note>(&format!(
        "SELECT {} FROM notes WHERE item_id = $1 ORDER BY created_at, note_id",
        NOTE_COLUMNS
    ))
    .bind(item_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(notes)
}

pub async fn create_note(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    content: &str,
) -> Result<Note, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanEdit).await?;

    let note = sqlx::query_as::<_, Note>(&format!(
        "INSERT INTO notes (item_id, content) VALUES ($1, $2) RETURNING {}",
        NOTE_COLUMNS
    ))
    .bind(item_id)
    .bind(content)
    .fetch_one(&mut *conn)
    .await?;

    tracing::info!(%item_id, note_id = %note.note_id, "Note created");
    Ok(note)
}

pub async fn get_note(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    note_id: NoteId,
) -> Result<Note, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanView).await?;

    sqlx::query_as::<_, Note>(&format!(
        "SELECT {} FROM notes WHERE item_id = $1 AND note_id = $2",
        NOTE_COLUMNS
    ))
    .bind(item_id)
    .bind(note_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(note_not_found)
}

pub async fn update_note(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    note_id: NoteId,
    content: &str,
) -> Result<Note, BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanEdit).await?;

    sqlx::query_as::<_, Note>(&format!(
        r#"
        UPDATE notes
        SET content = $3, updated_at = NOW()
        WHERE item_id = $1 AND note_id = $2
        RETURNING {}
        "#,
        NOTE_COLUMNS
    ))
    .bind(item_id)
    .bind(note_id)
    .bind(content)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(note_not_found)
}

pub async fn delete_note(
    pool: &PgPool,
    user_id: UserId,
    item_id: ItemId,
    note_id: NoteId,
) -> Result<(), BackendError> {
    let mut conn = pool.acquire().await?;
    authorize(&mut *conn, user_id, item_id, Permission::CanEdit).await?;

    let deleted = sqlx::query("DELETE FROM notes WHERE item_id = $1 AND note_id = $2")
        .bind(item_id)
        .bind(note_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(note_not_found());
    }
    Ok(())
}
