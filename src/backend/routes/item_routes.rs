/**
 * Item Route Handlers
 *
 * Every route here is item-scoped or lists the caller's items, and all of
 * them require authentication. Permission checks happen per item inside
 * the handlers, on the connection that performs the work.
 *
 * # Routes
 *
 * - `GET|POST /api/items`
 * - `GET|PUT|DELETE /api/items/{item_id}`
 * - `GET|POST /api/items/{item_id}/share`
 * - `DELETE /api/items/{item_id}/share/{user_id}`
 * - `GET|POST /api/items/{item_id}/todos`
 * - `GET|PUT|DELETE /api/items/{item_id}/todos/{todo_id}`
 * - `PATCH /api/items/{item_id}/todos/{todo_id}/done`
 * - `GET|POST /api/items/{item_id}/notes`
 * - `GET|PUT|DELETE /api/items/{item_id}/notes/{note_id}`
 */

use axum::{
    routing::{get, patch},
    Router,
};
#[cfg(feature = "ssr")]
use crate::backend::items::handlers as items;
#[cfg(feature = "ssr")]
use crate::backend::notes::handlers as notes;
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;
#[cfg(feature = "ssr")]
use crate::backend::sharing::handlers as sharing;
#[cfg(feature = "ssr")]
use crate::backend::todos::handlers as todos;

/// Item, sharing, todo and note routes
#[cfg(feature = "ssr")]
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(items::list_items).post(items::create_item))
        .route(
            "/api/items/{item_id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route(
            "/api/items/{item_id}/share",
            get(sharing::list_shares).post(sharing::share_item),
        )
        .route(
            "/api/items/{item_id}/share/{user_id}",
            axum::routing::delete(sharing::revoke_access),
        )
        .route(
            "/api/items/{item_id}/todos",
            get(todos::list_todos).post(todos::create_todo),
        )
        .route(
            "/api/items/{item_id}/todos/{todo_id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route(
            "/api/items/{item_id}/todos/{todo_id}/done",
            patch(todos::mark_done),
        )
        .route(
            "/api/items/{item_id}/notes",
            get(notes::list_notes).post(notes::create_note),
        )
        .route(
            "/api/items/{item_id}/notes/{note_id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
}
