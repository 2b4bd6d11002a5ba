//! Share, list and revoke

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use sharelist::backend::error::BackendError;
use sharelist::backend::items::db::list_items;
use sharelist::backend::sharing::workflow::{list_shares, revoke_access, share_item};
use sharelist::shared::{Role, ShareRequest};

use super::seed_item;
use crate::common::create_test_user;

fn share(user_id: i64, role: &str) -> ShareRequest {
    ShareRequest {
        user_id,
        role: role.to_string(),
    }
}

#[tokio::test]
async fn test_share_is_idempotent() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let friend = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Party").await;

    let request = share(friend.id.0, "viewer");
    let first = assert_ok!(share_item(db.pool(), owner.id, item.item_id, &request).await);
    let second = assert_ok!(share_item(db.pool(), owner.id, item.item_id, &request).await);

    assert_eq!(first.role, Role::Viewer);
    assert_eq!(second.role, Role::Viewer);
    assert_eq!(second.email, friend.email);
    assert_eq!(second.created_by, Some(owner.id));

    let shares = assert_ok!(list_shares(db.pool(), owner.id, item.item_id).await);
    assert_eq!(shares.len(), 2);
}

#[tokio::test]
async fn test_share_updates_existing_role() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let friend = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Trip").await;

    assert_ok!(share_item(db.pool(), owner.id, item.item_id, &share(friend.id.0, "viewer")).await);
    let promoted = assert_ok!(share_item(db.pool(), owner.id, item.item_id, &share(friend.id.0, "editor")).await);
    assert_eq!(promoted.role, Role::Editor);

    let items = assert_ok!(list_items(db.pool(), friend.id).await);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].role, Role::Editor);
}

#[tokio::test]
async fn test_share_with_unknown_user() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Lonely").await;

    let result = share_item(db.pool(), owner.id, item.item_id, &share(i64::MAX, "viewer")).await;
    assert_matches!(result, Err(BackendError::NotFound(message)) if message == "User not found");
}

#[tokio::test]
async fn test_share_rejects_owner_role() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let friend = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Mine").await;

    let result = share_item(db.pool(), owner.id, item.item_id, &share(friend.id.0, "owner")).await;
    assert_matches!(result, Err(BackendError::SharedError(_)));
}

#[tokio::test]
async fn test_editor_cannot_share() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let editor = create_test_user(db.pool()).await;
    let other = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Team").await;

    assert_ok!(share_item(db.pool(), owner.id, item.item_id, &share(editor.id.0, "editor")).await);

    let result = share_item(db.pool(), editor.id, item.item_id, &share(other.id.0, "viewer")).await;
    assert_matches!(result, Err(BackendError::Forbidden(_)));
}

#[tokio::test]
async fn test_viewer_can_list_shares() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let viewer = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Visible").await;

    assert_ok!(share_item(db.pool(), owner.id, item.item_id, &share(viewer.id.0, "viewer")).await);

    let shares = assert_ok!(list_shares(db.pool(), viewer.id, item.item_id).await);
    let roles: Vec<Role> = shares.iter().map(|s| s.role).collect();
    assert_eq!(roles, vec![Role::Owner, Role::Viewer]);
}

#[tokio::test]
async fn test_viewer_can_leave() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let viewer = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Leaving").await;

    assert_ok!(share_item(db.pool(), owner.id, item.item_id, &share(viewer.id.0, "viewer")).await);
    assert_ok!(revoke_access(db.pool(), viewer.id, item.item_id, viewer.id).await);

    let items = assert_ok!(list_items(db.pool(), viewer.id).await);
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_editor_cannot_revoke_others() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let editor = create_test_user(db.pool()).await;
    let viewer = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Guarded").await;

    assert_ok!(share_item(db.pool(), owner.id, item.item_id, &share(editor.id.0, "editor")).await);
    assert_ok!(share_item(db.pool(), owner.id, item.item_id, &share(viewer.id.0, "viewer")).await);

    let result = revoke_access(db.pool(), editor.id, item.item_id, viewer.id).await;
    assert_matches!(result, Err(BackendError::Forbidden(_)));
}

#[tokio::test]
async fn test_revoke_without_role_is_not_found() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let stranger = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Solo").await;

    let result = revoke_access(db.pool(), owner.id, item.item_id, stranger.id).await;
    assert_matches!(result, Err(BackendError::NotFound(_)));
}
