//! Role resolution and permission gating against a real database

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use sharelist::backend::access::assignments::upsert_assignment;
use sharelist::backend::access::{authorize, permissions_for};
use sharelist::backend::error::BackendError;
use sharelist::backend::items::db::{delete_item, get_item};
use sharelist::backend::todos::db::create_todo;
use sharelist::shared::todos::TodoRequest;
use sharelist::shared::{Permission, Role};

use super::seed_item;
use crate::common::create_test_user;

#[tokio::test]
async fn test_non_member_sees_not_found() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let stranger = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Private").await;

    let result = get_item(db.pool(), stranger.id, item.item_id).await;
    assert_matches!(result, Err(BackendError::NotFound(_)));

    let result = authorize(db.pool(), stranger.id, item.item_id, Permission::CanView).await;
    assert_matches!(result, Err(BackendError::NotFound(_)));
}

#[tokio::test]
async fn test_viewer_can_view_but_not_edit() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let viewer = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Read only").await;

    assert_ok!(upsert_assignment(db.pool(), item.item_id, viewer.id, Role::Viewer, owner.id).await);

    let detail = assert_ok!(get_item(db.pool(), viewer.id, item.item_id).await);
    assert_eq!(detail.access.role, Role::Viewer);
    assert_eq!(detail.permissions, vec![Permission::CanView]);

    let request = TodoRequest {
        title: "Sneaky".into(),
        body: None,
        done: false,
    };
    let result = create_todo(db.pool(), viewer.id, item.item_id, &request).await;
    assert_matches!(result, Err(BackendError::Forbidden(_)));
}

#[tokio::test]
async fn test_permissions_follow_role() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let editor = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Roles").await;

    assert_ok!(upsert_assignment(db.pool(), item.item_id, editor.id, Role::Editor, owner.id).await);

    let owner_perms = assert_ok!(permissions_for(db.pool(), owner.id, item.item_id).await);
    assert_eq!(owner_perms, Permission::ALL.to_vec());

    let editor_perms = assert_ok!(permissions_for(db.pool(), editor.id, item.item_id).await);
    assert_eq!(editor_perms, vec![Permission::CanView, Permission::CanEdit]);

    let role = assert_ok!(authorize(db.pool(), editor.id, item.item_id, Permission::CanEdit).await);
    assert_eq!(role, Role::Editor);

    let result = authorize(db.pool(), editor.id, item.item_id, Permission::CanShare).await;
    assert_matches!(result, Err(BackendError::Forbidden(_)));
}

#[tokio::test]
async fn test_editor_can_delete() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let editor = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Disposable").await;

    assert_ok!(upsert_assignment(db.pool(), item.item_id, editor.id, Role::Editor, owner.id).await);
    assert_ok!(delete_item(db.pool(), editor.id, item.item_id).await);

    let result = get_item(db.pool(), owner.id, item.item_id).await;
    assert_matches!(result, Err(BackendError::NotFound(_)));
}

#[tokio::test]
async fn test_viewer_cannot_delete() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let viewer = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Keep").await;

    assert_ok!(upsert_assignment(db.pool(), item.item_id, viewer.id, Role::Viewer, owner.id).await);

    let result = delete_item(db.pool(), viewer.id, item.item_id).await;
    assert_matches!(result, Err(BackendError::Forbidden(_)));
}
