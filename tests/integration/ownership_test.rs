//! The last-owner guard
//!
//! The database refuses any statement that would leave an item without an
//! owner. These tests drive it through the sharing workflow and through raw
//! assignment upserts, which is the only way a second owner can appear.

use std::time::Duration;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use sharelist::backend::access::assignments::upsert_assignment;
use sharelist::backend::access::ownership::count_owners;
use sharelist::backend::error::BackendError;
use sharelist::backend::items::db::{edit_item, get_item};
use sharelist::backend::sharing::workflow::{revoke_access, share_item};
use sharelist::shared::{Role, ShareRequest};

use super::seed_item;
use crate::common::create_test_user;

#[tokio::test]
async fn test_sole_owner_cannot_leave() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Anchored").await;

    let result = revoke_access(db.pool(), owner.id, item.item_id, owner.id).await;
    assert_matches!(result, Err(BackendError::LastOwner { .. }));
    assert_eq!(assert_ok!(count_owners(db.pool(), item.item_id).await), 1);
}

#[tokio::test]
async fn test_sole_owner_cannot_demote_self() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Anchored").await;

    let request = ShareRequest {
        user_id: owner.id.0,
        role: "editor".to_string(),
    };
    let result = share_item(db.pool(), owner.id, item.item_id, &request).await;
    assert_matches!(result, Err(BackendError::LastOwner { .. }));

    let detail = assert_ok!(get_item(db.pool(), owner.id, item.item_id).await);
    assert_eq!(detail.access.role, Role::Owner);
}

/// Viewer cannot edit; a stale editor write is rejected with the current
/// version
#[tokio::test]
async fn test_viewer_then_stale_writer() {
    let db = require_db!();
    let owner = create_test_user(db.pool()).await;
    let viewer = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), owner.id, "Shopping").await;

    let request = ShareRequest {
        user_id: viewer.id.0,
        role: "viewer".to_string(),
    };
    assert_ok!(share_item(db.pool(), owner.id, item.item_id, &request).await);

    let result = edit_item(db.pool(), viewer.id, item.item_id, 1, "Hijacked", None).await;
    assert_matches!(result, Err(BackendError::Forbidden(_)));

    let edited = assert_ok!(edit_item(db.pool(), owner.id, item.item_id, 1, "Shopping v2", None).await);
    assert_eq!(edited.version, 2);

    let result = edit_item(db.pool(), owner.id, item.item_id, 1, "Shopping v1 again", None).await;
    assert_matches!(result, Err(BackendError::VersionConflict { current: 2, .. }));
}

#[tokio::test]
async fn test_co_owners_remove_each_other_down_to_one() {
    let db = require_db!();
    let alice = create_test_user(db.pool()).await;
    let bob = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), alice.id, "Joint").await;

    assert_ok!(upsert_assignment(db.pool(), item.item_id, bob.id, Role::Owner, alice.id).await);
    assert_eq!(assert_ok!(count_owners(db.pool(), item.item_id).await), 2);

    assert_ok!(revoke_access(db.pool(), alice.id, item.item_id, bob.id).await);

    let result = revoke_access(db.pool(), alice.id, item.item_id, alice.id).await;
    assert_matches!(result, Err(BackendError::LastOwner { .. }));
    assert_eq!(assert_ok!(count_owners(db.pool(), item.item_id).await), 1);
}

#[tokio::test]
async fn test_concurrent_mutual_revoke_keeps_an_owner() {
    let db = require_db!();
    let alice = create_test_user(db.pool()).await;
    let bob = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), alice.id, "Contested").await;

    assert_ok!(upsert_assignment(db.pool(), item.item_id, bob.id, Role::Owner, alice.id).await);

    let pool_a = db.pool().clone();
    let pool_b = db.pool().clone();
    let item_id = item.item_id;
    let (a, b) = (alice.id, bob.id);

    let (first, second) = tokio::join!(
        tokio::spawn(async move { revoke_access(&pool_a, a, item_id, b).await }),
        tokio::spawn(async move { revoke_access(&pool_b, b, item_id, a).await }),
    );
    let outcomes = [first.expect("task panicked"), second.expect("task panicked")];

    let succeeded = outcomes.iter().filter(|r| r.is_ok()).count();
    assert_eq!(succeeded, 1, "outcomes: {:?}", outcomes);
    for outcome in outcomes.iter().filter(|r| r.is_err()) {
        assert_matches!(
            outcome,
            Err(BackendError::LastOwner { .. }) | Err(BackendError::NotFound(_))
        );
    }

    assert_eq!(assert_ok!(count_owners(db.pool(), item.item_id).await), 1);
}

/// A revoke that starts while an item delete holds the item row waits for
/// the delete and then finds nothing, instead of deadlocking with the
/// delete's cascade over `user_roles`.
#[tokio::test]
async fn test_revoke_during_item_delete_waits_for_it() {
    let db = require_db!();
    let alice = create_test_user(db.pool()).await;
    let bob = create_test_user(db.pool()).await;
    let item = seed_item(db.pool(), alice.id, "Vanishing").await;

    assert_ok!(upsert_assignment(db.pool(), item.item_id, bob.id, Role::Owner, alice.id).await);

    let mut deleter = assert_ok!(db.pool().begin().await);
    assert_ok!(
        sqlx::query("SELECT 1 FROM items WHERE item_id = $1 FOR UPDATE")
            .bind(item.item_id)
            .execute(&mut *deleter)
            .await
    );

    let pool = db.pool().clone();
    let item_id = item.item_id;
    let (a, b) = (alice.id, bob.id);
    let revoke = tokio::spawn(async move { revoke_access(&pool, a, item_id, b).await });

    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_ok!(
        sqlx::query("DELETE FROM items WHERE item_id = $1")
            .bind(item.item_id)
            .execute(&mut *deleter)
            .await
    );
    assert_ok!(deleter.commit().await);

    let outcome = revoke.await.expect("task panicked");
    assert_matches!(outcome, Err(BackendError::NotFound(_)));
    assert_eq!(assert_ok!(count_owners(db.pool(), item.item_id).await), 0);
}
