//! Role/permission catalog properties

use proptest::prelude::*;

use sharelist::backend::access::catalog::{catalog_drift, expected_catalog};
use sharelist::shared::{Permission, Role};

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn any_permission() -> impl Strategy<Value = Permission> {
    prop::sample::select(Permission::ALL.to_vec())
}

fn rank(role: Role) -> usize {
    match role {
        Role::Viewer => 0,
        Role::Editor => 1,
        Role::Owner => 2,
    }
}

proptest! {
    #[test]
    fn prop_allows_matches_permission_list(role in any_role(), permission in any_permission()) {
        prop_assert_eq!(role.allows(permission), role.permissions().contains(&permission));
    }

    #[test]
    fn prop_stronger_roles_keep_weaker_permissions(
        a in any_role(),
        b in any_role(),
        permission in any_permission(),
    ) {
        let (weak, strong) = if rank(a) <= rank(b) { (a, b) } else { (b, a) };
        if weak.allows(permission) {
            prop_assert!(strong.allows(permission));
        }
    }

    #[test]
    fn prop_every_role_can_view(role in any_role()) {
        prop_assert!(role.allows(Permission::CanView));
    }

    #[test]
    fn prop_role_names_round_trip(role in any_role()) {
        prop_assert_eq!(role.as_str().parse::<Role>().ok(), Some(role));
        prop_assert_eq!(role.is_shareable(), Role::parse_shareable(role.as_str()).is_ok());
    }

    #[test]
    fn prop_unknown_role_names_rejected(name in "[a-z]{1,12}") {
        prop_assume!(Role::ALL.iter().all(|r| r.as_str() != name));
        prop_assert!(name.parse::<Role>().is_err());
        prop_assert!(Role::parse_shareable(&name).is_err());
    }

    #[test]
    fn prop_dropping_a_grant_is_reported(role in any_role(), index in 0usize..4) {
        let mut actual = expected_catalog();
        let granted = role.permissions();
        let dropped = granted[index % granted.len()];
        if let Some(perms) = actual.get_mut(role.as_str()) {
            perms.remove(dropped.as_str());
        }

        let drift = catalog_drift(&expected_catalog(), &actual);
        prop_assert_eq!(drift.len(), 1);
        prop_assert!(drift[0].contains(dropped.as_str()));
    }
}
