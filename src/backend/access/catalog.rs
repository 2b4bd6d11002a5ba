/**
 * Catalog Verification
 *
 * The role/permission catalog exists twice: as the `Role::permissions`
 * table compiled into the binary and as rows seeded into `roles`,
 * `permissions` and `role_permissions` by the migrations. Authorization
 * queries read the rows, so the two must agree. The server compares them
 * once at startup and refuses to run on a mismatch.
 */

use std::collections::{BTreeMap, BTreeSet};
use sqlx::PgPool;
use crate::backend::error::BackendError;
use crate::shared::Role;

/// Role name to permission names
pub type Catalog = BTreeMap<String, BTreeSet<String>>;

#[derive(Debug, sqlx::FromRow)]
struct CatalogRow {
    role: String,
    permission: Option<String>,
}

/// The catalog as compiled into this binary
pub fn expected_catalog() -> Catalog {
    Role::ALL
        .iter()
        .map(|role| {
            let permissions = role
                .permissions()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect();
            (role.as_str().to_string(), permissions)
        })
        .collect()
}

/// Read the seeded catalog
///
/// Roles without any permission rows still appear, with an empty set.
pub async fn load_catalog(pool: &PgPool) -> Result<Catalog, sqlx::Error> {
    let rows = sqlx::query_as::<_, CatalogRow>(
        r#"
        SELECT r.name AS role, p.name AS permission
        FROM roles r
        LEFT JOIN role_permissions rp ON rp.role_id = r.role_id
        LEFT JOIN permissions p ON p.permission_id = rp.permission_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut catalog = Catalog::new();
    for row in rows {
        let entry = catalog.entry(row.role).or_default();
        if let Some(permission) = row.permission {
            entry.insert(permission);
        }
    }
    Ok(catalog)
}

/// Describe every difference between two catalogs
///
/// An empty result means they match.
pub fn catalog_drift(expected: &Catalog, actual: &Catalog) -> Vec<String> {
    let mut drift = Vec::new();

    for (role, permissions) in expected {
        match actual.get(role) {
            None => drift.push(format!("role '{}' is not seeded", role)),
            Some(seeded) => {
                for missing in permissions.difference(seeded) {
                    drift.push(format!("role '{}' lacks '{}'", role, missing));
                }
                for extra in seeded.difference(permissions) {
                    drift.push(format!("role '{}' unexpectedly grants '{}'", role, extra));
                }
            }
        }
    }
    for role in actual.keys().filter(|role| !expected.contains_key(*role)) {
        drift.push(format!("unknown role '{}' is seeded", role));
    }

    drift
}

/// Fail startup if the seeded catalog differs from the compiled one
pub async fn verify_catalog(pool: &PgPool) -> Result<(), BackendError> {
    let actual = load_catalog(pool).await?;
    let drift = catalog_drift(&expected_catalog(), &actual);

    if drift.is_empty() {
        tracing::info!(roles = actual.len(), "Role/permission catalog verified");
        return Ok(());
    }

    for problem in &drift {
        tracing::error!("Catalog drift: {}", problem);
    }
    Err(BackendError::state(format!(
        "Seeded role/permission catalog does not match: {}",
        drift.join("; ")
    )))
}
