//! Property-based tests
//!
//! - `catalog_proptest` - Role/permission catalog consistency
//! - `ids_proptest` - Path identifier and version tag parsing

pub mod catalog_proptest;
pub mod ids_proptest;
