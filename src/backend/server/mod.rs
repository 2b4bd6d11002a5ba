//! Server bootstrap
//!
//! Turns an [`AppConfig`](crate::shared::AppConfig) into a ready router:
//! open the pool, migrate, check the seeded role catalog, then assemble
//! routes around a shared [`AppState`].
//!
//! ```text
//! server/
//! ├── state.rs   - AppState (pool, config, identity provider client)
//! ├── config.rs  - Pool options and migrations
//! └── init.rs    - create_app
//! ```
//!
//! ```rust,no_run
//! use sharelist::backend::server::create_app;
//! use sharelist::shared::AppConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

pub mod state;
pub mod config;
pub mod init;

#[cfg(feature = "ssr")]
pub use state::AppState;
#[cfg(feature = "ssr")]
pub use init::create_app;
