//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::domain::UserDeletePolicy;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::{DbConn, SeaPostRepository, SeaTagRepository, SeaUserRepository};

/// Shared application state.
///
/// Every repository wraps a clone of the same connection pool; handlers never
/// reach the store any other way.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub user_delete_policy: UserDeletePolicy,
}

impl AppState {
    pub fn new(db: DbConn, user_delete_policy: UserDeletePolicy) -> Self {
        tracing::info!(%user_delete_policy, "Application state initialized");

        Self {
            users: Arc::new(SeaUserRepository::new(db.clone())),
            posts: Arc::new(SeaPostRepository::new(db.clone())),
            tags: Arc::new(SeaTagRepository::new(db)),
            user_delete_policy,
        }
    }
}
