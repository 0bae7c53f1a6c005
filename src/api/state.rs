//! Application state shared by all handlers.
//!
//! Collaborators are built once here and handed to the handlers as
//! `Arc` handles.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::notification::Notifier;
use crate::services::{UserManager, UserService};

/// Application state containing the services handlers depend on.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database handle (health checks)
    pub database: Database,
}

impl AppState {
    /// Wire the repository and user service on top of an open database.
    pub fn new(database: Database, notifier: Arc<dyn Notifier>) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo, notifier));

        Self {
            user_service,
            database,
        }
    }
}
