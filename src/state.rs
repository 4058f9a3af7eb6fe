use std::sync::Arc;

use actix_session::Session;

use crate::directory::{DirectoryStore, SharedController};
use crate::errors::AppError;
use crate::services::UserSource;
use crate::session::get_directory_id;

/// Shared application state handed to every handler.
pub struct AppState {
    pub source: Arc<dyn UserSource>,
    pub store: DirectoryStore,
    pub app_name: String,
}

impl AppState {
    pub fn new(source: Arc<dyn UserSource>, store: DirectoryStore, app_name: &str) -> Self {
        Self {
            source,
            store,
            app_name: app_name.to_string(),
        }
    }

    /// The controller belonging to this browser session.
    pub fn controller(&self, session: &Session) -> Result<SharedController, AppError> {
        let id = get_directory_id(session)?;
        Ok(self.store.get_or_create(&id))
    }
}
