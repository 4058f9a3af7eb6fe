// Template context structures for Askama templates.

use actix_session::Session;

use crate::session::{csrf, take_flash};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session, app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
        }
    }
}

mod directory;

pub use self::directory::{
    ConfirmDeleteTemplate, DirectoryTemplate, LoadErrorTemplate, LoadingTemplate, UserModalView,
    UserRow,
};
