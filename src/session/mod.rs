pub mod csrf;
pub mod middleware;

use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

pub const DIRECTORY_ID_KEY: &str = "directory_id";

/// Directory id assigned by `middleware::ensure_directory_id`.
pub fn get_directory_id(session: &Session) -> Result<String, AppError> {
    match session.get::<String>(DIRECTORY_ID_KEY) {
        Ok(Some(id)) => Ok(id),
        Ok(None) => Err(AppError::Session("No directory id in session".to_string())),
        Err(e) => Err(AppError::Session(format!("Session error: {e}"))),
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

/// Generate a random 32-byte hex token.
pub(crate) fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}
