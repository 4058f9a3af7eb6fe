pub mod api_handlers;
pub mod directory_handlers;

use serde::Deserialize;

/// Form body for POSTs that carry nothing but the CSRF token.
#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}
