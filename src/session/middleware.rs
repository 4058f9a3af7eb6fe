use actix_session::SessionExt;
use actix_web::{
    Error,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::DIRECTORY_ID_KEY;

/// Give every browser session its own directory id before any handler runs.
pub async fn ensure_directory_id(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let has_id = session.get::<String>(DIRECTORY_ID_KEY).unwrap_or(None).is_some();

    if !has_id {
        let id = super::generate_token();
        log::debug!("New directory session {}", &id[..8]);
        session.insert(DIRECTORY_ID_KEY, id)?;
    }

    next.call(req).await
}
