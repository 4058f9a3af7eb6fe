use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/users/{id} - single user straight from the item resource.
pub async fn read_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = state.source.fetch_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}
