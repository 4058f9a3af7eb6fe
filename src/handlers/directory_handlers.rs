use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::directory::{self, LoadState, lock};
use crate::errors::{AppError, render, see_other};
use crate::handlers::CsrfOnly;
use crate::session::csrf;
use crate::state::AppState;
use crate::templates_structs::{
    ConfirmDeleteTemplate, DirectoryTemplate, LoadErrorTemplate, LoadingTemplate, PageContext,
    UserModalView, UserRow,
};

const DIRECTORY_PATH: &str = "/directory";

/// GET / - mount: start fetching a fresh list and show the directory, which
/// polls while the fetch runs.
pub async fn mount(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let controller = state.controller(&session)?;
    directory::mount(&controller, state.source.clone());
    Ok(see_other(DIRECTORY_PATH))
}

/// GET /directory - render whatever state the session's controller is in.
pub async fn view(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let controller = state.controller(&session)?;
    if lock(&controller).needs_load() {
        directory::mount(&controller, state.source.clone());
    }

    let ctx = PageContext::build(&session, &state.app_name);
    let c = lock(&controller);
    match c.state() {
        LoadState::Loading => render(LoadingTemplate { ctx, refresh_secs: 1 }),
        LoadState::Errored(message) => render(LoadErrorTemplate {
            ctx,
            message: message.clone(),
        }),
        LoadState::Loaded => render(DirectoryTemplate {
            ctx,
            count_label: c.count_label(),
            rows: c.users().iter().map(UserRow::from).collect(),
            modal: c.selected_user().map(UserModalView::from),
        }),
    }
}

/// POST /retry
pub async fn retry(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let controller = state.controller(&session)?;
    if !directory::retry(&controller, state.source.clone()) {
        log::info!("Retry ignored, directory is not in an error state");
    }
    Ok(see_other(DIRECTORY_PATH))
}

/// GET /users/{id} - row activation opens the detail modal.
pub async fn select(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let controller = state.controller(&session)?;
    lock(&controller).select_user(path.into_inner());
    Ok(see_other(DIRECTORY_PATH))
}

/// GET /modal/close - close control and backdrop.
pub async fn close_modal(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let controller = state.controller(&session)?;
    lock(&controller).close_modal();
    Ok(see_other(DIRECTORY_PATH))
}

#[derive(Deserialize)]
pub struct DeleteForm {
    pub csrf_token: String,
    pub confirmed: Option<String>,
}

/// POST /users/{id}/delete - first asks for confirmation, then removes the
/// user from this session's list.
pub async fn delete(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let controller = state.controller(&session)?;

    if form.confirmed.as_deref() != Some("true") {
        let user_name = {
            let c = lock(&controller);
            match c.users().iter().find(|u| u.id == id) {
                Some(u) => u.name.clone(),
                None => return Ok(see_other(DIRECTORY_PATH)),
            }
        };
        let ctx = PageContext::build(&session, &state.app_name);
        return render(ConfirmDeleteTemplate {
            ctx,
            user_name,
            delete_action: format!("/users/{id}/delete"),
        });
    }

    let removed = lock(&controller).delete_user(id);
    if let Some(user) = removed {
        if let Err(e) = session.insert("flash", format!("Removed {} from this session", user.name)) {
            log::warn!("Could not set flash message: {e}");
        }
    }
    Ok(see_other(DIRECTORY_PATH))
}
