//! Shared test infrastructure: user fixtures, a scripted `UserSource`, and a
//! cookie-carrying client for driving the actix app.
#![allow(dead_code, unused_macros)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use async_trait::async_trait;

use userdir::directory::DirectoryStore;
use userdir::models::user::{Address, Company, Geo, User};
use userdir::services::{ApiError, UserSource};

// ============================================================================
// FIXTURES
// ============================================================================

pub fn leanne() -> User {
    User {
        id: 1,
        name: "Leanne Graham".into(),
        username: "Bret".into(),
        email: "Sincere@april.biz".into(),
        address: Address {
            street: "Kulas Light".into(),
            suite: "Apt. 556".into(),
            city: "Gwenborough".into(),
            zipcode: "92998-3874".into(),
            geo: Geo { lat: "-37.3159".into(), lng: "81.1496".into() },
        },
        phone: "1-770-736-8031 x56442".into(),
        website: "hildegard.org".into(),
        company: Company {
            name: "Romaguera-Crona".into(),
            catch_phrase: "Multi-layered client-server neural-net".into(),
            bs: "harness real-time e-markets".into(),
        },
    }
}

pub fn ervin() -> User {
    User {
        id: 2,
        name: "Ervin Howell".into(),
        username: "Antonette".into(),
        email: "Shanna@melissa.tv".into(),
        address: Address {
            street: "Victor Plains".into(),
            suite: "Suite 879".into(),
            city: "Wisokyburgh".into(),
            zipcode: "90566-7771".into(),
            geo: Geo { lat: "-43.9509".into(), lng: "-34.4618".into() },
        },
        phone: "010-692-6593 x09125".into(),
        website: "anastasia.net".into(),
        company: Company {
            name: "Deckow-Crist".into(),
            catch_phrase: "Proactive didactic contingency".into(),
            bs: "synergize scalable supply-chains".into(),
        },
    }
}

// ============================================================================
// SCRIPTED USER SOURCE
// ============================================================================

/// Returns scripted results for `fetch_users` in order, then `users`
/// forever after.
pub struct StubSource {
    script: Mutex<VecDeque<Result<Vec<User>, ApiError>>>,
    users: Vec<User>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl StubSource {
    pub fn returning(users: Vec<User>) -> Self {
        Self::scripted(vec![], users)
    }

    pub fn scripted(script: Vec<Result<Vec<User>, ApiError>>, users: Vec<User>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            users,
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Every `fetch_users` call sleeps for `delay` before answering.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for StubSource {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(self.users.clone()))
    }

    async fn fetch_user(&self, id: i64) -> Result<User, ApiError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ApiError::Fetch { status: 404 })
    }
}

/// A source whose collection fetch panics, as a crashed load task would.
pub struct PanickingSource;

#[async_trait]
impl UserSource for PanickingSource {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        panic!("user source blew up");
    }

    async fn fetch_user(&self, _id: i64) -> Result<User, ApiError> {
        Err(ApiError::Fetch { status: 404 })
    }
}

pub fn test_store() -> DirectoryStore {
    DirectoryStore::new(1_000, Duration::from_secs(600))
}

// ============================================================================
// APP HARNESS
// ============================================================================

/// Build the full app (session + directory id middleware + routes) around
/// a `web::Data<AppState>`.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::from_fn(
                    userdir::session::middleware::ensure_directory_id,
                ))
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::from(&[7u8; 64][..]),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data($state.clone())
                .configure(userdir::configure)
                .default_service(actix_web::web::to(userdir::not_found)),
        )
        .await
    };
}

/// Send a `TestRequest` as `$browser`, returning a `Page`.
macro_rules! send {
    ($app:expr, $browser:expr, $req:expr) => {{
        let req = $browser.attach($req);
        let resp = actix_web::test::call_service(&$app, req.to_request()).await;
        $browser.remember(&resp);
        let status = resp.status();
        let location = resp
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = actix_web::test::read_body(resp).await;
        common::Page {
            status,
            location,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }};
}

/// GET /directory until the page is no longer the loading indicator.
macro_rules! settle {
    ($app:expr, $browser:expr) => {{
        let mut page = send!($app, $browser, actix_web::test::TestRequest::get().uri("/directory"));
        for _ in 0..200 {
            if !page.body.contains("Loading users...") {
                break;
            }
            actix_rt::time::sleep(std::time::Duration::from_millis(10)).await;
            page = send!($app, $browser, actix_web::test::TestRequest::get().uri("/directory"));
        }
        page
    }};
}

pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Page {
    /// The CSRF token embedded in the page's first form.
    pub fn csrf_token(&self) -> String {
        let marker = r#"name="csrf_token" value=""#;
        let start = self.body.find(marker).expect("page has no csrf field") + marker.len();
        let end = self.body[start..].find('"').expect("unterminated csrf value");
        self.body[start..start + end].to_string()
    }
}

/// Carries the session cookie between requests like a browser would.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn attach(&self, req: actix_web::test::TestRequest) -> actix_web::test::TestRequest {
        match &self.cookie {
            Some(c) => req.cookie(c.clone()),
            None => req,
        }
    }

    pub fn remember<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(c) = resp.response().cookies().find(|c| c.name() == "id") {
            self.cookie = Some(c.into_owned());
        }
    }
}
