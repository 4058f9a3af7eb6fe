use std::time::Duration;

use actix_web::cookie::Key;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_APP_NAME: &str = "User Directory";
pub const DEFAULT_MAX_SESSIONS: u64 = 10_000;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub app_name: String,
    pub session_key: Key,
    /// Upper bound on per-session directories held in memory.
    pub max_sessions: u64,
    /// A directory unused for this long is dropped.
    pub session_idle: Duration,
}

impl AppConfig {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let api_timeout = number(&get, "USER_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS);
        let session_idle = number(&get, "DIRECTORY_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS);

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            api_base_url: get("USER_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            api_timeout: Duration::from_secs(api_timeout),
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            session_key: session_key(get("SESSION_KEY")),
            max_sessions: number(&get, "DIRECTORY_MAX_SESSIONS", DEFAULT_MAX_SESSIONS),
            session_idle: Duration::from_secs(session_idle),
        }
    }
}

fn number(get: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    match get(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{name}={raw:?} is not a number, using {default}");
            default
        }),
    }
}

// Load from SESSION_KEY so sessions survive restarts.
fn session_key(raw: Option<String>) -> Key {
    match raw {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
