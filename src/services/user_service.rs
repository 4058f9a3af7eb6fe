use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::models::user::User;

/// Failure talking to the remote user API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Fetch { status: u16 },
    /// No response was obtained (DNS, connect, timeout).
    Network { message: String },
    /// A success response whose body is not user JSON.
    Decode { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch { status } => write!(f, "HTTP error! status: {status}"),
            ApiError::Network { message } => write!(f, "Network error: {message}"),
            ApiError::Decode { message } => write!(f, "Invalid response body: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Fetch { status: status.as_u16() }
        } else if e.is_decode() {
            ApiError::Decode { message: e.to_string() }
        } else {
            ApiError::Network { message: e.to_string() }
        }
    }
}

/// Read access to the user collection and item resources.
///
/// One request per call: implementations never retry and hold no state
/// between calls.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError>;
    async fn fetch_user(&self, id: i64) -> Result<User, ApiError>;
}

/// `UserSource` backed by the JSON API over HTTP.
#[derive(Clone)]
pub struct UserService {
    client: Client,
    base_url: String,
}

impl UserService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Fetch { status: response.status().as_u16() });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl UserSource for UserService {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await.inspect_err(|e| {
            log::error!("Error fetching users: {e}");
        })
    }

    async fn fetch_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{id}")).await.inspect_err(|e| {
            log::error!("Error fetching user {id}: {e}");
        })
    }
}
