// API client module: a small blocking HTTP client that talks to the
// library backend. Everything goes through plain JSON GET/POST calls
// against `/api/users`, `/api/books` and `/api/loans`.
//
// The `LibraryApi` trait is the seam the rest of the crate depends on,
// so seeding and probing can run against an in-memory store in tests.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Book, Loan, NewBook, NewUser, User};

pub const USERS_PATH: &str = "/api/users";
pub const BOOKS_PATH: &str = "/api/books";
pub const LOANS_PATH: &str = "/api/loans";

/// Errors produced while talking to the library API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (refused, DNS, reset...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// A success response whose body is not the JSON we expected.
    #[error("unexpected response body from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl ApiError {
    /// Status code carried by the error, if the API answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Shape of the backend's error envelope. Only `error` matters here.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Turns an error response body into a readable message: the `error`
/// field of a JSON object when present, otherwise the raw body.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody { error: Some(msg) }) = serde_json::from_str::<ErrorBody>(body) {
        return msg;
    }
    let raw = body.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

/// Operations the seeder needs from a library backend.
pub trait LibraryApi {
    /// Read a whole collection (`GET path`).
    fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError>;

    /// Create one record (`POST path`) and return what the API stored.
    fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;
}

/// Blocking client holding a reqwest client and the API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`. A trailing slash is dropped so
    /// paths can be appended directly.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder().build().map_err(|source| ApiError::Transport {
            url: base_url.clone(),
            source,
        })?;
        Ok(ApiClient { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_all(USERS_PATH)
    }

    pub fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.fetch_all(BOOKS_PATH)
    }

    pub fn list_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.fetch_all(LOANS_PATH)
    }

    pub fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.create(USERS_PATH, user)
    }

    pub fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        self.create(BOOKS_PATH, book)
    }

    /// Check the status and decode a JSON body, mapping failures onto
    /// `ApiError`. Shared by every request.
    fn read_json<T: DeserializeOwned>(url: &str, res: Response) -> Result<T, ApiError> {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            let message = error_message(status, &body);
            warn!(%url, %status, %message, "library API returned an error");
            return Err(ApiError::Status { status, message });
        }
        let bytes = res.bytes().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl LibraryApi for ApiClient {
    fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url(path);
        debug!(method = "GET", %url, "sending request");
        let res = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        Self::read_json(&url, res)
    }

    fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(method = "POST", %url, "sending request");
        let res = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        Self::read_json(&url, res)
    }
}
