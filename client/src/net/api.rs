//! REST API client for the remote threads service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every loader and every form submission goes through one `ApiClient`,
//! configured once at bootstrap and shared through Leptos context.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx answers become `ApiError::Status` carrying the server's message
//! when the body has one. Callers decide what to show; loaders propagate,
//! forms render `ApiError::user_message`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{BrowserTransport, HttpRequest, HttpResponse, Method, Transport};
use super::types::{LoginRequest, Post, PostList, RegisterRequest, error_message_from_body};
use crate::config::ApiConfig;

pub const POSTS_ENDPOINT: &str = "/threads/";
pub const USERS_ENDPOINT: &str = "/threads/users/";
pub const LOGIN_ENDPOINT: &str = "/threads/auth/login/";

fn post_endpoint(post_id: &str) -> String {
    format!("/threads/posts/{post_id}")
}

/// Structured failure of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server or no response came back.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success body did not match the expected shape.
    #[error("response body could not be decoded: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request body could not be encoded: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status reported by the server, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message the server put in its error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server message verbatim when present, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// A successful (2xx) response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// The single configured transport used for all remote calls.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Client backed by the browser `fetch` transport.
    #[must_use]
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(BrowserTransport))
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET {base}{path}` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(Method::Get, path, None).await?;
        resp.json()
    }

    /// `POST {base}{path}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on encoding failure, transport failure, or
    /// non-2xx status.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(Method::Post, path, Some(body)).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<ApiResponse, ApiError> {
        let url = self.config.endpoint(path);
        leptos::logging::log!("api {} {url}", method.as_str());

        let request = HttpRequest { method, url, body };
        let HttpResponse { status, body } = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if (200..300).contains(&status) {
            Ok(ApiResponse { status, body })
        } else {
            Err(ApiError::Status { status, message: error_message_from_body(&body) })
        }
    }

    /// Fetch the post listing from `GET /threads/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn fetch_posts(&self) -> Result<PostList, ApiError> {
        self.get_json(POSTS_ENDPOINT).await
    }

    /// Fetch one post from `GET /threads/posts/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn fetch_post(&self, post_id: &str) -> Result<Post, ApiError> {
        self.get_json(&post_endpoint(post_id)).await
    }

    /// Create an account via `POST /threads/users/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post_json`].
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        self.post_json(USERS_ENDPOINT, request).await
    }

    /// Sign in via `POST /threads/auth/login/`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post_json`].
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ApiError> {
        self.post_json(LOGIN_ENDPOINT, request).await
    }
}
