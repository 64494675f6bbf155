//! Backend API Client
//!
//! HTTP bindings to the ops backend, organized by domain. Each domain module
//! defines a trait (the seam views and flows are written against) and its
//! implementation for [`ApiClient`]. Every call is exactly one round trip:
//! no retries, no caching.

mod admin;
mod brief;
mod changes;
mod inventory;
mod menu;
mod reviews;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Ping;

// Re-export all public items
pub use admin::*;
pub use brief::*;
pub use changes::*;
pub use inventory::*;
pub use menu::*;
pub use reviews::*;

/// Versioned API prefix; only `/ping` lives outside it
pub const API_PREFIX: &str = "/api/v1";

/// Characters left unescaped in a path segment (RFC 3986 unreserved)
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HTTP client bound to one backend origin
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a versioned endpoint, e.g. `url("/inventory")`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Absolute URL of `{collection}/{id}` with the id percent-encoded
    pub fn item_url(&self, collection: &str, id: &str) -> String {
        self.url(&format!("{}/{}", collection, encode_segment(id)))
    }

    /// Liveness probe (`GET /ping`, outside the versioned prefix)
    pub async fn ping(&self) -> Result<Ping, ApiError> {
        let url = format!("{}/ping", self.base_url);
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        log::debug!("[API] GET {}", url);
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    async fn send_json<B, T>(&self, method: Method, url: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("[API] {} {}", method, url);
        let response = self.http.request(method, &url).json(body).send().await?;
        read_json(response).await
    }

    /// POST without a request body, JSON response
    async fn post_empty<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        log::debug!("[API] POST {}", url);
        let response = self.http.post(&url).send().await?;
        read_json(response).await
    }

    /// DELETE; the response body (if any) is ignored
    async fn delete(&self, url: String) -> Result<(), ApiError> {
        log::debug!("[API] DELETE {}", url);
        let response = self.http.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn get_bytes(&self, url: String) -> Result<Vec<u8>, ApiError> {
        log::debug!("[API] GET {} (binary)", url);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT_ENCODE_SET).to_string()
}

/// Turn non-2xx responses into [`ApiError::Status`] carrying the backend detail
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status.as_u16(), &body);
    log::warn!("[API] {} -> {}", status, err);
    Err(err)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
