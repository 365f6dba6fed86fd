//! Authenticated HTTP client for the Klara API.

use log::{debug, error};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::RwLock;

use super::error::ApiError;
use super::url::build_url;

/// Default base origin for all requests.
pub const KLARA_BASE_URL: &str = "https://api.klara.ch";

/// Every successful response wraps its payload in a `data` field.
#[derive(Deserialize, Debug)]
struct Envelope<T> {
    data: T,
}

/// One API request: a path template plus everything needed to issue it.
///
/// `path` may embed `:name` placeholders resolved from `path_params`. Query
/// and path-parameter pairs are applied in the order given. The method
/// defaults to GET and the body to none.
#[derive(Debug, Clone)]
pub struct RequestSpec<'a> {
    pub path: &'a str,
    pub method: Method,
    pub query: &'a [(&'a str, &'a str)],
    pub path_params: &'a [(&'a str, &'a str)],
    pub body: Option<Value>,
}

impl<'a> RequestSpec<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            method: Method::GET,
            query: &[],
            path_params: &[],
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn query(mut self, query: &'a [(&'a str, &'a str)]) -> Self {
        self.query = query;
        self
    }

    pub fn path_params(mut self, path_params: &'a [(&'a str, &'a str)]) -> Self {
        self.path_params = path_params;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Client for the Klara API.
///
/// The access token is per-instance state: it is supplied at construction
/// (or later via [`set_access_token`](KlaraClient::set_access_token)) and is
/// never shared between instances behind the caller's back. Wrap one client
/// in an `Arc` to share a token across tasks.
pub struct KlaraClient {
    client: Client,
    base_url: String,
    access_token: RwLock<Option<String>>,
}

impl KlaraClient {
    /// Creates a client against the production origin.
    pub fn new(client: Client, access_token: Option<String>) -> Self {
        Self::with_base_url(client, KLARA_BASE_URL, access_token)
    }

    /// Creates a client against a custom origin.
    pub fn with_base_url(client: Client, base_url: &str, access_token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            access_token: RwLock::new(access_token),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the access token used for subsequent requests.
    ///
    /// Requests already in flight keep whichever token they read at send
    /// time; no ordering is guaranteed between a token swap and concurrent
    /// calls.
    pub fn set_access_token(&self, access_token: impl Into<String>) {
        let mut token = self
            .access_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *token = Some(access_token.into());
    }

    /// Returns the `Authorization` header value for the current token.
    ///
    /// When no token has been set this still yields `Bearer null` rather
    /// than omitting the header; the upstream API answers such requests
    /// with a normal 401.
    pub fn authorization_header(&self) -> String {
        let token = self
            .access_token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        format!("Bearer {}", token.as_deref().unwrap_or("null"))
    }

    /// Issues one API request and returns the unwrapped `data` payload.
    ///
    /// The failure payload is logged before the error is returned, so
    /// diagnostics survive even when the caller discards the error detail.
    #[tracing::instrument(skip(self, spec), fields(path = spec.path))]
    pub async fn fetch<T: DeserializeOwned>(&self, spec: RequestSpec<'_>) -> Result<T, ApiError> {
        let url = build_url(&self.base_url, spec.path, spec.query, spec.path_params);

        debug!("{} {}", spec.method, url);

        let mut request = self
            .client
            .request(spec.method.clone(), &url)
            .header(AUTHORIZATION, self.authorization_header());

        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} {} failed: {}", spec.method, url, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} {} returned {}: {}", spec.method, url, status, body);
            return Err(ApiError::Status { status, body });
        }

        let envelope = response.json::<Envelope<T>>().await.map_err(|e| {
            error!("{} {} returned an undecodable body: {}", spec.method, url, e);
            ApiError::Decode(e.to_string())
        })?;

        Ok(envelope.data)
    }
}
