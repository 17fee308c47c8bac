//! HTTP collaborator used by [`SsoClient`](crate::client::SsoClient).
//!
//! The client only needs "method, path, optional data -> decoded payload", so
//! that is all [`HttpTransport`] asks for. [`ReqwestTransport`] is the real
//! implementation: it prefixes the configured base URL, attaches the session
//! token, and unwraps the `{code, msg, data}` envelope the server answers with.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::ApiEnvelope;

/// Header the server reads the session token from.
pub const TOKEN_HEADER: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// One call to the API. `data` is sent as the JSON body for POST and as query
/// parameters for GET.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            data: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            data: None,
        }
    }

    pub fn with_data<B: Serialize + ?Sized>(mut self, data: &B) -> Result<Self> {
        self.data = Some(serde_json::to_value(data)?);
        Ok(self)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs the request and returns the decoded response payload.
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            headers.insert(TOKEN_HEADER, token_header(token)?);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self::with_http_client(config.base_url()?, http))
    }

    /// Uses a caller-provided reqwest client as is.
    pub fn with_http_client(base_url: Url, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

fn token_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(token).map_err(|_| {
        Error::Config("token contains characters not allowed in a header".into())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, request.path);

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(data) = &request.data {
            builder = match request.method {
                Method::Get => builder.query(data),
                Method::Post => builder.json(data),
            };
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", request.method, request.path, e);
            Error::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("{} {} returned {}", request.method, request.path, status);
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiEnvelope = serde_json::from_str(&body)?;
        envelope.into_data().inspect_err(|e| {
            warn!("{} {} rejected: {}", request.method, request.path, e);
        })
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
