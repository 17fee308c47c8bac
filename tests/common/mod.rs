//! In-memory transport that records every request it is handed.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

use sso_admin_client::{ApiRequest, Error, HttpTransport, Result};

#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: HashMap<String, Value>,
    failure: Option<(u16, String)>,
    barrier: Option<Arc<Barrier>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload returned for `path`; unknown paths answer `null`.
    pub fn respond(mut self, path: &str, data: Value) -> Self {
        self.responses.insert(path.to_string(), data);
        self
    }

    /// Every request fails with this HTTP status.
    pub fn fail_with(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    /// Each request waits until `barrier` is released before answering.
    pub fn rendezvous(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some((status, body)) = &self.failure {
            return Err(Error::Status {
                status: *status,
                body: body.clone(),
            });
        }
        Ok(self.responses.get(&path).cloned().unwrap_or(Value::Null))
    }
}
