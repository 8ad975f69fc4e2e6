//! Mock transport for testing.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::provider::{ProviderError, Transport};

/// A recorded request for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Value of query parameter `name`, if it was sent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Mock implementation of the Transport trait.
///
/// Responses are returned in the order they were pushed. Once the queue is
/// empty every request fails with a connection error. Clones share state, so
/// a test can keep one handle while a client owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<Value, ProviderError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers the first request with `body`.
    pub fn with_response(body: Value) -> Self {
        let transport = Self::new();
        transport.push_response(body);
        transport
    }

    /// Queue a successful JSON body.
    pub fn push_response(&self, body: Value) {
        lock(&self.responses).push_back(Ok(body));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: ProviderError) {
        lock(&self.responses).push_back(Err(error));
    }

    /// Requests made so far, oldest first.
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, ProviderError> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        });

        lock(&self.responses).pop_front().unwrap_or_else(|| {
            Err(ProviderError::ConnectionFailed(
                "no canned response left".to_string(),
            ))
        })
    }
}
