//! Shared fixtures for the integration tests: tracing/runtime setup and a
//! fake inner transport that records the calls that reach it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use http::Method;
use serde_json::{json, Value};
use shunt::{Completion, PendingRequest, Transport};

static INIT: Once = Once::new();

/// Size the may stack and install a test tracing subscriber once per binary.
pub fn init() {
    INIT.call_once(|| {
        may::config().set_stack_size(0x8000);
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A stand-in for the real network transport.
///
/// Records every call that reaches it and completes with a recognizable
/// payload, so tests can tell a real outcome from a synthetic one.
#[derive(Clone, Default)]
pub struct FakeTransport {
    calls: Arc<Mutex<Vec<(Method, String)>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.calls.lock().expect("call log lock poisoned").clone()
    }
}

pub struct FakeRequest {
    method: Method,
    url: String,
}

impl Transport for FakeTransport {
    type Request = FakeRequest;

    fn begin(&self, method: Method, url: &str, _body: Option<Value>) -> FakeRequest {
        self.calls
            .lock()
            .expect("call log lock poisoned")
            .push((method.clone(), url.to_string()));
        FakeRequest {
            method,
            url: url.to_string(),
        }
    }
}

impl PendingRequest for FakeRequest {
    fn end(self, completion: Option<Completion>) {
        if let Some(callback) = completion {
            callback(Ok(json!({
                "real": true,
                "method": self.method.as_str(),
                "url": self.url,
            })));
        }
    }
}
