// ABOUTME: In-memory SearchBackend for tool tests.
// ABOUTME: Records every request and replays a canned payload or error.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SearchError;
use crate::serpapi::{SearchBackend, SearchParams};

type ErrorFactory = Box<dyn Fn() -> SearchError + Send + Sync>;

pub(crate) struct FakeBackend {
    response: Result<Value, ErrorFactory>,
    requests: Mutex<Vec<SearchParams>>,
}

impl FakeBackend {
    pub(crate) fn responding(data: Value) -> Self {
        Self {
            response: Ok(data),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing<F>(error: F) -> Self
    where
        F: Fn() -> SearchError + Send + Sync + 'static,
    {
        Self {
            response: Err(Box::new(error)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn last_request(&self) -> Option<SearchParams> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn search(&self, params: &SearchParams) -> Result<Value, SearchError> {
        self.requests.lock().unwrap().push(params.clone());
        match &self.response {
            Ok(data) => Ok(data.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}
