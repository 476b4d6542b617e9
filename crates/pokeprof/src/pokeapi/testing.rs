//! In-memory [`Fetch`] implementation for pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::Fetch;
use crate::prelude::*;

enum Fixture {
    Json(serde_json::Value),
    Status(u16),
}

/// Serves canned responses by path and records every requested path.
///
/// Paths without a fixture answer with HTTP 404.
#[derive(Default)]
pub struct FixtureFetcher {
    fixtures: HashMap<String, Fixture>,
    requests: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: &str, value: serde_json::Value) -> Self {
        self.fixtures.insert(path.to_string(), Fixture::Json(value));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.fixtures.insert(path.to_string(), Fixture::Status(status));
        self
    }

    /// Paths requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for FixtureFetcher {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        self.requests.lock().unwrap().push(path.to_string());

        match self.fixtures.get(path) {
            Some(Fixture::Json(value)) => Ok(value.clone()),
            Some(Fixture::Status(status)) => Err(Error::Upstream {
                status: *status,
                path: path.to_string(),
            }
            .into()),
            None => Err(Error::Upstream {
                status: 404,
                path: path.to_string(),
            }
            .into()),
        }
    }
}
