//! The HTTP wrapper used by the test scenarios.
//!
//! # Design
//! `TaskClient` composes a `ureq` agent configured once at construction:
//! a fixed 10-second global timeout, statuses returned as data rather than
//! errors, and JSON content negotiation on every call. Each method logs the
//! verb, resolved URL, and payload (for mutating calls) before sending, then
//! hands the raw response back to the caller for assertion.

use std::time::Duration;

use tracing::info;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse};

/// Per-request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Synchronous client for the task API, bound to a base address.
pub struct TaskClient {
    agent: ureq::Agent,
    base_url: String,
}

impl TaskClient {
    /// Create a client for `base_url` with the fixed [`REQUEST_TIMEOUT`].
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit timeout. Test-scenario code should
    /// use [`TaskClient::new`]; this exists for exercising timeout handling.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issue GET and return the full response for inspection.
    pub fn get(&self, endpoint: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Get, endpoint, None)
    }

    /// Issue DELETE and return the full response for inspection.
    pub fn delete(&self, endpoint: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Delete, endpoint, None)
    }

    /// POST `json_body` as UTF-8 JSON content.
    pub fn post(&self, endpoint: &str, json_body: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Post, endpoint, Some(json_body))
    }

    /// PUT `json_body` as UTF-8 JSON content.
    pub fn put(&self, endpoint: &str, json_body: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Put, endpoint, Some(json_body))
    }

    /// GET `endpoint` and parse the body as a JSON array of generic objects.
    /// Fails if the server answers with anything but 200 or the body is not
    /// a valid JSON array.
    pub fn get_list(&self, endpoint: &str) -> Result<Vec<serde_json::Value>, ApiError> {
        let response = self.get(endpoint)?;
        if response.status != 200 {
            return Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            });
        }
        response.json()
    }

    /// Delete every task in a previously fetched list by its `id` property.
    /// Test teardown only, not part of the production API surface.
    pub fn clear_all(
        &self,
        endpoint: &str,
        tasks: &[serde_json::Value],
    ) -> Result<(), ApiError> {
        for task in tasks {
            let id = task
                .get("id")
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| {
                    ApiError::Deserialization("task object has no string id".to_string())
                })?;
            info!("DELETE task id {id}");
            self.delete(&format!("{endpoint}/{id}"))?;
        }
        Ok(())
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let url = self.url(endpoint);
        match body {
            Some(payload) => info!("{method} {url} payload {payload}"),
            None => info!("{method} {url}"),
        }

        let result = match (method, body) {
            (HttpMethod::Get, _) => self
                .agent
                .get(&url)
                .header("accept", "application/json")
                .call(),
            (HttpMethod::Delete, _) => self
                .agent
                .delete(&url)
                .header("accept", "application/json")
                .call(),
            (HttpMethod::Post, Some(payload)) => self
                .agent
                .post(&url)
                .header("accept", "application/json")
                .content_type("application/json")
                .send(payload.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&url).send_empty(),
            (HttpMethod::Put, Some(payload)) => self
                .agent
                .put(&url)
                .header("accept", "application/json")
                .content_type("application/json")
                .send(payload.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&url).send_empty(),
        };

        let mut response = result.map_err(ApiError::from_transport)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(ApiError::from_transport)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
