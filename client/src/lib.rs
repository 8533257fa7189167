//! Synchronous HTTP client for driving the task API in tests.
//!
//! # Overview
//! `TaskClient` wraps a configured `ureq` agent and a base URL, exposing the
//! verbs the test scenarios need (GET/POST/PUT/DELETE, plus list fetching
//! and bulk teardown). Responses come back as plain data so scenarios can
//! assert directly on status codes, headers, and bodies.
//!
//! # Design
//! - Composition over inheritance: the agent is a private field, only the
//!   needed verbs are exposed.
//! - A fixed 10-second timeout aborts unresponsive calls; the failure
//!   surfaces as [`ApiError::Timeout`].
//! - Non-2xx statuses are returned as data, not errors — the scenarios
//!   assert on 400/404 as readily as on 200.
//! - DTOs are defined independently from the server crate; the integration
//!   suite catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TaskClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpResponse};
pub use types::{Task, TaskRequest};
