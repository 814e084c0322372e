//! # http-client-utilities - fluent builders for API requests
//!
//! A small, synchronous toolkit for rendering HTTP requests for JSON APIs.
//! [`RequestBuilder`] accumulates method, resource path, headers, query
//! parameters and a JSON body through chained copy-on-write calls, and
//! [`RequestBuilder::build`] renders them into a [`ClientRequest`] that any
//! transport can send.
//!
//! ## Quick Start
//!
//! ```
//! use http_client_utilities::{MediaType, RequestBuilder};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), http_client_utilities::Error> {
//! // GET servers/42?expand=1
//! let request = RequestBuilder::get("/servers", Some("42"))
//!     .with_query_param("expand", true)
//!     .build()?;
//! assert_eq!(request.uri(), "servers/42?expand=1");
//! assert_eq!(request.header("accept"), Some("application/json"));
//!
//! // POST servers with a JSON body
//! let request = RequestBuilder::post("servers")
//!     .with_header("Authorization", "Bearer t0k3n")
//!     .with_request_content(&json!({ "name": "web", "server_type": "cx22" }))
//!     .build()?;
//! assert_eq!(request.header("content-type"), Some(MediaType::Json.as_str()));
//! assert_eq!(request.body_str(), Some(r#"{"name":"web","server_type":"cx22"}"#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Copy-on-write chaining** - every `with_*` call returns a new builder and leaves the receiver untouched
//! - **Deterministic header order** - `Content-Type`, then custom headers, then `Accept`, each able to override the previous
//! - **Form-encoded query strings** - scalars, arrays and nested objects rendered in insertion order
//! - **Strict JSON bodies** - content that cannot be encoded is reported by `build()` instead of being coerced
//! - **Transport hand-off** - convert into [`http::Request`] or [`reqwest::Request`] against a base URL
//! - **Logging** - `tracing` events for every rendered request
//!
//! ## Error Handling
//!
//! ```
//! use http_client_utilities::{Error, RequestBuilder};
//! use std::collections::BTreeMap;
//!
//! // JSON object keys must be strings.
//! let mut content = BTreeMap::new();
//! content.insert(vec![1u8], "value");
//!
//! match RequestBuilder::put("servers/1").with_request_content(&content).build() {
//!     Err(Error::SerializationFailed(reason)) => eprintln!("cannot encode body: {}", reason),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

mod builder;
mod error;
mod media_type;
mod method;
mod query;
mod request;
mod strict;

pub use builder::RequestBuilder;
pub use error::{Error, Result};
pub use media_type::MediaType;
pub use method::HttpMethod;
pub use request::ClientRequest;
