//! Error types for request building.
//!
//! Building a request performs no I/O, so the only failures are values that
//! cannot be rendered: body content that does not encode as JSON, header
//! names or values rejected by the `http` crate, and URLs that cannot be
//! resolved when handing the request to a transport.

/// The main error type for request building.
///
/// # Examples
///
/// ```
/// use http_client_utilities::{Error, RequestBuilder};
///
/// let result = RequestBuilder::get("users", None)
///     .with_header("bad header", "value")
///     .build();
///
/// match result {
///     Err(Error::InvalidHeader { name, .. }) => assert_eq!(name, "bad header"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request body content could not be encoded as a JSON object.
    ///
    /// The encoder is strict: a failing `Serialize` implementation, map keys
    /// that are not strings, or content that is not a JSON object all end up
    /// here instead of being coerced.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// A header name or value was rejected.
    ///
    /// # Fields
    ///
    /// * `name` - The header name as supplied by the caller
    /// * `reason` - Why the `http` crate rejected it
    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// The header name as supplied
        name: String,
        /// The rejection reason
        reason: String,
    },

    /// The relative request URI could not be resolved against a base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The `http` crate refused to assemble the request.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    /// `reqwest` refused to accept the converted request.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Returns `true` if this error came from encoding the request body.
    ///
    /// ```
    /// use http_client_utilities::Error;
    ///
    /// assert!(Error::SerializationFailed("boom".to_string()).is_serialization());
    /// ```
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::SerializationFailed(_))
    }

    pub(crate) fn invalid_header(name: &str, reason: impl std::fmt::Display) -> Self {
        Error::InvalidHeader {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A specialized `Result` type for request building.
pub type Result<T> = std::result::Result<T, Error>;
