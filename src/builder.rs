//! Fluent, copy-on-write builder for client requests.
//!
//! Every `with_*` method borrows the builder and returns a modified copy, so a
//! partially configured builder can be kept around and branched from without
//! one chain leaking into another.

use crate::{query, strict, ClientRequest, Error, HttpMethod, MediaType, Result};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};

/// Builder for a single [`ClientRequest`].
///
/// # Examples
///
/// ```
/// use http_client_utilities::RequestBuilder;
///
/// # fn example() -> Result<(), http_client_utilities::Error> {
/// let base = RequestBuilder::get("/servers", None).with_header("Authorization", "Bearer t0k3n");
///
/// let first_page = base.with_query_param("page", 1).build()?;
/// let filtered = base.with_query_param("name", "web 1").build()?;
///
/// assert_eq!(first_page.uri(), "servers?page=1");
/// assert_eq!(filtered.uri(), "servers?name=web+1");
/// assert_eq!(base.build()?.uri(), "servers");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct RequestBuilder {
    method: HttpMethod,
    resource: String,
    suffix: Option<String>,
    accept: MediaType,
    content_type: Option<MediaType>,
    headers: Vec<(String, String)>,
    query_params: Map<String, Value>,
    content: RequestContent,
}

/// Body content as captured by [`RequestBuilder::with_request_content`].
///
/// Encoding problems are kept here and reported by `build()`, which keeps the
/// mutators infallible.
#[derive(Debug, Clone)]
enum RequestContent {
    Object(Map<String, Value>),
    Invalid(String),
}

impl RequestBuilder {
    /// Creates a builder for a GET request, optionally addressing `suffix`
    /// below `resource` (`get("servers", Some("42"))` targets `servers/42`).
    pub fn get(resource: impl AsRef<str>, suffix: Option<&str>) -> Self {
        Self::create(HttpMethod::Get, resource, MediaType::Json, suffix)
    }

    /// Creates a builder for a POST request with a JSON content type.
    pub fn post(resource: impl AsRef<str>) -> Self {
        Self::create(HttpMethod::Post, resource, MediaType::Json, None)
            .with_content_type(MediaType::Json)
    }

    /// Creates a builder for a PUT request with a JSON content type.
    pub fn put(resource: impl AsRef<str>) -> Self {
        Self::create(HttpMethod::Put, resource, MediaType::Json, None)
            .with_content_type(MediaType::Json)
    }

    /// Creates a builder for a PATCH request with a JSON content type.
    pub fn patch(resource: impl AsRef<str>) -> Self {
        Self::create(HttpMethod::Patch, resource, MediaType::Json, None)
            .with_content_type(MediaType::Json)
    }

    /// Creates a builder for a DELETE request.
    pub fn delete(resource: impl AsRef<str>) -> Self {
        Self::create(HttpMethod::Delete, resource, MediaType::Json, None)
    }

    /// Creates a builder for an arbitrary method.
    ///
    /// No content type is set, whatever the method.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_client_utilities::{HttpMethod, MediaType, RequestBuilder};
    ///
    /// # fn example() -> Result<(), http_client_utilities::Error> {
    /// let request = RequestBuilder::create(HttpMethod::Get, "/actions", MediaType::TextPlain, Some("12"))
    ///     .build()?;
    ///
    /// assert_eq!(request.uri(), "actions/12");
    /// assert_eq!(request.header("accept"), Some("text/plain"));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn create(
        method: HttpMethod,
        resource: impl AsRef<str>,
        accept: MediaType,
        suffix: Option<&str>,
    ) -> Self {
        let resource = resource.as_ref();
        Self {
            method,
            resource: resource.trim_start_matches('/').to_string(),
            suffix: suffix.map(str::to_string),
            accept,
            content_type: None,
            headers: Vec::new(),
            query_params: Map::new(),
            content: RequestContent::Object(Map::new()),
        }
    }

    /// Sets the `Content-Type` of the request.
    pub fn with_content_type(&self, content_type: MediaType) -> Self {
        let mut builder = self.clone();
        builder.content_type = Some(content_type);
        builder
    }

    /// Sets the media type sent in the `Accept` header.
    pub fn with_accept(&self, accept: MediaType) -> Self {
        let mut builder = self.clone();
        builder.accept = accept;
        builder
    }

    /// Sets a single header, replacing an earlier value for the same key.
    ///
    /// Names and values are validated by [`build`](Self::build).
    pub fn with_header(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut builder = self.clone();
        set_header(&mut builder.headers, key.into(), value.into());
        builder
    }

    /// Merges `headers` into the existing ones; new keys win on conflict.
    pub fn with_headers<K, V>(&self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut builder = self.clone();
        for (key, value) in headers {
            set_header(&mut builder.headers, key.into(), value.into());
        }
        builder
    }

    /// Sets a single query parameter.
    ///
    /// Any JSON value is accepted. Booleans render as `1`/`0`, arrays and
    /// objects as bracketed keys (`ids[0]=1`), and `null` is left out.
    pub fn with_query_param(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut builder = self.clone();
        builder.query_params.insert(key.into(), value.into());
        builder
    }

    /// Merges `params` into the existing query parameters; new keys win.
    pub fn with_query_params<K, V>(&self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut builder = self.clone();
        builder
            .query_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        builder
    }

    /// Replaces the request body content.
    ///
    /// `content` must serialize to a JSON object without non-finite floats.
    /// Anything else makes [`build`](Self::build) fail with
    /// [`Error::SerializationFailed`]. Empty
    /// content means the request is sent without a body.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_client_utilities::RequestBuilder;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct CreateServer<'a> {
    ///     name: &'a str,
    ///     start_after_create: bool,
    /// }
    ///
    /// # fn example() -> Result<(), http_client_utilities::Error> {
    /// let request = RequestBuilder::post("servers")
    ///     .with_request_content(&CreateServer { name: "web", start_after_create: true })
    ///     .build()?;
    ///
    /// assert_eq!(request.body_str(), Some(r#"{"name":"web","start_after_create":true}"#));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn with_request_content<T>(&self, content: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        let mut builder = self.clone();
        builder.content = match capture_content(content) {
            Ok(map) => RequestContent::Object(map),
            Err(reason) => RequestContent::Invalid(reason),
        };
        builder
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The resource path, without a leading `/`.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn accept(&self) -> MediaType {
        self.accept
    }

    pub fn content_type(&self) -> Option<MediaType> {
        self.content_type
    }

    /// Renders the relative URI: `resource[/suffix][?query]`.
    pub fn uri(&self) -> String {
        let mut uri = match &self.suffix {
            Some(suffix) => format!("{}/{}", self.resource, suffix),
            None => self.resource.clone(),
        };

        if !self.query_params.is_empty() {
            let query = query::encode(&self.query_params);
            if !query.is_empty() {
                uri.push('?');
                uri.push_str(&query);
            }
        }

        uri
    }

    /// Renders the request.
    ///
    /// Headers are applied in a fixed order, each step able to override the
    /// one before: `Content-Type` from [`with_content_type`](Self::with_content_type),
    /// then custom headers, then `Accept`. A custom `Accept` header is
    /// therefore always replaced by the configured accept media type.
    ///
    /// The builder itself is left untouched and can be built again.
    ///
    /// # Errors
    ///
    /// * [`Error::SerializationFailed`] if the body content could not be encoded
    /// * [`Error::InvalidHeader`] if a custom header name or value is invalid
    pub fn build(&self) -> Result<ClientRequest> {
        let uri = self.uri();
        let body = self.encode_body()?;

        let mut headers = HeaderMap::new();
        if let Some(content_type) = self.content_type {
            headers.insert(CONTENT_TYPE, content_type.header_value());
        }

        for (key, value) in &self.headers {
            let name =
                HeaderName::try_from(key.as_str()).map_err(|e| Error::invalid_header(key, e))?;
            let value =
                HeaderValue::try_from(value.as_str()).map_err(|e| Error::invalid_header(key, e))?;
            if let Some(previous) = headers.insert(name, value) {
                tracing::trace!(
                    header = %key,
                    previous = ?previous,
                    "Custom header replaced earlier value"
                );
            }
        }

        headers.insert(ACCEPT, self.accept.header_value());

        tracing::debug!(
            method = %self.method,
            uri = %uri,
            headers = headers.len(),
            body_len = body.as_ref().map_or(0, Bytes::len),
            "Built client request"
        );

        Ok(ClientRequest::new(self.method.into(), uri, headers, body))
    }

    fn encode_body(&self) -> Result<Option<Bytes>> {
        match &self.content {
            RequestContent::Object(map) if map.is_empty() => Ok(None),
            RequestContent::Object(map) => {
                let bytes =
                    serde_json::to_vec(map).map_err(|e| Error::SerializationFailed(e.to_string()))?;
                Ok(Some(Bytes::from(bytes)))
            }
            RequestContent::Invalid(reason) => {
                tracing::warn!(
                    method = %self.method,
                    resource = %self.resource,
                    error = %reason,
                    "Request content is not JSON-encodable"
                );
                Err(Error::SerializationFailed(reason.clone()))
            }
        }
    }
}

/// Header names compare case-insensitively, matching `HeaderMap`. A rewrite
/// keeps the slot's position but takes the newest spelling of the name.
fn set_header(headers: &mut Vec<(String, String)>, key: String, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&key))
    {
        Some(slot) => *slot = (key, value),
        None => headers.push((key, value)),
    }
}

fn capture_content<T>(content: &T) -> std::result::Result<Map<String, Value>, String>
where
    T: Serialize + ?Sized,
{
    strict::check(content).map_err(|e| e.to_string())?;
    match serde_json::to_value(content).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "request content must be a JSON object, got {}",
            json_kind(&other)
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
