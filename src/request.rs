//! The rendered request produced by [`RequestBuilder::build`].
//!
//! A [`ClientRequest`] carries a URI relative to some API base (for example
//! `servers/42?page=2`). Transports resolve it against their base URL, either
//! directly with [`ClientRequest::resolve`] or by converting into an
//! [`http::Request`] or [`reqwest::Request`].
//!
//! [`RequestBuilder::build`]: crate::RequestBuilder::build

use crate::Result;
use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

/// A fully rendered HTTP request.
///
/// # Examples
///
/// ```
/// use http_client_utilities::RequestBuilder;
/// use serde_json::json;
///
/// # fn example() -> Result<(), http_client_utilities::Error> {
/// let request = RequestBuilder::post("users")
///     .with_request_content(&json!({ "name": "Alice" }))
///     .build()?;
///
/// assert_eq!(request.method(), http::Method::POST);
/// assert_eq!(request.uri(), "users");
/// assert_eq!(request.header("content-type"), Some("application/json"));
/// assert_eq!(request.body_str(), Some(r#"{"name":"Alice"}"#));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ClientRequest {
    method: Method,
    uri: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl ClientRequest {
    pub(crate) fn new(
        method: Method,
        uri: String,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method.clone()
    }

    /// The relative path and query string, e.g. `users/123?expand=1`.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The query string without the leading `?`, if any.
    pub fn query(&self) -> Option<&str> {
        self.uri.split_once('?').map(|(_, query)| query)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a header value by name, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// The encoded body, or `None` when the request has no content.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The body as UTF-8 text. JSON bodies always are.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(self.body.as_ref()?).ok()
    }

    /// Resolves the relative URI against `base`.
    ///
    /// Resolution follows RFC 3986, so a base path that should be kept must
    /// end with `/` (`https://api.example.com/v1/`). The URI is always treated
    /// as a relative path, even when its first segment contains `:`.
    ///
    /// ```
    /// use http_client_utilities::RequestBuilder;
    /// use url::Url;
    ///
    /// # fn example() -> Result<(), http_client_utilities::Error> {
    /// let base = Url::parse("https://api.example.com/v1/")?;
    /// let request = RequestBuilder::get("/servers", Some("42")).build()?;
    ///
    /// assert_eq!(
    ///     request.resolve(&base)?.as_str(),
    ///     "https://api.example.com/v1/servers/42"
    /// );
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        // `Url::join` reads `name:rest` as a scheme.
        let first_segment = self.uri.split(['/', '?']).next().unwrap_or("");
        if first_segment.contains(':') {
            Ok(base.join(&format!("./{}", self.uri))?)
        } else {
            Ok(base.join(&self.uri)?)
        }
    }

    /// Converts into an [`http::Request`] addressed at `base`.
    ///
    /// Requests without content get an empty body.
    pub fn into_http(self, base: &Url) -> Result<http::Request<Bytes>> {
        let url = self.resolve(base)?;
        let mut request = http::Request::builder()
            .method(self.method)
            .uri(url.as_str())
            .body(self.body.unwrap_or_default())?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }

    /// Converts into a [`reqwest::Request`] addressed at `base`, ready to be
    /// executed by a `reqwest::Client`.
    pub fn into_reqwest(self, base: &Url) -> Result<reqwest::Request> {
        let request = self.into_http(base)?;
        Ok(reqwest::Request::try_from(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCEPT, CONTENT_TYPE};
    use http::HeaderValue;

    fn sample() -> ClientRequest {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        ClientRequest::new(
            Method::PUT,
            "servers/7?force=1".to_string(),
            headers,
            Some(Bytes::from_static(b"{\"name\":\"web\"}")),
        )
    }

    #[test]
    fn test_query_accessor() {
        assert_eq!(sample().query(), Some("force=1"));

        let bare = ClientRequest::new(Method::GET, "servers".to_string(), HeaderMap::new(), None);
        assert_eq!(bare.query(), None);
        assert_eq!(bare.body_str(), None);
    }

    #[test]
    fn test_into_http() {
        let base = Url::parse("https://api.example.com/v1/").unwrap();
        let request = sample().into_http(&base).unwrap();

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(
            request.uri().to_string(),
            "https://api.example.com/v1/servers/7?force=1"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(&request.body()[..], b"{\"name\":\"web\"}");
    }

    #[test]
    fn test_resolve_keeps_colon_segment_relative() {
        let base = Url::parse("https://api.example.com/v1/").unwrap();
        let resolve = |uri: &str| {
            let request = ClientRequest::new(Method::GET, uri.to_string(), HeaderMap::new(), None);
            request.resolve(&base).unwrap().to_string()
        };

        assert_eq!(resolve("urn:x"), "https://api.example.com/v1/urn:x");
        assert_eq!(resolve("a:b/c?d=1"), "https://api.example.com/v1/a:b/c?d=1");
        assert_eq!(resolve("zones/a:b"), "https://api.example.com/v1/zones/a:b");
    }

    #[test]
    fn test_into_reqwest() {
        let base = Url::parse("https://api.example.com/").unwrap();
        let request = sample().into_reqwest(&base).unwrap();

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.url().path(), "/servers/7");
        assert_eq!(request.url().query(), Some("force=1"));
        assert_eq!(request.headers()[ACCEPT], "application/json");
    }
}
