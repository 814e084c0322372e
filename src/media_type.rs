//! Media types used for the `Accept` and `Content-Type` headers.

use http::HeaderValue;
use std::fmt;

/// A MIME type understood by the request builder.
///
/// # Examples
///
/// ```
/// use http_client_utilities::MediaType;
///
/// assert_eq!(MediaType::Json.as_str(), "application/json");
/// assert_eq!(MediaType::default(), MediaType::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
    /// `multipart/form-data`
    MultipartFormData,
    /// `text/plain`
    TextPlain,
    /// `text/html`
    TextHtml,
    /// `application/xml`
    Xml,
    /// `application/octet-stream`
    OctetStream,
    /// `*/*`
    Any,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::FormUrlEncoded => "application/x-www-form-urlencoded",
            MediaType::MultipartFormData => "multipart/form-data",
            MediaType::TextPlain => "text/plain",
            MediaType::TextHtml => "text/html",
            MediaType::Xml => "application/xml",
            MediaType::OctetStream => "application/octet-stream",
            MediaType::Any => "*/*",
        }
    }

    /// Returns the media type as a header value.
    pub fn header_value(self) -> HeaderValue {
        HeaderValue::from_static(self.as_str())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_values_are_valid() {
        for media_type in [
            MediaType::Json,
            MediaType::FormUrlEncoded,
            MediaType::MultipartFormData,
            MediaType::TextPlain,
            MediaType::TextHtml,
            MediaType::Xml,
            MediaType::OctetStream,
            MediaType::Any,
        ] {
            assert_eq!(media_type.header_value(), media_type.as_str());
        }
    }
}
