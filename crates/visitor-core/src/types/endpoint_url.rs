//! Visitor-listing endpoint URL type.

use std::fmt;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated URL of the visitor-listing endpoint.
///
/// The URL must be absolute, have a host, and use `http` or `https`.
/// Path and query are kept as given; the listing is fetched from exactly
/// this URL.
///
/// # Example
///
/// ```
/// use visitor_core::EndpointUrl;
///
/// let endpoint = EndpointUrl::new("http://localhost:5000/api/visitors").unwrap();
/// assert_eq!(endpoint.host(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EndpointUrl(Url);

impl EndpointUrl {
    /// Parse and validate an endpoint URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let invalid = |reason: String| InvalidInputError::EndpointUrl {
            value: s.to_string(),
            reason,
        };

        let url = Url::parse(s).map_err(|e| invalid(e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL".to_string()).into());
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}' (expected http or https)",
                url.scheme()
            ))
            .into());
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("must have a host".to_string()).into());
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
