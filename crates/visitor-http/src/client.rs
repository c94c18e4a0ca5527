//! HTTP client for the visitor-listing endpoint.

use reqwest::header::{ACCEPT, HeaderValue};
use tracing::{debug, instrument, trace};

use visitor_core::{EndpointUrl, FetchError};

/// Longest slice of an error body carried into a [`FetchError`].
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client bound to one visitor-listing endpoint.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    endpoint: EndpointUrl,
}

impl HttpClient {
    /// Create a new client for the given endpoint.
    pub(crate) fn new(endpoint: EndpointUrl) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("visitor-board/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint this client is configured for.
    pub(crate) fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// GET the endpoint and return the raw body of a successful response.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub(crate) async fn get_body(&self) -> Result<String, FetchError> {
        debug!("GET visitor listing");

        let response = self
            .client
            .get(self.endpoint.as_url().clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "visitor listing response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let mut message = format!("HTTP {}", status.as_u16());
            let snippet = snippet(&body);
            if !snippet.is_empty() {
                message.push_str(": ");
                message.push_str(snippet);
            }
            return Err(FetchError::Transport {
                status: Some(status.as_u16()),
                message,
            });
        }

        response.text().await.map_err(transport_error)
    }
}

/// Map a reqwest failure onto [`FetchError::Transport`].
pub fn transport_error(err: reqwest::Error) -> FetchError {
    let status = err.status().map(|s| s.as_u16());
    let message = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    };
    FetchError::Transport { status, message }
}

/// Leading part of a body, cut on a char boundary.
pub(crate) fn snippet(body: &str) -> &str {
    let body = body.trim();
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let endpoint = EndpointUrl::new("http://localhost:5000/api/visitors").unwrap();
        let client = HttpClient::new(endpoint.clone()).unwrap();
        assert_eq!(client.endpoint(), &endpoint);
    }

    #[test]
    fn snippet_is_bounded_and_trimmed() {
        assert_eq!(snippet("  Not Found \n"), "Not Found");

        let long = "é".repeat(500);
        assert_eq!(snippet(&long).chars().count(), ERROR_BODY_LIMIT);
    }
}
