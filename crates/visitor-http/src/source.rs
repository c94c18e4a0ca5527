//! HTTP-backed record source.

use async_trait::async_trait;
use tracing::{debug, instrument};

use visitor_core::{EndpointUrl, FetchError, RecordSource, VisitorRecord};

use crate::client::HttpClient;
use crate::validate::validate_payload;

/// Fetches the visitor list with a single `GET` to the listing endpoint.
///
/// No retries, paging or timeouts beyond the transport's own.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: HttpClient,
}

impl HttpRecordSource {
    /// Create a source for the given endpoint.
    pub fn new(endpoint: EndpointUrl) -> Result<Self, FetchError> {
        Ok(Self {
            client: HttpClient::new(endpoint)?,
        })
    }

    /// Returns the endpoint URL for this source.
    pub fn endpoint(&self) -> &EndpointUrl {
        self.client.endpoint()
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    #[instrument(skip(self), fields(endpoint = %self.client.endpoint()))]
    async fn fetch_all(&self) -> Result<Vec<VisitorRecord>, FetchError> {
        let body = self.client.get_body().await?;
        debug!(bytes = body.len(), "Received visitor listing");
        validate_payload(&body)
    }
}
