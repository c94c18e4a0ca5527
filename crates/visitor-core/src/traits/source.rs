//! Record source trait.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::record::VisitorRecord;

/// Where the visitor list comes from.
///
/// A source answers one question: the full list, in the store's order.
/// There is no paging, querying or incremental update.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the complete visitor list.
    async fn fetch_all(&self) -> Result<Vec<VisitorRecord>, FetchError>;
}
