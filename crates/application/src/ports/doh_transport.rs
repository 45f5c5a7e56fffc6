use async_trait::async_trait;
use dohjson_domain::{DohQuery, DomainError};

#[async_trait]
pub trait DohTransport: Send + Sync {
    /// Issue the JSON GET for `query` and return the raw response body.
    ///
    /// Network errors, timeouts and non-2xx statuses are all failures.
    async fn fetch(&self, query: &DohQuery) -> Result<Vec<u8>, DomainError>;

    fn endpoint(&self) -> &str;
}
