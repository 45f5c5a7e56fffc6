use crate::ports::{DohTranslator, DohTransport};
use dohjson_domain::{DohQuery, DomainError};
use hickory_proto::rr::Record;
use std::sync::Arc;
use tracing::debug;

/// IPv4-only shortcut: asks for `type=A` and keeps only the A answers.
pub struct LookupAUseCase {
    transport: Arc<dyn DohTransport>,
    translator: Arc<dyn DohTranslator>,
}

impl LookupAUseCase {
    pub fn new(transport: Arc<dyn DohTransport>, translator: Arc<dyn DohTranslator>) -> Self {
        Self {
            transport,
            translator,
        }
    }

    pub async fn execute(&self, name: &str) -> Result<Vec<Record>, DomainError> {
        let query = DohQuery::a_record(name);

        let payload = self.transport.fetch(&query).await?;
        let response = self.translator.decode(&payload)?;
        let records = self.translator.a_records(&response);

        debug!(
            name = %query.name,
            answers = response.answer.len(),
            a_records = records.len(),
            "DoH A lookup completed"
        );

        Ok(records)
    }
}
