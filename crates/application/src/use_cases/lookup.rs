use crate::ports::{DohTranslator, DohTransport, Translation};
use dohjson_domain::{DohQuery, DohResponse, DomainError, RecordType, SkipStats};
use hickory_proto::op::Message;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub struct LookupUseCase {
    transport: Arc<dyn DohTransport>,
    translator: Arc<dyn DohTranslator>,
}

impl LookupUseCase {
    pub fn new(transport: Arc<dyn DohTransport>, translator: Arc<dyn DohTranslator>) -> Self {
        Self {
            transport,
            translator,
        }
    }

    /// Resolve `name` and return a message whose question is `name`/`record_type`.
    pub async fn execute(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Translation, DomainError> {
        let start = Instant::now();
        let query = DohQuery::new(name, record_type);

        let response = self.fetch(&query).await?;
        let translation = self.translator.translate(&query, &response)?;

        info!(
            name = %query.name,
            record_type = %record_type,
            status = response.status,
            answers = translation.answers().len(),
            authorities = translation.authorities().len(),
            skipped = translation.skipped.total(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "DoH lookup completed"
        );

        Ok(translation)
    }

    /// Resolve `name` and append the records to a caller-owned message.
    ///
    /// The message's question section is left untouched.
    pub async fn execute_append(
        &self,
        message: &mut Message,
        name: &str,
        record_type: RecordType,
    ) -> Result<SkipStats, DomainError> {
        let query = DohQuery::new(name, record_type);

        let response = self.fetch(&query).await?;
        let skipped = self.translator.append(message, &response);

        debug!(
            name = %query.name,
            record_type = %record_type,
            answers = message.answers().len(),
            skipped = skipped.total(),
            "DoH records appended"
        );

        Ok(skipped)
    }

    async fn fetch(&self, query: &DohQuery) -> Result<DohResponse, DomainError> {
        let payload = self.transport.fetch(query).await?;
        let response = self.translator.decode(&payload)?;

        if !response.comment.is_empty() {
            debug!(
                endpoint = self.transport.endpoint(),
                comment = %response.comment,
                "DoH provider comment"
            );
        }

        Ok(response)
    }
}
