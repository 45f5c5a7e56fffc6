use dohjson_domain::{DohQuery, DohResponse, DomainError, SkipStats};
use hickory_proto::op::Message;
use hickory_proto::rr::Record;

/// A translated DoH payload plus a tally of the entries that were dropped.
#[derive(Debug, Clone)]
pub struct Translation {
    pub message: Message,
    pub skipped: SkipStats,
}

impl Translation {
    pub fn answers(&self) -> &[Record] {
        self.message.answers()
    }

    pub fn authorities(&self) -> &[Record] {
        self.message.name_servers()
    }
}

/// Turns JSON payloads into DNS messages.
///
/// Implementations hold no mutable state, so one instance can serve any
/// number of concurrent lookups.
pub trait DohTranslator: Send + Sync {
    fn decode(&self, payload: &[u8]) -> Result<DohResponse, DomainError>;

    /// Build a full message for `query` from a decoded response.
    fn translate(
        &self,
        query: &DohQuery,
        response: &DohResponse,
    ) -> Result<Translation, DomainError>;

    /// Append answer and authority records to an existing message.
    fn append(&self, message: &mut Message, response: &DohResponse) -> SkipStats;

    /// Only the A records of the answer section.
    fn a_records(&self, response: &DohResponse) -> Vec<Record>;
}
