use super::assembler::MessageAssembler;
use super::decoder::ResponseDecoder;
use dohjson_application::ports::{DohTranslator, Translation};
use dohjson_domain::{DohQuery, DohResponse, DomainError, SkipStats};
use hickory_proto::op::Message;
use hickory_proto::rr::Record;

/// [`DohTranslator`] for the Google/Cloudflare `dns-json` dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTranslator;

impl JsonTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl DohTranslator for JsonTranslator {
    fn decode(&self, payload: &[u8]) -> Result<DohResponse, DomainError> {
        ResponseDecoder::decode(payload)
    }

    fn translate(
        &self,
        query: &DohQuery,
        response: &DohResponse,
    ) -> Result<Translation, DomainError> {
        MessageAssembler::assemble(query, response)
    }

    fn append(&self, message: &mut Message, response: &DohResponse) -> SkipStats {
        MessageAssembler::append(message, response)
    }

    fn a_records(&self, response: &DohResponse) -> Vec<Record> {
        MessageAssembler::a_records(response)
    }
}
