use super::record_type_map::RecordTypeMapper;
use super::synthesizer::RecordSynthesizer;
use dohjson_application::ports::Translation;
use dohjson_domain::{DohCommon, DohQuery, DohResponse, DomainError, RecordType, SkipStats};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, Record};
use std::str::FromStr;
use tracing::{debug, trace};

/// Builds DNS messages from decoded DoH responses.
///
/// Output sections keep the order of the JSON arrays; entries the
/// synthesizer rejects are counted and left out.
pub struct MessageAssembler;

impl MessageAssembler {
    pub fn assemble(query: &DohQuery, response: &DohResponse) -> Result<Translation, DomainError> {
        let name = Name::from_str(&query.fqdn()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(hickory_proto::rr::DNSClass::IN);

        // Fixed ID: the message is synthesized, not matched against a wire query.
        let mut message = Message::new(0, MessageType::Response, OpCode::Query);
        message.add_query(question);
        Self::apply_flags(&mut message, response);

        let skipped = Self::append(&mut message, response);

        Ok(Translation { message, skipped })
    }

    /// Append answer and authority records without touching the question
    /// section or the header.
    pub fn append(message: &mut Message, response: &DohResponse) -> SkipStats {
        let mut skipped = SkipStats::default();

        for record in Self::synthesize_all(&response.answer, &mut skipped) {
            message.add_answer(record);
        }
        for record in Self::synthesize_all(&response.authority, &mut skipped) {
            message.add_name_server(record);
        }

        if !skipped.is_empty() {
            debug!(
                unsupported = skipped.unsupported,
                malformed = skipped.malformed,
                invalid_header = skipped.invalid_header,
                "Skipped DoH records"
            );
        }

        skipped
    }

    /// A records of the answer section; other types are ignored, not counted.
    pub fn a_records(response: &DohResponse) -> Vec<Record> {
        let a_code = i64::from(RecordType::A.to_u16());

        response
            .answer
            .iter()
            .filter(|entry| entry.record_type == a_code)
            .filter_map(|entry| RecordSynthesizer::synthesize(entry).ok())
            .collect()
    }

    fn synthesize_all(entries: &[DohCommon], skipped: &mut SkipStats) -> Vec<Record> {
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            match RecordSynthesizer::synthesize(entry) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    trace!(name = %entry.name, reason = %reason, "Record left out");
                    skipped.record(reason);
                }
            }
        }

        records
    }

    fn apply_flags(message: &mut Message, response: &DohResponse) {
        let rcode = u16::try_from(response.status)
            .map(|code| <ResponseCode as From<u16>>::from(code))
            .unwrap_or(ResponseCode::ServFail);

        message.set_response_code(rcode);
        message.set_truncated(response.truncated);
        message.set_recursion_desired(response.recursion_desired);
        message.set_recursion_available(response.recursion_available);
        message.set_authentic_data(response.authenticated_data);
        message.set_checking_disabled(response.checking_disabled);
    }
}
