#![allow(dead_code)]

use async_trait::async_trait;
use dohjson_application::ports::{DohTranslator, DohTransport, Translation};
use dohjson_domain::{DohQuery, DohResponse, DomainError, SkipReason, SkipStats};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Transport that replays a canned body (or error) and remembers every query.
#[derive(Clone)]
pub struct MockDohTransport {
    body: Arc<Mutex<Result<Vec<u8>, DomainError>>>,
    queries: Arc<Mutex<Vec<DohQuery>>>,
}

impl MockDohTransport {
    pub fn with_body(body: &str) -> Self {
        Self {
            body: Arc::new(Mutex::new(Ok(body.as_bytes().to_vec()))),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            body: Arc::new(Mutex::new(Err(error))),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn queries(&self) -> Vec<DohQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DohTransport for MockDohTransport {
    async fn fetch(&self, query: &DohQuery) -> Result<Vec<u8>, DomainError> {
        self.queries.lock().unwrap().push(query.clone());
        self.body.lock().unwrap().clone()
    }

    fn endpoint(&self) -> &str {
        "https://mock.invalid/resolve"
    }
}

/// Minimal translator: only understands A entries, counts everything else
/// as unsupported.
pub struct StubTranslator;

impl StubTranslator {
    fn a_record(name: &str, ttl: i64, data: &str) -> Option<Record> {
        let name = Name::from_str(name).ok()?;
        let ip = data.parse::<Ipv4Addr>().ok()?;
        Some(Record::from_rdata(name, ttl as u32, RData::A(A(ip))))
    }
}

impl DohTranslator for StubTranslator {
    fn decode(&self, payload: &[u8]) -> Result<DohResponse, DomainError> {
        serde_json::from_slice(payload).map_err(|e| DomainError::Decode(e.to_string()))
    }

    fn translate(
        &self,
        query: &DohQuery,
        response: &DohResponse,
    ) -> Result<Translation, DomainError> {
        let name = Name::from_str(&query.fqdn())
            .map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;

        let mut message = Message::new(0, MessageType::Response, OpCode::Query);
        message.add_query(Query::query(
            name,
            hickory_proto::rr::RecordType::from(query.record_type.to_u16()),
        ));
        let skipped = self.append(&mut message, response);

        Ok(Translation { message, skipped })
    }

    fn append(&self, message: &mut Message, response: &DohResponse) -> SkipStats {
        let mut skipped = SkipStats::default();
        for entry in &response.answer {
            match entry.record_type {
                1 => match Self::a_record(&entry.name, entry.ttl, &entry.data) {
                    Some(record) => {
                        message.add_answer(record);
                    }
                    None => skipped.record(SkipReason::MalformedData),
                },
                other => skipped.record(SkipReason::UnsupportedType(other)),
            }
        }
        skipped
    }

    fn a_records(&self, response: &DohResponse) -> Vec<Record> {
        response
            .answer
            .iter()
            .filter(|entry| entry.record_type == 1)
            .filter_map(|entry| Self::a_record(&entry.name, entry.ttl, &entry.data))
            .collect()
    }
}
