//! Mapping between `dohjson_domain::RecordType` and `hickory_proto::rr::RecordType`

use dohjson_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Maps domain record types onto hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for the question section)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::TXT => HickoryRecordType::TXT,
        }
    }
}
