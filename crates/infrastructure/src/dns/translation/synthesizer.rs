//! Per-entry conversion of DoH JSON records into `hickory_proto` records.
//!
//! Every entry is untrusted network input. A bad entry yields a
//! [`SkipReason`] and never aborts the rest of the message.

use super::txt::unquote_segments;
use dohjson_domain::doh_query::fqdn;
use dohjson_domain::{DohCommon, RecordType, SkipReason};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::{debug, trace, warn};

pub struct RecordSynthesizer;

impl RecordSynthesizer {
    /// Build one resource record from a raw entry.
    ///
    /// The header is stamped the same way for every type: FQDN owner name,
    /// class IN, TTL copied as-is.
    pub fn synthesize(entry: &DohCommon) -> Result<Record, SkipReason> {
        let record_type = Self::record_type(entry)?;
        let rdata = Self::rdata(record_type, entry)?;

        let name = Self::owner_name(entry)?;
        let ttl = u32::try_from(entry.ttl).map_err(|_| {
            debug!(name = %entry.name, ttl = entry.ttl, "Dropping record with out-of-range TTL");
            SkipReason::InvalidHeader
        })?;

        Ok(Record::from_rdata(name, ttl, rdata))
    }

    fn record_type(entry: &DohCommon) -> Result<RecordType, SkipReason> {
        u16::try_from(entry.record_type)
            .ok()
            .and_then(RecordType::from_u16)
            .ok_or_else(|| {
                trace!(
                    name = %entry.name,
                    record_type = entry.record_type,
                    "Skipping unsupported record type"
                );
                SkipReason::UnsupportedType(entry.record_type)
            })
    }

    fn rdata(record_type: RecordType, entry: &DohCommon) -> Result<RData, SkipReason> {
        let data = entry.data.as_str();

        match record_type {
            RecordType::A => {
                let ip = data.parse::<Ipv4Addr>().unwrap_or_else(|_| {
                    debug!(name = %entry.name, data, "Unparsable A data, using 0.0.0.0");
                    Ipv4Addr::UNSPECIFIED
                });
                Ok(RData::A(A(ip)))
            }
            RecordType::AAAA => {
                let ip = data
                    .parse::<Ipv6Addr>()
                    .or_else(|_| data.parse::<Ipv4Addr>().map(|v4| v4.to_ipv6_mapped()))
                    .unwrap_or_else(|_| {
                        debug!(name = %entry.name, data, "Unparsable AAAA data, using ::");
                        Ipv6Addr::UNSPECIFIED
                    });
                Ok(RData::AAAA(AAAA(ip)))
            }
            RecordType::TXT => {
                let strings = unquote_segments(data).map_err(|e| {
                    warn!(name = %entry.name, data, error = %e, "Dropping TXT record");
                    SkipReason::MalformedData
                })?;
                let slices: Vec<&[u8]> = strings.iter().map(Vec::as_slice).collect();
                Ok(RData::TXT(TXT::from_bytes(slices)))
            }
            RecordType::CNAME => {
                let target = Self::parse_name(data, entry)?;
                Ok(RData::CNAME(CNAME(target)))
            }
            RecordType::SOA => Self::soa(entry).map(RData::SOA),
        }
    }

    /// `mname rname serial refresh retry expire minimum`, single-space separated.
    fn soa(entry: &DohCommon) -> Result<SOA, SkipReason> {
        let tokens: Vec<&str> = entry.data.split(' ').collect();

        let [mname, rname, serial, refresh, retry, expire, minimum, ..] = tokens.as_slice() else {
            debug!(
                name = %entry.name,
                tokens = tokens.len(),
                "Dropping SOA record with too few fields"
            );
            return Err(SkipReason::MalformedData);
        };

        Ok(SOA::new(
            Self::parse_name(mname, entry)?,
            Self::parse_name(rname, entry)?,
            Self::parse_u32(serial, entry)?,
            Self::soa_interval(refresh, entry)?,
            Self::soa_interval(retry, entry)?,
            Self::soa_interval(expire, entry)?,
            Self::parse_u32(minimum, entry)?,
        ))
    }

    /// Intervals are unsigned on the wire; hickory stores them as `i32`.
    fn soa_interval(token: &str, entry: &DohCommon) -> Result<i32, SkipReason> {
        Self::parse_u32(token, entry).map(|value| value as i32)
    }

    fn parse_u32(token: &str, entry: &DohCommon) -> Result<u32, SkipReason> {
        token.parse::<u32>().map_err(|e| {
            debug!(name = %entry.name, token, error = %e, "Invalid numeric SOA field");
            SkipReason::MalformedData
        })
    }

    fn parse_name(value: &str, entry: &DohCommon) -> Result<Name, SkipReason> {
        Name::from_str(value).map_err(|e| {
            debug!(name = %entry.name, value, error = %e, "Invalid domain name in record data");
            SkipReason::MalformedData
        })
    }

    fn owner_name(entry: &DohCommon) -> Result<Name, SkipReason> {
        Name::from_str(&fqdn(&entry.name)).map_err(|e| {
            debug!(name = %entry.name, error = %e, "Invalid owner name");
            SkipReason::InvalidHeader
        })
    }
}
