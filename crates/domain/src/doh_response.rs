//! Schema of the `application/dns-json` response body.
//!
//! Google and Cloudflare share this layout:
//! <https://developers.google.com/speed/public-dns/docs/doh/json>
//! <https://developers.cloudflare.com/1.1.1.1/encryption/dns-over-https/make-api-requests/dns-json/>
//!
//! Unknown keys are ignored and absent (or `null`) keys fall back to their
//! zero value, so new provider fields never break decoding.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DohResponse {
    /// Standard DNS response code (0 = NOERROR, 2 = SERVFAIL, 3 = NXDOMAIN).
    #[serde(rename = "Status")]
    pub status: i32,

    #[serde(rename = "TC")]
    pub truncated: bool,

    #[serde(rename = "RD")]
    pub recursion_desired: bool,

    #[serde(rename = "RA")]
    pub recursion_available: bool,

    /// Every record in the answer was validated with DNSSEC.
    #[serde(rename = "AD")]
    pub authenticated_data: bool,

    #[serde(rename = "CD")]
    pub checking_disabled: bool,

    #[serde(rename = "Question", deserialize_with = "null_as_default")]
    pub question: Vec<DohQuestion>,

    #[serde(rename = "Answer", deserialize_with = "null_as_default")]
    pub answer: Vec<DohCommon>,

    #[serde(rename = "Authority", deserialize_with = "null_as_default")]
    pub authority: Vec<DohCommon>,

    #[serde(rename = "Additional", deserialize_with = "null_as_default")]
    pub additional: Vec<serde_json::Value>,

    /// Client subnet echoed back as `address/scope-prefix`.
    #[serde(deserialize_with = "null_as_default")]
    pub edns_client_subnet: String,

    /// Free-text diagnostics; Cloudflare sends a list of strings.
    #[serde(rename = "Comment", deserialize_with = "comment")]
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DohQuestion {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: i64,
}

/// One raw answer or authority entry.
///
/// `record_type` and `ttl` are kept wide so out-of-range values can be
/// rejected per record instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DohCommon {
    /// Owner name, normally matching the question.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: i64,

    #[serde(rename = "TTL")]
    pub ttl: i64,

    /// Presentation-format payload; its shape depends on `record_type`.
    #[serde(deserialize_with = "null_as_default")]
    pub data: String,
}

impl DohCommon {
    pub fn new(name: &str, record_type: i64, ttl: i64, data: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type,
            ttl,
            data: data.to_string(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn comment<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Comment {
        Text(String),
        Lines(Vec<String>),
    }

    Ok(match Option::<Comment>::deserialize(deserializer)? {
        Some(Comment::Text(text)) => text,
        Some(Comment::Lines(lines)) => lines.join(" "),
        None => String::new(),
    })
}
