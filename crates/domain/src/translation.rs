use std::fmt;

/// Why a single DoH entry did not make it into the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Type code outside the supported set (carries the raw code).
    UnsupportedType(i64),
    /// Payload could not be parsed for its type.
    MalformedData,
    /// Owner name or TTL unusable.
    InvalidHeader,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedType(code) => write!(f, "unsupported type {}", code),
            SkipReason::MalformedData => f.write_str("malformed data"),
            SkipReason::InvalidHeader => f.write_str("invalid header"),
        }
    }
}

/// Per-reason tally of dropped records for one translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipStats {
    pub unsupported: usize,
    pub malformed: usize,
    pub invalid_header: usize,
}

impl SkipStats {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::UnsupportedType(_) => self.unsupported += 1,
            SkipReason::MalformedData => self.malformed += 1,
            SkipReason::InvalidHeader => self.invalid_header += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.unsupported + self.malformed + self.invalid_header
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
