use super::RecordType;
use std::sync::Arc;

/// A single name + type lookup sent to a DoH endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DohQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    pub fn a_record(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, RecordType::A)
    }

    /// Owner name with the trailing root dot enforced.
    pub fn fqdn(&self) -> String {
        fqdn(&self.name)
    }
}

/// Appends the root label when `name` is not already fully qualified.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
