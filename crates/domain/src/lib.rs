//! dohjson Domain Layer
pub mod config;
pub mod dns_record;
pub mod doh_query;
pub mod doh_response;
pub mod errors;
pub mod translation;

pub use config::{CliOverrides, Config, ConfigError, DohConfig, DohProvider, LoggingConfig};
pub use dns_record::RecordType;
pub use doh_query::DohQuery;
pub use doh_response::{DohCommon, DohQuestion, DohResponse};
pub use errors::DomainError;
pub use translation::{SkipReason, SkipStats};
