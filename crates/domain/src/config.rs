pub mod doh;
pub mod errors;
pub mod logging;
pub mod root;

pub use doh::{DohConfig, DohProvider};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
