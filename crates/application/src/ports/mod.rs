pub mod doh_transport;
pub mod doh_translator;

pub use doh_transport::DohTransport;
pub use doh_translator::{DohTranslator, Translation};
