pub mod translation;
pub mod transport;

pub use translation::{
    JsonTranslator, MessageAssembler, RecordSynthesizer, RecordTypeMapper, ResponseDecoder,
};
pub use transport::https::HttpsJsonTransport;
