pub mod assembler;
pub mod decoder;
pub mod record_type_map;
pub mod synthesizer;
pub mod translator;
pub mod txt;

pub use assembler::MessageAssembler;
pub use decoder::ResponseDecoder;
pub use record_type_map::RecordTypeMapper;
pub use synthesizer::RecordSynthesizer;
pub use translator::JsonTranslator;
