pub mod https;

pub use https::HttpsJsonTransport;
