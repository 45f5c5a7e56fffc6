//! dohjson Infrastructure Layer
pub mod dns;
