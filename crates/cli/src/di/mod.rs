mod doh;
mod use_cases;

pub use doh::DohServices;
pub use use_cases::UseCases;
