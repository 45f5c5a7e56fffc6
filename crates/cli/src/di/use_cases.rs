use super::DohServices;
use dohjson_application::use_cases::{LookupAUseCase, LookupUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub lookup: Arc<LookupUseCase>,
    pub lookup_a: Arc<LookupAUseCase>,
}

impl UseCases {
    pub fn new(services: &DohServices) -> Self {
        Self {
            lookup: Arc::new(LookupUseCase::new(
                services.transport.clone(),
                services.translator.clone(),
            )),
            lookup_a: Arc::new(LookupAUseCase::new(
                services.transport.clone(),
                services.translator.clone(),
            )),
        }
    }
}
