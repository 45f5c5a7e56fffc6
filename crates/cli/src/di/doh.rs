use dohjson_application::ports::{DohTranslator, DohTransport};
use dohjson_domain::Config;
use dohjson_infrastructure::dns::{HttpsJsonTransport, JsonTranslator};
use std::sync::Arc;
use tracing::info;

pub struct DohServices {
    pub transport: Arc<dyn DohTransport>,
    pub translator: Arc<dyn DohTranslator>,
}

impl DohServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let transport = HttpsJsonTransport::from_config(&config.doh)?;

        info!(
            provider = %config.doh.provider,
            endpoint = transport.endpoint(),
            timeout_secs = config.doh.timeout_secs,
            "DoH transport ready"
        );

        Ok(Self {
            transport: Arc::new(transport),
            translator: Arc::new(JsonTranslator::new()),
        })
    }
}
