use super::errors::ConfigError;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const GOOGLE_ENDPOINT: &str = "https://dns.google/resolve";
const CLOUDFLARE_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// Well-known JSON DoH providers.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DohProvider {
    #[default]
    Google,

    Cloudflare,

    /// Any endpoint speaking the same JSON dialect; requires `endpoint`.
    Custom,
}

impl DohProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Cloudflare => "cloudflare",
            Self::Custom => "custom",
        }
    }

    pub fn default_endpoint(&self) -> Option<&'static str> {
        match self {
            Self::Google => Some(GOOGLE_ENDPOINT),
            Self::Cloudflare => Some(CLOUDFLARE_ENDPOINT),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for DohProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DohProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "cloudflare" => Ok(Self::Cloudflare),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("Unknown DoH provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DohConfig {
    #[serde(default)]
    pub provider: DohProvider,

    /// Overrides the provider preset when set.
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Client subnet forwarded as `edns_client_subnet`, e.g. `60.186.195.38/32`.
    #[serde(default)]
    pub client_subnet: Option<String>,

    /// HTTP(S) or SOCKS proxy URL.
    #[serde(default)]
    pub proxy: Option<String>,

    #[serde(default)]
    pub insecure_skip_verify: bool,
}

impl Default for DohConfig {
    fn default() -> Self {
        Self {
            provider: DohProvider::default(),
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            client_subnet: None,
            proxy: None,
            insecure_skip_verify: false,
        }
    }
}

impl DohConfig {
    pub fn google() -> Self {
        Self::default()
    }

    pub fn cloudflare() -> Self {
        Self {
            provider: DohProvider::Cloudflare,
            ..Self::default()
        }
    }

    pub fn custom(endpoint: impl Into<String>) -> Self {
        Self {
            provider: DohProvider::Custom,
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Explicit endpoint first, then the provider preset.
    pub fn resolved_endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .or_else(|| self.provider.default_endpoint())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.resolved_endpoint().ok_or_else(|| {
            ConfigError::Validation(format!(
                "Provider '{}' requires an explicit endpoint",
                self.provider
            ))
        })?;

        if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
            return Err(ConfigError::Validation(format!(
                "DoH endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "DoH timeout cannot be 0".to_string(),
            ));
        }

        if let Some(subnet) = &self.client_subnet {
            subnet.parse::<IpNetwork>().map_err(|e| {
                ConfigError::Validation(format!("Invalid client subnet {}: {}", subnet, e))
            })?;
        }

        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    10
}
