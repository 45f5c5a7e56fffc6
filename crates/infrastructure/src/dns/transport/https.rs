//! HTTPS Transport for JSON DNS queries (Google / Cloudflare `dns-json`)
//!
//! Sends a GET with the question encoded as query parameters and expects
//! an `application/dns-json` body back.
//!
//! Wire format (HTTP):
//! ```text
//! GET /resolve?name=example.com&type=A&cd=false&do=false HTTP/2
//! Accept: application/dns-json
//! ```

use async_trait::async_trait;
use dohjson_application::ports::DohTransport;
use dohjson_domain::{DohConfig, DohQuery, DomainError};
use std::time::Duration;
use tracing::debug;

/// Media type for JSON DNS responses
const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// JSON DNS-over-HTTPS transport
pub struct HttpsJsonTransport {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
    client_subnet: Option<String>,
}

impl HttpsJsonTransport {
    /// Transport with default client settings.
    pub fn new(url: String) -> Result<Self, DomainError> {
        Self::from_config(&DohConfig::custom(url))
    }

    pub fn from_config(config: &DohConfig) -> Result<Self, DomainError> {
        let url = config.resolved_endpoint().ok_or_else(|| {
            DomainError::ConfigError(format!(
                "No endpoint configured for provider '{}'",
                config.provider
            ))
        })?;

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .pool_max_idle_per_host(4)
            .danger_accept_invalid_certs(config.insecure_skip_verify);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                DomainError::ConfigError(format!("Invalid proxy {}: {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.to_string(),
            client,
            timeout: config.timeout(),
            client_subnet: config.client_subnet.clone(),
        })
    }

    /// Query parameters in the order they are sent.
    ///
    /// DNSSEC signalling is always off (`cd=false`, `do=false`).
    pub fn query_params(
        query: &DohQuery,
        client_subnet: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("name", query.name.to_string()),
            ("type", query.record_type.as_str().to_string()),
            ("cd", "false".to_string()),
            ("do", "false".to_string()),
        ];

        if let Some(subnet) = client_subnet {
            params.push(("edns_client_subnet", subnet.to_string()));
        }

        params
    }
}

#[async_trait]
impl DohTransport for HttpsJsonTransport {
    async fn fetch(&self, query: &DohQuery) -> Result<Vec<u8>, DomainError> {
        let params = Self::query_params(query, self.client_subnet.as_deref());

        debug!(
            url = %self.url,
            name = %query.name,
            record_type = %query.record_type,
            "Sending DoH JSON query"
        );

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .get(&self.url)
                .header(reqwest::header::ACCEPT, DNS_JSON_CONTENT_TYPE)
                .query(&params)
                .send(),
        )
        .await
        .map_err(|_| DomainError::QueryTimeout)?
        .map_err(|e| {
            if e.is_timeout() {
                DomainError::QueryTimeout
            } else {
                DomainError::Transport {
                    endpoint: self.url.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                endpoint: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::Transport {
                endpoint: self.url.clone(),
                message: format!("Failed to read response body: {}", e),
            })?;

        debug!(
            url = %self.url,
            response_len = body.len(),
            "DoH JSON response received"
        );

        Ok(body.to_vec())
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dohjson_domain::RecordType;

    #[test]
    fn test_https_transport_google() {
        let transport = HttpsJsonTransport::from_config(&DohConfig::google()).unwrap();
        assert_eq!(transport.endpoint(), "https://dns.google/resolve");
    }

    #[test]
    fn test_https_transport_cloudflare() {
        let transport = HttpsJsonTransport::from_config(&DohConfig::cloudflare()).unwrap();
        assert_eq!(transport.endpoint(), "https://cloudflare-dns.com/dns-query");
    }

    #[test]
    fn test_https_transport_custom_url() {
        let transport = HttpsJsonTransport::new("https://doh.example/resolve".to_string()).unwrap();
        assert_eq!(transport.endpoint(), "https://doh.example/resolve");
    }

    #[test]
    fn test_custom_provider_without_endpoint_fails() {
        let config = DohConfig {
            provider: dohjson_domain::DohProvider::Custom,
            ..DohConfig::default()
        };
        assert!(matches!(
            HttpsJsonTransport::from_config(&config),
            Err(DomainError::ConfigError(_))
        ));
    }

    #[test]
    fn test_query_params_fixed_dnssec_flags() {
        let query = DohQuery::new("example.com.", RecordType::TXT);
        let params = HttpsJsonTransport::query_params(&query, None);

        assert_eq!(
            params,
            vec![
                ("name", "example.com.".to_string()),
                ("type", "TXT".to_string()),
                ("cd", "false".to_string()),
                ("do", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_with_client_subnet() {
        let query = DohQuery::a_record("www.iqiyi.com");
        let params = HttpsJsonTransport::query_params(&query, Some("60.186.195.38/32"));

        assert_eq!(params.len(), 5);
        assert_eq!(
            params[4],
            ("edns_client_subnet", "60.186.195.38/32".to_string())
        );
    }
}
