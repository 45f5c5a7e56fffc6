use dohjson_domain::{DohResponse, DomainError};
use tracing::debug;

/// Decodes `application/dns-json` bodies.
pub struct ResponseDecoder;

impl ResponseDecoder {
    pub fn decode(payload: &[u8]) -> Result<DohResponse, DomainError> {
        let response: DohResponse = serde_json::from_slice(payload).map_err(|e| {
            debug!(error = %e, payload_len = payload.len(), "Failed to decode DoH JSON");
            DomainError::Decode(e.to_string())
        })?;

        debug!(
            status = response.status,
            answers = response.answer.len(),
            authorities = response.authority.len(),
            truncated = response.truncated,
            "DoH JSON decoded"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_google_style_payload() {
        let payload = br#"{
            "Status": 0, "TC": false, "RD": true, "RA": true, "AD": false, "CD": false,
            "Question": [{"name": "example.com.", "type": 1}],
            "Answer": [{"name": "example.com.", "type": 1, "TTL": 3600, "data": "93.184.216.34"}],
            "edns_client_subnet": "60.186.195.0/24",
            "Comment": "Response from 199.43.135.53."
        }"#;

        let response = ResponseDecoder::decode(payload).unwrap();

        assert!(response.recursion_desired);
        assert!(response.recursion_available);
        assert_eq!(response.question.len(), 1);
        assert_eq!(response.question[0].record_type, 1);
        assert_eq!(response.answer[0].data, "93.184.216.34");
        assert_eq!(response.answer[0].ttl, 3600);
        assert_eq!(response.edns_client_subnet, "60.186.195.0/24");
        assert_eq!(response.comment, "Response from 199.43.135.53.");
    }

    #[test]
    fn test_decode_invalid_json() {
        let result = ResponseDecoder::decode(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(DomainError::Decode(_))));
    }

    #[test]
    fn test_decode_schema_mismatch() {
        let result = ResponseDecoder::decode(br#"{"Status": "ok"}"#);
        assert!(matches!(result, Err(DomainError::Decode(_))));

        let result = ResponseDecoder::decode(br#"{"Answer": [{"name": 5}]}"#);
        assert!(matches!(result, Err(DomainError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(ResponseDecoder::decode(b"").is_err());
        assert!(ResponseDecoder::decode(b"null").is_err());
    }
}
