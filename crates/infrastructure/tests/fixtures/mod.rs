#![allow(dead_code)]

/// Google `dns.google/resolve` answer for `www.github.com` A.
pub const CNAME_CHAIN_A: &str = r#"{
  "Status": 0,
  "TC": false,
  "RD": true,
  "RA": true,
  "AD": false,
  "CD": false,
  "Question": [{"name": "www.github.com.", "type": 1}],
  "Answer": [
    {"name": "www.github.com.", "type": 5, "TTL": 3600, "data": "github.com."},
    {"name": "github.com.", "type": 1, "TTL": 60, "data": "140.82.121.4"}
  ]
}"#;

/// NXDOMAIN with the zone SOA in the authority section.
pub const NXDOMAIN_WITH_SOA: &str = r#"{
  "Status": 3,
  "TC": false,
  "RD": true,
  "RA": true,
  "AD": true,
  "CD": false,
  "Question": [{"name": "nope.example.com.", "type": 1}],
  "Authority": [
    {"name": "example.com.", "type": 6, "TTL": 1800,
     "data": "ns.icann.org. noc.dns.icann.org. 2024081412 7200 3600 1209600 3600"}
  ],
  "Comment": "Response from 199.43.135.53."
}"#;

/// Signed zone: RRSIG entries interleaved with the records.
pub const SIGNED_TXT: &str = r#"{
  "Status": 0,
  "TC": false,
  "RD": true,
  "RA": true,
  "AD": true,
  "CD": false,
  "Question": [{"name": "example.com.", "type": 16}],
  "Answer": [
    {"name": "example.com.", "type": 16, "TTL": 86400, "data": "\"v=spf1 -all\""},
    {"name": "example.com.", "type": 46, "TTL": 86400, "data": "txt 13 2 86400 ..."},
    {"name": "example.com.", "type": 16, "TTL": 86400, "data": "\"hello world\""},
    {"name": "example.com.", "type": 16, "TTL": 86400, "data": "not quoted"}
  ]
}"#;

/// Cloudflare-style answer with ECS echo and null sections.
pub const ECS_A: &str = r#"{
  "Status": 0,
  "TC": false,
  "RD": true,
  "RA": true,
  "AD": false,
  "CD": false,
  "Question": [{"name": "www.iqiyi.com.", "type": 1}],
  "Answer": [
    {"name": "www.iqiyi.com.", "type": 1, "TTL": 300, "data": "101.227.0.139"},
    {"name": "www.iqiyi.com.", "type": 1, "TTL": 300, "data": "101.227.0.140"},
    {"name": "www.iqiyi.com.", "type": 28, "TTL": 300, "data": "2408:8000::1"}
  ],
  "Authority": null,
  "Additional": [],
  "edns_client_subnet": "60.186.195.0/24"
}"#;
