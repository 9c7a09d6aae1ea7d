//! HTTP transport for Elasticsearch-compatible services.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use crate::bulk::transport::{BulkResponse, BulkTransport, ClusterInfo};
use crate::error::{IngestError, Result};

/// Default service URL.
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Connection settings for the search service.
#[derive(Clone)]
pub struct ElasticsearchConfig {
    /// Base URL, e.g. `https://localhost:9200`.
    pub url: String,

    /// Basic auth user name.
    pub username: String,

    /// Basic auth password.
    pub password: String,

    /// Extra root certificate (PEM) to trust.
    pub ca_cert: Option<PathBuf>,

    /// Timeout for a single request.
    pub timeout: Duration,
}

impl std::fmt::Debug for ElasticsearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticsearchConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ca_cert", &self.ca_cert)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            username: "elastic".to_string(),
            password: "123456".to_string(),
            ca_cert: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Blocking HTTP client for the info and bulk endpoints.
pub struct ElasticsearchClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for ElasticsearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticsearchClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish()
    }
}

impl ElasticsearchClient {
    /// Build a client. Fails if the CA certificate cannot be read or parsed.
    pub fn new(config: &ElasticsearchConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!("poem-indexer/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout);

        if let Some(path) = &config.ca_cert {
            let pem = fs::read(path).map_err(|e| {
                IngestError::invalid_config(format!(
                    "failed to read CA certificate {}: {e}",
                    path.display()
                ))
            })?;
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                IngestError::invalid_config(format!(
                    "invalid CA certificate {}: {e}",
                    path.display()
                ))
            })?;
            builder = builder.add_root_certificate(cert);
        }

        let http = builder
            .build()
            .map_err(|e| IngestError::invalid_config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn error_body(response: Response) -> String {
        let status = response.status();
        let text = response.text().unwrap_or_default();
        if text.is_empty() {
            status.to_string()
        } else {
            format!("{status}: {text}")
        }
    }
}

impl BulkTransport for ElasticsearchClient {
    fn info(&self) -> Result<ClusterInfo> {
        let response = self
            .http
            .get(self.endpoint("/"))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .map_err(|e| IngestError::connectivity(format!("{}: {e}", self.base_url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::connectivity(Self::error_body(response)));
        }

        let mut info: ClusterInfo = response
            .json()
            .map_err(|e| IngestError::connectivity(format!("unexpected info response: {e}")))?;
        info.status = status.as_u16();
        Ok(info)
    }

    fn bulk(&self, body: Vec<u8>) -> Result<BulkResponse> {
        let response = self
            .http
            .post(self.endpoint("/_bulk"))
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .map_err(|e| IngestError::transport(format!("bulk request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(IngestError::transport(format!(
                "bulk request rejected: {}",
                Self::error_body(response)
            )));
        }

        response
            .json()
            .map_err(|e| IngestError::transport(format!("unexpected bulk response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ElasticsearchClient::new(&ElasticsearchConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ElasticsearchConfig {
            url: "https://search.example.com:9200/".to_string(),
            ..Default::default()
        };
        let client = ElasticsearchClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "https://search.example.com:9200");
        assert_eq!(
            client.endpoint("/_bulk"),
            "https://search.example.com:9200/_bulk"
        );
        assert_eq!(client.endpoint("/"), "https://search.example.com:9200/");
    }

    #[test]
    fn test_missing_ca_cert_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ElasticsearchConfig {
            ca_cert: Some(dir.path().join("ca.pem")),
            ..Default::default()
        };
        let err = ElasticsearchClient::new(&config).unwrap_err();
        assert!(matches!(err, IngestError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ElasticsearchConfig {
            password: "hunter2".to_string(),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_unreachable_service_is_connectivity_error() {
        // Port 9 (discard) on localhost is essentially never an HTTP server.
        let config = ElasticsearchConfig {
            url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            ..Default::default()
        };
        let client = ElasticsearchClient::new(&config).unwrap();
        let err = client.info().unwrap_err();
        assert!(matches!(err, IngestError::Connectivity(_)));
        assert!(err.is_fatal());
    }
}
