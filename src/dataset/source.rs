//! Data sources that serve tournament datasets

use super::types::{DatasetKind, Endpoints};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::JsonValue;
use async_trait::async_trait;
use tracing::debug;

/// Something that can fetch the raw JSON body of a dataset
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the response body for `identifier`
    async fn fetch(&self, identifier: &str, kind: DatasetKind) -> Result<JsonValue>;
}

/// Data source backed by the REST backend
#[derive(Debug)]
pub struct HttpDataSource {
    client: HttpClient,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpDataSource {
    /// Create a source for `base_url` using the default endpoints
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = HttpClient::with_config(
            HttpClientConfig::builder().base_url(base_url.clone()).build(),
        )?;
        Ok(Self {
            client,
            base_url,
            endpoints: Endpoints::default(),
        })
    }

    /// Create a source from a prepared client. The client's base URL is
    /// used to resolve endpoints.
    pub fn with_client(client: HttpClient, endpoints: Endpoints) -> Result<Self> {
        let base_url = client
            .config()
            .base_url
            .clone()
            .ok_or_else(|| crate::error::Error::config("HTTP client has no base URL"))?;
        Ok(Self {
            client,
            base_url,
            endpoints,
        })
    }

    /// Replace the endpoint templates
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Endpoint templates in use
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, identifier: &str, kind: DatasetKind) -> Result<JsonValue> {
        let url = self.endpoints.resolve(&self.base_url, identifier, kind)?;
        debug!(%url, %kind, "Fetching dataset");
        self.client.get_json(url.as_str()).await
    }
}
