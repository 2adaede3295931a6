//! Viewer configuration
//!
//! Settings loaded from a YAML file (or built in code): where the backend
//! lives, how to reach each dataset, and the column inference hints.

use crate::column::{ColumnInferrer, DEFAULT_BOOLEAN_FIELDS, DEFAULT_NUMERIC_HINTS};
use crate::dataset::{DatasetKind, Endpoints, HttpDataSource};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpClientConfig};
use crate::table::PageSize;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Base URL of the REST backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; absent means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Endpoint templates per dataset
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Initial page size
    #[serde(default)]
    pub page_size: PageSize,

    /// Column inference settings
    #[serde(default)]
    pub columns: ColumnsConfig,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            headers: BTreeMap::new(),
            endpoints: Endpoints::default(),
            page_size: PageSize::default(),
            columns: ColumnsConfig::default(),
        }
    }
}

// ============================================================================
// Columns
// ============================================================================

/// Column inference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnsConfig {
    /// Field-name substrings that mark a numeric column
    #[serde(default = "default_numeric_hints")]
    pub numeric_hints: Vec<String>,

    /// Field names rendered as Yes/No
    #[serde(default = "default_boolean_fields")]
    pub boolean_fields: Vec<String>,

    /// Preferred leading columns per dataset
    #[serde(default)]
    pub defaults: HashMap<DatasetKind, Vec<String>>,
}

fn default_numeric_hints() -> Vec<String> {
    DEFAULT_NUMERIC_HINTS.clone()
}

fn default_boolean_fields() -> Vec<String> {
    let mut fields: Vec<String> = DEFAULT_BOOLEAN_FIELDS.iter().cloned().collect();
    fields.sort();
    fields
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            numeric_hints: default_numeric_hints(),
            boolean_fields: default_boolean_fields(),
            defaults: HashMap::new(),
        }
    }
}

impl ColumnsConfig {
    /// Build the inferrer these settings describe
    pub fn inferrer(&self) -> ColumnInferrer {
        ColumnInferrer::new()
            .with_numeric_hints(self.numeric_hints.iter().cloned())
            .with_boolean_fields(self.boolean_fields.iter().cloned())
    }

    /// Preferred leading columns for `kind`
    pub fn defaults_for(&self, kind: DatasetKind) -> Vec<String> {
        self.defaults.get(&kind).cloned().unwrap_or_default()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a viewer config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ViewerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    debug!(path = %path.display(), "Loaded config file");
    load_config_from_str(&content)
}

/// Load a viewer config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<ViewerConfig> {
    let config: ViewerConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

impl ViewerConfig {
    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_value("base_url", "cannot be a base URL"));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        self.endpoints.validate()
    }

    /// Request timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// HTTP client settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().base_url(self.base_url.clone());
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder.build()
    }

    /// Data source for the configured backend
    pub fn data_source(&self) -> Result<HttpDataSource> {
        let client = HttpClient::with_config(self.http_config())?;
        HttpDataSource::with_client(client, self.endpoints.clone())
    }
}
