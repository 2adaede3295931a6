//! Dataset kinds and endpoint templates

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Placeholder substituted with the dataset identifier in endpoint templates
pub const IDENTIFIER_PLACEHOLDER: &str = "{identifier}";

/// Which tournament dataset to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Per-negotiation details, served under a `details` key
    #[default]
    Details,
    /// Every score record, served under a `scores` key
    AllScores,
}

impl DatasetKind {
    /// Type tag used in file names and config keys
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Details => "details",
            DatasetKind::AllScores => "all_scores",
        }
    }

    /// Key of the row array in the response body
    pub fn response_key(self) -> &'static str {
        match self {
            DatasetKind::Details => "details",
            DatasetKind::AllScores => "scores",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "details" => Ok(DatasetKind::Details),
            "all_scores" => Ok(DatasetKind::AllScores),
            other => Err(Error::UnknownDataset {
                name: other.to_string(),
            }),
        }
    }
}

/// Endpoint path templates, one per dataset kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Path for [`DatasetKind::Details`]
    #[serde(default = "default_details_endpoint")]
    pub details: String,
    /// Path for [`DatasetKind::AllScores`]
    #[serde(default = "default_scores_endpoint")]
    pub all_scores: String,
}

fn default_details_endpoint() -> String {
    "api/tournaments/{identifier}/details".to_string()
}

fn default_scores_endpoint() -> String {
    "api/tournaments/{identifier}/scores".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            details: default_details_endpoint(),
            all_scores: default_scores_endpoint(),
        }
    }
}

impl Endpoints {
    /// Template for `kind`
    pub fn template(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Details => &self.details,
            DatasetKind::AllScores => &self.all_scores,
        }
    }

    /// Resolve the URL for `identifier` against `base_url`.
    ///
    /// The identifier is percent-encoded as a single path segment.
    pub fn resolve(&self, base_url: &str, identifier: &str, kind: DatasetKind) -> Result<Url> {
        let mut url = Url::parse(base_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::invalid_value("base_url", "cannot be a base URL"))?;
            segments.pop_if_empty();
            for segment in self.template(kind).split('/').filter(|s| !s.is_empty()) {
                if segment == IDENTIFIER_PLACEHOLDER {
                    segments.push(identifier);
                } else {
                    segments.push(segment);
                }
            }
        }
        Ok(url)
    }

    /// Check every template carries the identifier placeholder as a segment
    pub fn validate(&self) -> Result<()> {
        for kind in [DatasetKind::Details, DatasetKind::AllScores] {
            let template = self.template(kind);
            if !template.split('/').any(|s| s == IDENTIFIER_PLACEHOLDER) {
                return Err(Error::invalid_value(
                    format!("endpoints.{kind}"),
                    format!("'{template}' must contain a {IDENTIFIER_PLACEHOLDER} segment"),
                ));
            }
        }
        Ok(())
    }
}
