//! Flow configuration.

use serde::{Deserialize, Serialize};

use numberflow_format::FormatOptions;

use crate::error::FlowError;
use crate::json::normalize_config_json;
use crate::overrides::Overrides;

/// Everything needed to turn values into keyed data. An empty locale list
/// selects the default locale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowConfig {
    pub locales: Vec<String>,
    pub format: FormatOptions,
    #[serde(skip_serializing_if = "Overrides::is_empty")]
    pub overrides: Overrides,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FlowConfig {
    pub fn new<S: Into<String>>(locales: impl IntoIterator<Item = S>, format: FormatOptions) -> Self {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
            format,
            ..Self::default()
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Parse a config from JSON, accepting the shorthand forms handled by
    /// [`normalize_config_json`].
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| FlowError::ConfigJson(e.to_string()))?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, FlowError> {
        serde_json::from_value(normalize_config_json(value))
            .map_err(|e| FlowError::ConfigJson(e.to_string()))
    }
}
