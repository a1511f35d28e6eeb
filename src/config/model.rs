//! Filter configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Presentation fields (`title`, `placeholder`, `show_filter`) are opaque
//! passthrough for whatever rendering surface the host owns.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::selection::RangeItem;
use crate::store::ReactSpec;

/// Configuration for a single multi-select range filter component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Stable identity key for store registration. Required.
    pub component_id: String,
    /// Document field the derived range query runs against. Required.
    pub data_field: String,
    /// Catalog of selectable range options, in display order.
    #[serde(default)]
    pub data: Vec<RangeItem>,
    /// Labels selected at creation time (and re-applied when this field
    /// changes), unless a controlled value has taken over.
    #[serde(default)]
    pub default_selected: Option<Vec<String>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Label shown in the host's applied-filters strip.
    #[serde(default)]
    pub filter_label: Option<String>,
    #[serde(default = "default_true")]
    pub show_filter: bool,
    /// Whether the host mirrors this filter's value into the URL.
    #[serde(default)]
    pub url_params: bool,
    /// Watch dependencies on other components, passed through to the store.
    #[serde(default)]
    pub react: Option<ReactSpec>,
}

impl FilterConfig {
    pub fn new(component_id: impl Into<String>, data_field: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            data_field: data_field.into(),
            data: Vec::new(),
            default_selected: None,
            title: None,
            placeholder: default_placeholder(),
            filter_label: None,
            show_filter: true,
            url_params: false,
            react: None,
        }
    }

    /// Fail fast on missing identity or field-name configuration.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.component_id.trim().is_empty() {
            return Err(FilterError::ConfigurationMissing("component_id"));
        }
        if self.data_field.trim().is_empty() {
            return Err(FilterError::ConfigurationMissing("data_field"));
        }
        Ok(())
    }
}

fn default_placeholder() -> String {
    "Select a value".to_string()
}
fn default_true() -> bool {
    true
}
