//! Filter configuration: data model plus TOML loading for hosts that wire
//! their filter tree declaratively.

pub mod model;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use model::FilterConfig;

/// Top-level shape of a declarative filters file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiltersFile {
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

/// Load and validate a set of filter configs from a TOML file.
pub fn load_filters(path: &Path) -> Result<Vec<FilterConfig>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read filters from {}", path.display()))?;
    let file: FiltersFile =
        toml::from_str(&contents).with_context(|| "Failed to parse filters file")?;
    for config in &file.filters {
        config
            .validate()
            .with_context(|| format!("Invalid filter config `{}`", config.component_id))?;
    }
    Ok(file.filters)
}
