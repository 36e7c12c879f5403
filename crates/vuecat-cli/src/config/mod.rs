//! Configuration system with multi-source loading.
//!
//! Merges `vuecat.config.json`, `VUECAT_` environment variables and CLI
//! flags, then turns each selected target into an immutable
//! [`vuecat_core::BuildOptions`].
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod types;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub use defaults::*;
pub use loading::LoadedConfig;
pub use types::*;

/// vuecat configuration - loaded from vuecat.config.json, the environment
/// and CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VuecatConfig {
    /// Options shared by every target
    #[serde(default, skip_serializing_if = "TargetOptions::is_unset")]
    pub options: TargetOptions,

    /// Named build targets
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

impl VuecatConfig {
    /// Generate JSON Schema for vuecat.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(VuecatConfig);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Generate example vuecat.config.json content.
    pub fn example_config() -> String {
        let mut targets = BTreeMap::new();
        targets.insert(
            "app".to_string(),
            TargetConfig {
                src: Some(PathBuf::from("src/vue")),
                dest: Some(PathBuf::from("dist/app.js")),
                options: TargetOptions {
                    exclude: Some(
                        vuecat_core::CategoryFilter::new()
                            .with("transitions", vuecat_core::Selection::All),
                    ),
                    ..TargetOptions::default()
                },
            },
        );

        let config = Self {
            options: TargetOptions {
                quote_char: Some('"'),
                ..TargetOptions::default()
            },
            targets,
        };
        serde_json::to_string_pretty(&config).unwrap_or_default()
    }

    /// Names of the targets to run: all of them when `requested` is empty,
    /// otherwise `requested` in the given order.
    pub fn select_targets(&self, requested: &[String]) -> Result<Vec<String>, crate::ConfigError> {
        if requested.is_empty() {
            return Ok(self.targets.keys().cloned().collect());
        }

        requested
            .iter()
            .map(|name| {
                if self.targets.contains_key(name) {
                    Ok(name.clone())
                } else {
                    Err(crate::ConfigError::TargetNotFound {
                        name: name.clone(),
                        available: self.target_list(),
                    })
                }
            })
            .collect()
    }

    fn target_list(&self) -> String {
        if self.targets.is_empty() {
            return "(none)".to_string();
        }
        self.targets.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
