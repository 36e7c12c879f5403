use crate::cli::TargetArgs;
use crate::config::{
    TargetConfig, VuecatConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX, ENV_SPLIT, IMPLICIT_TARGET,
};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A merged configuration and the targets selected for this run.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Fully merged configuration
    pub config: VuecatConfig,
    /// Selected target names, in run order
    pub targets: Vec<String>,
    /// Config file that was read, if any
    pub path: Option<PathBuf>,
}

impl VuecatConfig {
    /// Load configuration from multiple sources and select targets.
    ///
    /// Priority: CLI args > environment variables > config file > defaults.
    /// CLI overrides are applied to every selected target. Without a config
    /// file, `--src`/`--dest` define the implicit `default` target.
    pub fn load(args: &TargetArgs, requested: &[String], cwd: &Path) -> Result<LoadedConfig> {
        let config_file = locate_config(args.config.as_deref(), cwd)?;
        let overrides = TargetConfig::from(args);

        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = &config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }
        // VUECAT_OPTIONS__SEPARATOR, VUECAT_TARGETS__APP__DEST, ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split(ENV_SPLIT));

        let base: Self = extract(&figment)?;
        let targets = if !base.targets.is_empty() {
            base.select_targets(requested)?
        } else if let Some(path) = &config_file {
            return Err(ConfigError::NoTargets(path.clone()).into());
        } else if overrides.src.is_none() && overrides.dest.is_none() {
            let expected = args
                .config
                .as_deref()
                .map(|p| cwd.join(p))
                .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_FILE));
            return Err(ConfigError::NotFound(expected).into());
        } else {
            tracing::debug!("no config file, building implicit target");
            Self::single(IMPLICIT_TARGET, TargetConfig::default()).select_targets(requested)?
        };

        let cli_layer = Self {
            targets: targets
                .iter()
                .map(|name| (name.clone(), overrides.clone()))
                .collect(),
            ..Self::default()
        };
        let config = extract(&figment.merge(Serialized::defaults(cli_layer)))?;

        Ok(LoadedConfig {
            config,
            targets,
            path: config_file,
        })
    }

    /// A configuration with one target.
    pub fn single(name: &str, target: TargetConfig) -> Self {
        let mut targets = BTreeMap::new();
        targets.insert(name.to_string(), target);
        Self {
            targets,
            ..Self::default()
        }
    }
}

/// The explicit `--config` path (which must exist) or the default file if
/// present.
fn locate_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>, ConfigError> {
    match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(ConfigError::NotFound(path))
            }
        }
        None => {
            let path = cwd.join(DEFAULT_CONFIG_FILE);
            Ok(path.is_file().then_some(path))
        }
    }
}

fn extract(figment: &Figment) -> Result<VuecatConfig> {
    figment.extract().map_err(|e| {
        ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!(
                "Check {} syntax and field types, and any {}* environment variables",
                DEFAULT_CONFIG_FILE, ENV_PREFIX
            ),
        }
        .into()
    })
}
