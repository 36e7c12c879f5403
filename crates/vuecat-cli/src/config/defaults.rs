/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vuecat.config.json";

/// Prefix of environment variables merged over the config file.
pub const ENV_PREFIX: &str = "VUECAT_";

/// Separator of nested keys in environment variable names.
pub const ENV_SPLIT: &str = "__";

/// Target built from `--src`/`--dest` when there is no config file.
pub const IMPLICIT_TARGET: &str = "default";
