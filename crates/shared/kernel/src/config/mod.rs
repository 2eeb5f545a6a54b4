use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "zoo";

/// Prefix for environment overrides (`ZOO__ADMISSION__MODE=approve`).
pub const ENV_PREFIX: &str = "ZOO";

#[zoo_derive::zoo_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **File**: `path` if given (must exist), otherwise `zoo.{toml,json,yaml,..}`
///    in the working directory when present.
/// 2. **Environment**: variables prefixed with `ZOO__`; nested keys use double
///    underscores (`ZOO__LOGGING__LEVEL` maps to `logging.level`).
///
/// Fields absent from every layer take the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or malformed,
/// or if the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use zoo_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake));

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
