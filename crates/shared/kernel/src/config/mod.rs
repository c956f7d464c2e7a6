use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `GAMMA__GRAPHQL__ENDPOINT`.
pub const ENV_PREFIX: &str = "GAMMA";
/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

#[gamma_derive::gamma_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with `GAMMA__`-prefixed environment variables.
///
/// 1. **File**: `path` with any extension the `config` crate understands (`server.toml`,
///    `server.json`, ...). An explicit path must exist. Without one, `server.*` in the
///    working directory is used when present and skipped otherwise, so a bare
///    environment is enough to run.
/// 2. **Environment**: `GAMMA__SECTION__KEY` overrides `section.key`
///    (`GAMMA__GRAPHQL__BROWSER_ENDPOINT` maps to `graphql.browser_endpoint`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or the merged values
/// do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use gamma_domain::config::AppConfig;
/// use gamma_kernel::config::load_config;
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.server.port, 3080);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = match path {
        Some(p) => (p.as_ref().to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    info!(file = %file.display(), required, "Loading configuration");

    load(&file, required, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

fn load<T>(file: &Path, required: bool, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Config::builder()
        .add_source(File::from(file).required(required))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
