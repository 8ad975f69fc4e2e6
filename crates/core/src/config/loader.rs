use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{types::AppConfig, ConfigError};

/// Prefix of environment variable overrides, e.g. `TAC_TIMEOUT`.
pub const ENV_PREFIX: &str = "TAC_";

const CONFIG_DIR_NAME: &str = "torrent_api_clients";
const LOCAL_CONFIG_FILE: &str = "torrent_api_clients.toml";

/// `~/.config/torrent_api_clients/config.toml`, if a home directory exists.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(CONFIG_DIR_NAME).join("config.toml"))
}

/// `torrent_api_clients.toml` in the working directory.
///
/// Absolute so that the TOML provider does not search parent directories.
pub fn local_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_default()
        .join(LOCAL_CONFIG_FILE)
}

/// Load configuration with environment variable overrides.
///
/// With an explicit `path` only that file is read and it must exist.
/// Otherwise the global file and then the local file are merged, both
/// optional. `TAC_*` variables override file values.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_layered(path, global_config_path(), local_config_path())
}

fn load_layered(
    explicit: Option<&Path>,
    global: Option<PathBuf>,
    local: PathBuf,
) -> Result<AppConfig, ConfigError> {
    let mut figment = Figment::new();

    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            debug!(path = %path.display(), "Reading config file");
            figment = figment.merge(Toml::file(path));
        }
        None => {
            if let Some(global) = global {
                debug!(path = %global.display(), "Reading global config file if present");
                figment = figment.merge(Toml::file(global));
            }
            debug!(path = %local.display(), "Reading local config file if present");
            figment = figment.merge(Toml::file(local));
        }
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.output_dir = expand_home(&config.output_dir);
    Ok(config)
}

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.output_dir = expand_home(&config.output_dir);
    Ok(config)
}

/// Replace a leading `~` with the home directory.
fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
