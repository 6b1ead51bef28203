//! Config resolution: explicit path → `CDT_CONFIG` → XDG config dir → defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fdr_policy::{ConfigError, ConfigFile};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "CDT_CONFIG";

/// Where a resolved config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Xdg(PathBuf),
    Defaults,
}

/// A loaded config plus its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: ConfigFile,
    pub source: ConfigSource,
}

/// Resolve the active configuration.
///
/// A file that is named explicitly or through the environment must load
/// cleanly; the XDG file is only consulted if it exists.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let xdg_path = dirs::config_dir().map(|dir| dir.join("cdt").join("config.json"));
    resolve_from(explicit, env_path, xdg_path)
}

fn resolve_from(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    xdg_path: Option<PathBuf>,
) -> Result<ResolvedConfig, ConfigError> {
    let (path, source) = if let Some(path) = explicit {
        (path.to_path_buf(), ConfigSource::Explicit(path.to_path_buf()))
    } else if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        (path.clone(), ConfigSource::Env(path))
    } else if let Some(path) = xdg_path.filter(|p| p.is_file()) {
        (path.clone(), ConfigSource::Xdg(path))
    } else {
        debug!("no config file found, using defaults");
        return Ok(ResolvedConfig {
            config: ConfigFile::default(),
            source: ConfigSource::Defaults,
        });
    };

    debug!(path = %path.display(), source = ?source, "loading config");
    let config = ConfigFile::load_from_file(&path)?;
    Ok(ResolvedConfig { config, source })
}
