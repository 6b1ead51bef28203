//! FDR policy configuration.
//!
//! The config file is JSON:
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "fdr": { "enabled": true, "alpha": 0.05, "correlation": "negative" }
//! }
//! ```
//!
//! On any load error, [`ConfigFile::load_or_default`] falls back to the
//! embedded defaults.

use std::path::Path;

use cdt_math::CorrelationMode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::CONFIG_SCHEMA_VERSION;

/// How independence-test p-values are corrected for multiple testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdrPolicy {
    /// When false, each test is judged against `alpha` alone.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Target false discovery rate, in (0, 1).
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Dependence assumption among test statistics.
    #[serde(default)]
    pub correlation: CorrelationMode,
}

fn default_enabled() -> bool {
    true
}

fn default_alpha() -> f64 {
    0.05
}

impl Default for FdrPolicy {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            alpha: default_alpha(),
            correlation: CorrelationMode::default(),
        }
    }
}

impl FdrPolicy {
    pub fn new(alpha: f64, correlation: CorrelationMode) -> Self {
        Self {
            enabled: true,
            alpha,
            correlation,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

/// Top-level config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub schema_version: String,

    #[serde(default)]
    pub fdr: FdrPolicy,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION.to_string(),
            fdr: FdrPolicy::default(),
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported config schema version: {0}")]
    UnsupportedVersion(String),

    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),
}

impl From<ConfigError> for cdt_common::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => cdt_common::Error::Io(e),
            ConfigError::Parse(e) => cdt_common::Error::Json(e),
            ConfigError::InvalidAlpha(alpha) => cdt_common::Error::InvalidPolicy(format!(
                "alpha must be in (0, 1), got {alpha}"
            )),
            ConfigError::UnsupportedVersion(version) => cdt_common::Error::Config(format!(
                "unsupported config schema version: {version}"
            )),
        }
    }
}

impl ConfigFile {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ConfigFile = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file with full error reporting.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from file, falling back to the embedded defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let major = |v: &str| v.split('.').next().and_then(|s| s.parse::<u32>().ok());
        if major(&self.schema_version).is_none()
            || major(&self.schema_version) != major(CONFIG_SCHEMA_VERSION)
        {
            return Err(ConfigError::UnsupportedVersion(self.schema_version.clone()));
        }
        self.fdr.validate()
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_valid() {
        let config = ConfigFile::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fdr.alpha, 0.05);
        assert_eq!(config.fdr.correlation, CorrelationMode::Independent);
        assert!(config.fdr.enabled);
    }

    #[test]
    fn roundtrip_json() {
        let config = ConfigFile {
            fdr: FdrPolicy::new(0.01, CorrelationMode::Negative),
            ..ConfigFile::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(ConfigFile::from_json(&json).unwrap(), config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = ConfigFile::from_json(r#"{"schema_version": "1.2.0", "fdr": {}}"#).unwrap();
        assert_eq!(config.fdr, FdrPolicy::default());
        let config = ConfigFile::from_json(r#"{"schema_version": "1.0.0"}"#).unwrap();
        assert_eq!(config.fdr, FdrPolicy::default());
    }

    #[test]
    fn alpha_out_of_range_rejected() {
        for alpha in ["0.0", "1.0", "-0.5", "3"] {
            let json = format!(r#"{{"schema_version": "1.0.0", "fdr": {{"alpha": {alpha}}}}}"#);
            assert!(matches!(
                ConfigFile::from_json(&json),
                Err(ConfigError::InvalidAlpha(_))
            ));
        }
    }

    #[test]
    fn unsupported_version_rejected() {
        let err = ConfigFile::from_json(r#"{"schema_version": "2.0.0"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(_)));
        let err = ConfigFile::from_json(r#"{"schema_version": "abc"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(_)));
    }

    #[test]
    fn unknown_correlation_mode_is_parse_error() {
        let err = ConfigFile::from_json(
            r#"{"schema_version": "1.0.0", "fdr": {"correlation": "sideways"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file_and_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"schema_version": "1.0.0", "fdr": {{"alpha": 0.1, "correlation": "negative"}}}}"#
        )
        .unwrap();
        let config = ConfigFile::load_from_file(file.path()).unwrap();
        assert_eq!(config.fdr.alpha, 0.1);
        assert!(config.fdr.correlation.is_negative());

        let missing = file.path().with_extension("missing");
        assert_eq!(ConfigFile::load_or_default(&missing), ConfigFile::default());
    }

    #[test]
    fn converts_into_common_error() {
        let err: cdt_common::Error = ConfigError::InvalidAlpha(2.0).into();
        assert_eq!(err.code(), 11);
        let err: cdt_common::Error = ConfigError::UnsupportedVersion("9".into()).into();
        assert_eq!(err.code(), 10);
    }
}
