//! Loading and saving component parameters as TOML.
//!
//! Parameter files are partial by design: any key left out takes the
//! component's documented default, so a file setting only
//! `prediction_type` and `target_column` is valid.
//!
//! Writes are atomic (write to temp file, then rename) so a crashed save
//! never leaves a half-written parameter file behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::components::ConfiguratorParams;

/// Errors that can occur during parameter file operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parameter file I/O failed: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse parameters: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize parameters: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Parameter file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for parameter file operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load configurator parameters from a TOML file.
///
/// Missing keys take their defaults.
pub fn load_params(path: impl AsRef<Path>) -> ConfigResult<ConfiguratorParams> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let params = toml::from_str(&content)?;
    tracing::debug!("loaded configurator parameters from {}", path.display());
    Ok(params)
}

/// Load parameters from a TOML file, falling back to defaults if the
/// file does not exist.
pub fn load_params_or_default(path: impl AsRef<Path>) -> ConfigResult<ConfiguratorParams> {
    match load_params(path) {
        Ok(params) => Ok(params),
        Err(ConfigError::NotFound(_)) => Ok(ConfiguratorParams::default()),
        Err(err) => Err(err),
    }
}

/// Save configurator parameters to a TOML file atomically.
pub fn save_params(path: impl AsRef<Path>, params: &ConfiguratorParams) -> ConfigResult<()> {
    let path = path.as_ref();
    let content = toml::to_string_pretty(params)?;

    // Write to a sibling temp file first, then rename over the target.
    let temp_path = path.with_extension("toml.tmp");
    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)?;
    tracing::debug!("saved configurator parameters to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");

        let mut params = ConfiguratorParams::default();
        params.prediction_type = "classification".to_string();
        params.target_column = "label".to_string();
        params.run_evaluation = true;

        save_params(&path, &params).unwrap();
        let loaded = load_params(&path).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn partial_file_takes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        fs::write(&path, "target_column = \"y\"\n").unwrap();

        let params = load_params(&path).unwrap();
        assert_eq!(params.target_column, "y");
        assert_eq!(params.forecast_horizon, -1);
        assert!(!params.run_distill);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_params(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let params = load_params_or_default(&path).unwrap();
        assert_eq!(params, ConfiguratorParams::default());
    }

    #[test]
    fn atomic_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        save_params(&path, &ConfiguratorParams::default()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
