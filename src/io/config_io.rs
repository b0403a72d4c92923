use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::track_io::CONDUCTOR_DIR;
use crate::model::config::TuiConfig;

pub const CONFIG_FILE: &str = "tui.toml";

/// Error type for reading the UI config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse tui.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub fn config_path(base: &Path) -> PathBuf {
    base.join(CONDUCTOR_DIR).join(CONFIG_FILE)
}

/// Read `conductor/tui.toml`. A missing file is the default config.
pub fn read_config(base: &Path) -> Result<TuiConfig, ConfigError> {
    let path = config_path(base);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(TuiConfig::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(CONDUCTOR_DIR)).unwrap();
        fs::write(
            config_path(tmp.path()),
            "[ui.colors]\nhighlight = \"#112233\"\n",
        )
        .unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.ui.colors["highlight"], "#112233");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(CONDUCTOR_DIR)).unwrap();
        fs::write(config_path(tmp.path()), "[ui.colors\nbroken").unwrap();
        assert!(matches!(
            read_config(tmp.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
