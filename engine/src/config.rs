use std::path::PathBuf;

use serde::Deserialize;

use operative_types::UiOptions;

/// User configuration, read from `~/.operative/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct OperativeConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config at {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config at {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs and canvas markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable decorative motion (globe rotation, cursor pulse).
    #[serde(default)]
    pub reduced_motion: bool,
}

impl OperativeConfig {
    /// Load the config file, if one exists.
    ///
    /// A missing file is `Ok(None)`; an unreadable or malformed file is an
    /// error the caller may ignore (the shell runs fine on defaults).
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match Self::from_toml(&content, path) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("{err}");
                Err(err)
            }
        }
    }

    fn from_toml(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path, source })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve the UI option switches from the `[app]` section.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".operative").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_default_options() {
        let config: OperativeConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui_options(), UiOptions::default());
    }

    #[test]
    fn app_section_flags_parse() {
        let config: OperativeConfig = toml::from_str(
            r#"
            [app]
            ascii_only = true
            reduced_motion = true
            "#,
        )
        .unwrap();
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(options.reduced_motion);
        assert!(!options.high_contrast);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: OperativeConfig = toml::from_str(
            r#"
            [app]
            high_contrast = true
            future_flag = "whatever"
            "#,
        )
        .unwrap();
        assert!(config.ui_options().high_contrast);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let path = PathBuf::from("/home/ghost/.operative/config.toml");
        let err = OperativeConfig::from_toml("[app\nascii_only =", path.clone()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &path);
        let message = err.to_string();
        assert!(message.contains("failed to parse config"), "{message}");
        assert!(message.contains(".operative/config.toml"), "{message}");
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        let err = OperativeConfig::from_toml(
            "[app]\nascii_only = \"yes\"\n",
            PathBuf::from("config.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
