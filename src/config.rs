//! Rendering configuration: class-name prefix and theme.

use std::path::Path;

use serde::Deserialize;

use crate::theme::{Theme, ThemeError};

/// Error returned when a config file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format `{0}`; expected .yaml, .yml or .json")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Configuration for rendering styled elements.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Prefix of generated class names (`<prefix>-<hash>`).
    pub class_prefix: String,
    pub theme: Theme,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            class_prefix: "sk".to_string(),
            theme: Theme::base(),
        }
    }
}

/// On-disk shape. `theme` overlays the base theme unless `extend_base_theme`
/// is false, in which case it replaces it.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct ConfigFile {
    class_prefix: Option<String>,
    theme: Option<Theme>,
    theme_file: Option<String>,
    extend_base_theme: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            class_prefix: None,
            theme: None,
            theme_file: None,
            extend_base_theme: true,
        }
    }
}

impl StyleConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class prefix (builder).
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Parse a config from YAML.
    ///
    /// ```yaml
    /// class_prefix: app
    /// extend_base_theme: true
    /// theme:
    ///   colors:
    ///     brand: "#ff0066"
    /// ```
    ///
    /// A relative `theme_file` is resolved against the current directory.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_yaml::from_str(input)?;
        Self::from_file(file, None)
    }

    /// Parse a config from JSON.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(input)?;
        Self::from_file(file, None)
    }

    /// Load a config file; the format follows the extension. A relative
    /// `theme_file` is resolved against the config file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !matches!(ext.as_str(), "yaml" | "yml" | "json") {
            return Err(ConfigError::UnsupportedFormat(ext));
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = if ext == "json" {
            serde_json::from_str(&text)?
        } else {
            serde_yaml::from_str(&text)?
        };
        Self::from_file(file, path.parent())
    }

    fn from_file(file: ConfigFile, base_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut theme = if file.extend_base_theme {
            Theme::base()
        } else {
            Theme::empty()
        };
        if let Some(theme_file) = &file.theme_file {
            let theme_path = match base_dir {
                Some(dir) => dir.join(theme_file),
                None => Path::new(theme_file).to_path_buf(),
            };
            theme = theme.extend(&Theme::load(theme_path)?);
        }
        if let Some(inline) = &file.theme {
            theme = theme.extend(inline);
        }
        let defaults = Self::default();
        Ok(Self {
            class_prefix: file.class_prefix.unwrap_or(defaults.class_prefix),
            theme,
        })
    }
}
