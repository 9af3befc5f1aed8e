use crate::{
    error::{Error, Result},
    impl_case_insensitive_deserialize,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ATTRIBUTE_NAME: &str = "GenerateAutomaticInterface";
pub const DEFAULT_IGNORE_ATTRIBUTE_NAME: &str = "IgnoreAutomaticInterface";

/// File names searched for, in order, in every directory up from the input
pub const CONFIG_FILE_NAMES: [&str; 2] = [".autointerface.json", "autointerface.json"];

/// How generated members are documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationMode {
    /// `<inheritdoc cref="..."/>` pointing at the class member
    #[default]
    Inherit,
    /// The member's own doc comment, falling back to `Inherit`
    Copy,
}

impl_case_insensitive_deserialize!(
    DocumentationMode,
    Inherit => "inherit",
    Copy => "copy",
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Name of the generation marker, with or without the `Attribute` suffix
    pub attribute_name: String,
    pub ignore_attribute_name: String,
    pub documentation: DocumentationMode,
    /// Project candidates on the rayon pool
    pub parallel: bool,
    /// Emit the source of both marker attributes alongside the interfaces
    pub emit_marker_attributes: bool,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attribute_name: DEFAULT_ATTRIBUTE_NAME.to_string(),
            ignore_attribute_name: DEFAULT_IGNORE_ATTRIBUTE_NAME.to_string(),
            documentation: DocumentationMode::default(),
            parallel: false,
            emit_marker_attributes: true,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
    /// Log file; stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            path: None,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("attribute_name", &self.attribute_name),
            ("ignore_attribute_name", &self.ignore_attribute_name),
        ] {
            if !is_identifier(value) {
                return Err(Error::ConfigError(format!(
                    "{field} must be a non-empty identifier, got '{value}'"
                )));
            }
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::ConfigError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        Ok(())
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
