//! Configuration management for interface generation

mod settings;

// Re-export main types
pub use settings::{
    CONFIG_FILE_NAMES, Config, DEFAULT_ATTRIBUTE_NAME, DEFAULT_IGNORE_ATTRIBUTE_NAME,
    DocumentationMode, LoggingConfig,
};
