//! Configuration module for the sayc CLI.
//!
//! Settings come from `sayc.toml`; command-line flags override them.

use dirs::{config_dir, home_dir};
use sayc_lex::{LexerConfig, LineCounting};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{DrvError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "sayc.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Log filter used when neither `--verbose` nor `RUST_LOG` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Lexer options.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Source file options.
    #[serde(default)]
    pub source: SourceSection,

    /// Output options.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Line numbering mode.
    #[serde(default)]
    pub line_counting: LineCounting,

    /// Collect every error instead of stopping at the first.
    #[serde(default)]
    pub recover: bool,
}

/// `[source]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSection {
    /// Required source file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Token dump format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_extension() -> String {
    "say".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            log_level: default_log_level(),
            lexer: LexerSection::default(),
            source: SourceSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/sayc/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DrvError::Config(format!("Failed to parse configuration: {}", e)))?;

        if config.source.extension.is_empty() || config.source.extension.contains('.') {
            return Err(DrvError::Config(format!(
                "source extension must be a bare extension like \"say\", got {:?}",
                config.source.extension
            )));
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Lexer settings derived from the `[lexer]` table.
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig {
            line_counting: self.lexer.line_counting,
        }
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("sayc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("sayc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
