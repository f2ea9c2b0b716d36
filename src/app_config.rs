use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::PageError;
use crate::renderer::{BannerSelector, PageRenderer, TemplateEscaping, BANNER_INDEX_PLACEHOLDER};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Root directory that receives one folder per generated page
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name written inside each page folder
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Banner image selection
    #[serde(default)]
    pub banner: BannerSelector,

    /// How page name and headers are substituted into the template
    #[serde(default)]
    pub template_escaping: TemplateEscaping,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_dir() -> String {
    "generated_pages".to_string()
}

fn default_output_file_name() -> String {
    "page.tsx".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration, writing the defaults first when the file is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), PageError> {
        if self.output_dir.trim().is_empty() {
            return Err(PageError::InvalidConfig("output_dir must not be empty".to_string()));
        }

        if self.output_file_name.trim().is_empty()
            || self.output_file_name.contains(['/', '\\'])
        {
            return Err(PageError::InvalidConfig(format!(
                "output_file_name must be a plain file name, got '{}'",
                self.output_file_name
            )));
        }

        if self.banner.min_index > self.banner.max_index {
            return Err(PageError::InvalidConfig(format!(
                "banner.min_index ({}) is greater than banner.max_index ({})",
                self.banner.min_index, self.banner.max_index
            )));
        }

        if !self.banner.path_pattern.contains(BANNER_INDEX_PLACEHOLDER) {
            return Err(PageError::InvalidConfig(format!(
                "banner.path_pattern must contain {}",
                BANNER_INDEX_PLACEHOLDER
            )));
        }

        Ok(())
    }

    /// Build the renderer described by this configuration
    pub fn renderer(&self) -> PageRenderer {
        PageRenderer::new(self.banner.clone(), self.template_escaping)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            output_file_name: default_output_file_name(),
            banner: BannerSelector::default(),
            template_escaping: TemplateEscaping::default(),
            log_level: LogLevel::default(),
        }
    }
}
