//! Configuration management and validation.
//!
//! Provides the layered TOML configuration naming the results, report and
//! mapping files, the footage directories, and the validation and report
//! settings. Relative paths resolve against the directory holding the
//! configuration file, or the current directory when no file is used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::services::report_renderer::ReportOrder;
use crate::app::services::standings::PlausibilityPolicy;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_FRACTIONAL_TIME, DEFAULT_MIN_FRACTIONAL_TIME,
    DEFAULT_REPORT_LABEL, DEFAULT_VIDEO_EXTENSION,
};
use crate::{Error, Result};

/// Named file and directory locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the results file (defaults to the base directory)
    pub results_filepath: Option<PathBuf>,
    pub results_leafname: Option<String>,

    /// Directory the report is written to (defaults to the base directory)
    pub template_filepath: Option<PathBuf>,
    pub template_leafname: Option<String>,

    pub mapping_filepath: Option<PathBuf>,
    /// Mapping file name; when unset the footage phase never runs
    pub mapping_leafname: Option<String>,

    pub capture_dir: Option<PathBuf>,
    pub primary_dir: Option<PathBuf>,
}

/// Results file decoding options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResultsConfig {
    /// Fixed field delimiter; sniffed from the file when unset
    pub delimiter: Option<char>,
}

/// Fractional time bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub min_fractional_time: f64,
    pub max_fractional_time: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_fractional_time: DEFAULT_MIN_FRACTIONAL_TIME,
            max_fractional_time: DEFAULT_MAX_FRACTIONAL_TIME,
        }
    }
}

/// Report rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Text written before ` = ` on every line
    pub label: String,
    pub order: ReportOrder,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_REPORT_LABEL.to_string(),
            order: ReportOrder::default(),
        }
    }
}

/// Footage renaming options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FootageConfig {
    pub video_extension: String,
}

impl Default for FootageConfig {
    fn default() -> Self {
        Self {
            video_extension: DEFAULT_VIDEO_EXTENSION.to_string(),
        }
    }
}

/// Main configuration for a formatting run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paths: PathsConfig,
    pub results: ResultsConfig,
    pub validation: ValidationConfig,
    pub report: ReportConfig,
    pub footage: FootageConfig,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid configuration: {}", e)))
    }

    /// Load a configuration file; its directory becomes the base directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let mut config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration { message } => {
                Error::configuration(format!("{} ({})", message, path.display()))
            }
            other => other,
        })?;

        config.base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => current_dir()?,
        };

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default configuration file location in the user configuration directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from an explicit file, else the user file, else defaults
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = Self::default_config_path().filter(|path| path.is_file()) {
            return Self::load(&path);
        }

        debug!("No configuration file found, using defaults");
        Ok(Self {
            base_dir: current_dir()?,
            ..Self::default()
        })
    }

    /// Set the directory relative paths are resolved against
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Point the results file at an explicit path
    pub fn set_results_path(&mut self, path: &Path) {
        let (dir, leaf) = split_path(path);
        self.paths.results_filepath = dir;
        self.paths.results_leafname = leaf;
    }

    /// Point the report file at an explicit path
    pub fn set_template_path(&mut self, path: &Path) {
        let (dir, leaf) = split_path(path);
        self.paths.template_filepath = dir;
        self.paths.template_leafname = leaf;
    }

    /// Point the mapping file at an explicit path
    pub fn set_mapping_path(&mut self, path: &Path) {
        let (dir, leaf) = split_path(path);
        self.paths.mapping_filepath = dir;
        self.paths.mapping_leafname = leaf;
    }

    /// Full path of the results file
    pub fn results_path(&self) -> Result<PathBuf> {
        let leaf = required(&self.paths.results_leafname, "paths.results_leafname")?;
        Ok(self.resolve_file(self.paths.results_filepath.as_deref(), leaf))
    }

    /// Full path of the report file
    pub fn template_path(&self) -> Result<PathBuf> {
        let leaf = required(&self.paths.template_leafname, "paths.template_leafname")?;
        Ok(self.resolve_file(self.paths.template_filepath.as_deref(), leaf))
    }

    /// Full path of the mapping file, if one is configured
    pub fn mapping_path(&self) -> Option<PathBuf> {
        self.paths
            .mapping_leafname
            .as_deref()
            .map(|leaf| self.resolve_file(self.paths.mapping_filepath.as_deref(), leaf))
    }

    pub fn capture_dir(&self) -> Option<PathBuf> {
        self.paths.capture_dir.as_deref().map(|dir| self.base_dir.join(dir))
    }

    pub fn primary_dir(&self) -> Option<PathBuf> {
        self.paths.primary_dir.as_deref().map(|dir| self.base_dir.join(dir))
    }

    /// Plausibility policy built from the validation bounds
    pub fn policy(&self) -> Result<PlausibilityPolicy> {
        PlausibilityPolicy::new(
            self.validation.min_fractional_time,
            self.validation.max_fractional_time,
        )
    }

    /// Fixed field delimiter as a byte, if configured
    pub fn delimiter(&self) -> Result<Option<u8>> {
        match self.results.delimiter {
            None => Ok(None),
            Some(c) if c.is_ascii() && !matches!(c, '"' | '\r' | '\n') => Ok(Some(c as u8)),
            Some(c) => Err(Error::configuration(format!(
                "Unsupported results delimiter {:?}",
                c
            ))),
        }
    }

    /// Validate the configuration for a full processing run
    pub fn validate(&self) -> Result<()> {
        self.results_path()?;
        self.template_path()?;
        self.policy()?;
        self.delimiter()?;

        if self.paths.mapping_leafname.is_some() {
            required_dir(&self.paths.capture_dir, "paths.capture_dir")?;
            required_dir(&self.paths.primary_dir, "paths.primary_dir")?;
        }

        let extension = self.footage.video_extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(Error::configuration(format!(
                "Invalid video extension '{}'",
                self.footage.video_extension
            )));
        }

        Ok(())
    }

    fn resolve_file(&self, dir: Option<&Path>, leaf: &str) -> PathBuf {
        match dir {
            Some(dir) => self.base_dir.join(dir).join(leaf),
            None => self.base_dir.join(leaf),
        }
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| Error::io("Failed to determine current directory", e))
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::configuration(format!("{} must be set", name))),
    }
}

fn required_dir(value: &Option<PathBuf>, name: &str) -> Result<()> {
    match value {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(()),
        _ => Err(Error::configuration(format!(
            "{} must be set when a mapping file is configured",
            name
        ))),
    }
}

fn split_path(path: &Path) -> (Option<PathBuf>, Option<String>) {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf);
    let leaf = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    (dir, leaf)
}
