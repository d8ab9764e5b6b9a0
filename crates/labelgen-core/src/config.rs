use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// File tracked when nothing else is configured.
pub const DEFAULT_TRACKED_PATH: &str = "index.html";

/// Report written when nothing else is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "generated_commit_labels.txt";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".labelgen.toml";

/// Top-level configuration loaded from `.labelgen.toml`.
///
/// Resolution order: CLI flags > local config > defaults. The keyword table
/// is compiled in and cannot be changed here.
///
/// # Examples
///
/// ```
/// use labelgen_core::LabelgenConfig;
///
/// let config = LabelgenConfig::default();
/// assert_eq!(config.report.path, "index.html");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelgenConfig {
    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl LabelgenConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Io`] if the file cannot be read, or
    /// [`LabelError::Toml`] if the content is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, LabelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Toml`] if parsing fails, or
    /// [`LabelError::Config`] if the tracked path is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use labelgen_core::LabelgenConfig;
    ///
    /// let toml = r#"
    /// [report]
    /// path = "docs/index.html"
    /// "#;
    /// let config = LabelgenConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.report.path, "docs/index.html");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, LabelError> {
        let config: Self = toml::from_str(content)?;
        if config.report.path.trim().is_empty() {
            return Err(LabelError::Config("report.path must not be empty".into()));
        }
        Ok(config)
    }
}

/// Which file to label and where the report goes.
///
/// # Examples
///
/// ```
/// use labelgen_core::ReportConfig;
/// use std::path::PathBuf;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.output, PathBuf::from("generated_commit_labels.txt"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Repository-relative path whose history is labelled (default: `index.html`).
    #[serde(default = "default_path")]
    pub path: String,
    /// Report file, overwritten on every run (default: `generated_commit_labels.txt`).
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_path() -> String {
    DEFAULT_TRACKED_PATH.into()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            output: default_output(),
        }
    }
}
