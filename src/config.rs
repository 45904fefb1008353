//! Configuration file loading
//!
//! An `errorprone.toml` file is the on-disk form of one options model.
//! Keys mirror the model's fields one-to-one; `checks` and
//! `check_options` tables keep their document order when loaded.
//!
//! ```toml
//! disable_warnings_in_generated_code = true
//! excluded_paths = ".*/build/generated/.*"
//!
//! extra_args = ["-XepPatchLocation:IN_PLACE"]
//!
//! [checks]
//! NullAway = "error"
//! BetaApi = "off"
//!
//! [check_options]
//! "NullAway:AnnotatedPackages" = "com.example"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::{CheckSeverity, ErrorProneOptions};

/// Default configuration filename, resolved in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "errorprone.toml";

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// IO error while reading the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid TOML or uses unknown severities
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk representation of an options model
///
/// Every field is optional in the file; an empty file is a valid, empty
/// configuration. Severities are written as lowercase strings
/// (`default`, `off`, `warn`, `error`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Disable all checks globally
    #[serde(default)]
    pub disable_all_checks: bool,

    /// Demote all ERROR findings to warnings
    #[serde(default)]
    pub all_errors_as_warnings: bool,

    /// Re-enable all disabled checks as warnings
    #[serde(default)]
    pub all_disabled_checks_as_warnings: bool,

    /// Suppress warnings in generated code
    #[serde(default)]
    pub disable_warnings_in_generated_code: bool,

    /// Do not fail on unrecognized check names
    #[serde(default)]
    pub ignore_unknown_check_names: bool,

    /// Relax checks that only make sense outside test code
    #[serde(default)]
    pub compiling_test_only_code: bool,

    /// Path-matching regex excluded from analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_paths: Option<String>,

    /// Per-check severity overrides, in document order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub checks: IndexMap<String, CheckSeverity>,

    /// Per-check string options, in document order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub check_options: IndexMap<String, String>,

    /// Free-form flags appended verbatim after the structured ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

impl ConfigFile {
    /// Load a configuration file from disk
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] when the path does not exist,
    /// [`ConfigError::Io`] when it cannot be read, and
    /// [`ConfigError::Parse`] when it is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        log::debug!(
            "loaded {} check(s) and {} option(s) from {}",
            config.checks.len(),
            config.check_options.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a configuration from a TOML string
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the string is not a valid configuration.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Convert the file into an options model ready to render
    ///
    /// Argument providers have no file representation; callers needing
    /// deferred arguments register them on the returned model.
    #[must_use]
    pub fn into_options(self) -> ErrorProneOptions {
        ErrorProneOptions {
            disable_all_checks: self.disable_all_checks,
            all_errors_as_warnings: self.all_errors_as_warnings,
            all_disabled_checks_as_warnings: self.all_disabled_checks_as_warnings,
            disable_warnings_in_generated_code: self.disable_warnings_in_generated_code,
            ignore_unknown_check_names: self.ignore_unknown_check_names,
            compiling_test_only_code: self.compiling_test_only_code,
            excluded_paths: self.excluded_paths,
            checks: self.checks,
            check_options: self.check_options,
            extra_args: self.extra_args,
            argument_providers: Vec::new(),
        }
    }
}
