//! Error Prone options model
//!
//! An `ErrorProneOptions` instance describes one analysis configuration:
//! global toggles, per-check severity overrides, per-check string options,
//! and two free-form channels for flags that are already in final syntax.
//! Rendering turns the model into the ordered `-Xep*` argument list the
//! Error Prone javac plugin expects.
//!
//! # Examples
//!
//! ```
//! use epflags::options::{CheckSeverity, ErrorProneOptions};
//!
//! let mut opts = ErrorProneOptions::new();
//! opts.disable_warnings_in_generated_code = true;
//! opts.check_severity("NullAway", CheckSeverity::Error);
//! opts.option_value("NullAway:AnnotatedPackages", "com.example");
//!
//! let args = opts.render().unwrap();
//! assert_eq!(
//!     args,
//!     vec![
//!         "-XepDisableWarningsInGeneratedCode",
//!         "-Xep:NullAway:ERROR",
//!         "-XepOpt:NullAway:AnnotatedPackages=com.example",
//!     ]
//! );
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity override for a single check
///
/// `Default` is not the same as leaving a check out of the model entirely:
/// an absent check emits no flag at all, while a check present with
/// `Default` is emitted bare (`-Xep:Name`) so the tool applies the check's
/// built-in severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSeverity {
    /// Use the check's built-in severity (rendered without a suffix)
    #[default]
    Default,
    /// Turn the check off
    Off,
    /// Report findings as warnings
    Warn,
    /// Report findings as errors
    Error,
}

impl CheckSeverity {
    /// The severity suffix as it appears in flag syntax
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Off => "OFF",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for CheckSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid severity: {s}. Use: default, off, warn, error")),
        }
    }
}

/// A deferred source of free-form arguments
///
/// Providers are invoked exactly once per [`ErrorProneOptions::render`]
/// call, in registration order, so the arguments reflect whatever state
/// the provider reads at render time rather than at registration time.
/// Provider output bypasses validation, like [`ErrorProneOptions::extra_args`].
pub trait ArgumentProvider {
    /// Produce a finite, ordered argument sequence
    fn arguments(&self) -> Vec<String>;
}

impl<F> ArgumentProvider for F
where
    F: Fn() -> Vec<String>,
{
    fn arguments(&self) -> Vec<String> {
        self()
    }
}

/// Errors raised while rendering structured fields into flags
///
/// Both are fatal: the caller must fix the configuration and render again.
/// Free-form arguments are never validated here; anything malformed in
/// them surfaces later from the external tool's own argument parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A structured value would embed whitespace in its flag; the message
    /// starts with the exact flag that would have been emitted
    #[error("{0} contains whitespace")]
    EmbeddedWhitespace(String),

    /// A check name supplied through the structured API contains a colon
    #[error("check name {0:?} contains a colon, which is the -Xep flag's own field separator")]
    EmbeddedColon(String),
}

/// Structured description of one Error Prone configuration
///
/// All fields are public: callers may assign or replace them directly, or
/// use the convenience methods below. One instance belongs to one
/// compilation configuration and is rendered zero or more times; rendering
/// never mutates the model.
#[derive(Default)]
pub struct ErrorProneOptions {
    /// Disable all checks globally (`-XepDisableAllChecks`)
    pub disable_all_checks: bool,

    /// Demote all ERROR findings to warnings (`-XepAllErrorsAsWarnings`)
    pub all_errors_as_warnings: bool,

    /// Re-enable all disabled checks as warnings
    /// (`-XepAllDisabledChecksAsWarnings`)
    pub all_disabled_checks_as_warnings: bool,

    /// Suppress warnings in generated code
    /// (`-XepDisableWarningsInGeneratedCode`)
    pub disable_warnings_in_generated_code: bool,

    /// Do not fail on unrecognized check names
    /// (`-XepIgnoreUnknownCheckNames`)
    pub ignore_unknown_check_names: bool,

    /// Relax checks that only make sense outside test code
    /// (`-XepCompilingTestOnlyCode`)
    pub compiling_test_only_code: bool,

    /// Path-matching regex excluded from analysis
    /// (`-XepExcludedPaths:<pattern>`); the pattern is handed to the
    /// external tool's regex engine unparsed
    pub excluded_paths: Option<String>,

    /// Per-check severity overrides, in insertion order; re-inserting a
    /// name overwrites its severity without moving it
    pub checks: IndexMap<String, CheckSeverity>,

    /// Per-check string options, in insertion order
    /// (`-XepOpt:<key>=<value>`)
    pub check_options: IndexMap<String, String>,

    /// Free-form flags appended verbatim, already in final syntax
    pub extra_args: Vec<String>,

    /// Deferred free-form flags, evaluated once per render in
    /// registration order
    pub argument_providers: Vec<Box<dyn ArgumentProvider>>,
}

impl std::fmt::Debug for ErrorProneOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorProneOptions")
            .field("disable_all_checks", &self.disable_all_checks)
            .field("all_errors_as_warnings", &self.all_errors_as_warnings)
            .field(
                "all_disabled_checks_as_warnings",
                &self.all_disabled_checks_as_warnings,
            )
            .field(
                "disable_warnings_in_generated_code",
                &self.disable_warnings_in_generated_code,
            )
            .field("ignore_unknown_check_names", &self.ignore_unknown_check_names)
            .field("compiling_test_only_code", &self.compiling_test_only_code)
            .field("excluded_paths", &self.excluded_paths)
            .field("checks", &self.checks)
            .field("check_options", &self.check_options)
            .field("extra_args", &self.extra_args)
            .field("argument_providers", &self.argument_providers.len())
            .finish()
    }
}

impl ErrorProneOptions {
    /// Create an empty configuration (everything off, nothing overridden)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `name` is present, with `Default` severity if it was absent
    ///
    /// No-op when the check already has a severity; use
    /// [`check_severity`](Self::check_severity) to overwrite.
    pub fn check(&mut self, name: impl Into<String>) {
        self.checks.entry(name.into()).or_default();
    }

    /// Set or overwrite the severity for `name`
    pub fn check_severity(&mut self, name: impl Into<String>, severity: CheckSeverity) {
        self.checks.insert(name.into(), severity);
    }

    /// Ensure `key` is present, with an empty value if it was absent
    pub fn option(&mut self, key: impl Into<String>) {
        self.check_options.entry(key.into()).or_default();
    }

    /// Set or overwrite the value for option `key`
    pub fn option_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.check_options.insert(key.into(), value.into());
    }

    /// Append one free-form flag, passed through verbatim
    pub fn arg(&mut self, arg: impl Into<String>) {
        self.extra_args.push(arg.into());
    }

    /// Append several free-form flags, passed through verbatim
    pub fn args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
    }

    /// Register a deferred argument source, evaluated at render time
    pub fn argument_provider(&mut self, provider: impl ArgumentProvider + 'static) {
        self.argument_providers.push(Box::new(provider));
    }

    /// Render the model into the ordered flag list
    ///
    /// Output order is fixed: boolean toggles, excluded paths, checks in
    /// insertion order, check options in insertion order, `extra_args`,
    /// then each provider's output in registration order. Rendering the
    /// same unmodified model twice yields identical output, so downstream
    /// tooling may cache on the argument list.
    ///
    /// Nothing is deduplicated or reconciled: if a check is configured
    /// both here and via a free-form flag, both flags are emitted and the
    /// external tool's own semantics decide.
    ///
    /// # Errors
    ///
    /// [`RenderError::EmbeddedColon`] when a check name contains `:`, and
    /// [`RenderError::EmbeddedWhitespace`] when a structured value would
    /// embed whitespace in its flag. On error no partial list is returned.
    pub fn render(&self) -> Result<Vec<String>, RenderError> {
        let mut args = Vec::new();

        for (enabled, flag) in [
            (self.disable_all_checks, "-XepDisableAllChecks"),
            (self.all_errors_as_warnings, "-XepAllErrorsAsWarnings"),
            (
                self.all_disabled_checks_as_warnings,
                "-XepAllDisabledChecksAsWarnings",
            ),
            (
                self.disable_warnings_in_generated_code,
                "-XepDisableWarningsInGeneratedCode",
            ),
            (self.ignore_unknown_check_names, "-XepIgnoreUnknownCheckNames"),
            (self.compiling_test_only_code, "-XepCompilingTestOnlyCode"),
        ] {
            if enabled {
                args.push(flag.to_owned());
            }
        }

        if let Some(pattern) = &self.excluded_paths {
            args.push(whitespace_free(format!("-XepExcludedPaths:{pattern}"))?);
        }

        for (name, severity) in &self.checks {
            // Colon injection is unambiguously wrong (it is the field
            // separator), so it is reported before any whitespace issue
            // in the same name.
            if name.contains(':') {
                return Err(RenderError::EmbeddedColon(name.clone()));
            }
            let flag = match severity {
                CheckSeverity::Default => format!("-Xep:{name}"),
                _ => format!("-Xep:{name}:{severity}"),
            };
            args.push(whitespace_free(flag)?);
        }

        for (key, value) in &self.check_options {
            args.push(whitespace_free(format!("-XepOpt:{key}={value}"))?);
        }

        args.extend(self.extra_args.iter().cloned());

        for provider in &self.argument_providers {
            args.extend(provider.arguments());
        }

        Ok(args)
    }
}

/// Reject a flag whose structured parts embedded whitespace
///
/// The fixed prefixes and severity names never contain whitespace, so
/// scanning the assembled flag is equivalent to scanning the structured
/// values, and the error carries the exact flag that would have been
/// emitted.
fn whitespace_free(flag: String) -> Result<String, RenderError> {
    if flag.chars().any(char::is_whitespace) {
        return Err(RenderError::EmbeddedWhitespace(flag));
    }
    Ok(flag)
}
