//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of rendering a configuration into flags
#[derive(Debug, Serialize)]
pub struct RenderResult {
    /// The rendered flags, in final order
    pub args: Vec<String>,
}

/// Result of validating a configuration
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the configuration rendered without errors
    pub valid: bool,
    /// Number of flags the configuration renders to
    pub flags: usize,
    /// The validation error, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    // One flag per line, so the output can be dropped into a javac
    // @argfile or piped through xargs unquoted.
    fn render_human(&self) {
        for arg in &self.args {
            println!("{arg}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::json!(self));
    }
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{} configuration renders {} flag(s)", "ok".green(), self.flags);
        } else {
            let message = self.error.as_deref().unwrap_or("unknown error");
            println!("{} {}", "error:".red(), message);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::json!(self));
    }
}
