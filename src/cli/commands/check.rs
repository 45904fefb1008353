//! Validate a configuration without printing the arguments

use std::path::Path;

use epflags::config::ConfigFile;
use epflags::output::{CheckReport, OutputMode};

/// Load a configuration file and report whether it renders cleanly
pub fn check(config: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let options = ConfigFile::load(config)?.into_options();

    let report = match options.render() {
        Ok(args) => CheckReport {
            valid: true,
            flags: args.len(),
            error: None,
        },
        Err(err) => CheckReport {
            valid: false,
            flags: 0,
            error: Some(err.to_string()),
        },
    };

    let valid = report.valid;
    report.render(mode);

    if !valid {
        std::process::exit(1);
    }

    Ok(())
}
