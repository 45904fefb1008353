//! Render a configuration into the final argument list

use std::path::Path;

use epflags::config::ConfigFile;
use epflags::output::{OutputMode, RenderResult};

/// Load a configuration file, validate it, and print the rendered flags
pub fn render(config: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let options = ConfigFile::load(config)?.into_options();
    let args = options.render()?;

    log::debug!("rendered {} flag(s) from {}", args.len(), config.display());

    let result = RenderResult { args };
    result.render(mode);

    Ok(())
}
