//! epflags - Compile Error Prone options into javac plugin flags
//!
//! This tool loads a TOML description of an Error Prone configuration and
//! prints the ordered `-Xep*` argument list a build can hand to javac,
//! validating the structured values first so misconfigurations fail here
//! with a readable message instead of inside the compiler invocation.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

fn main() -> anyhow::Result<()> {
    cli::run()
}
