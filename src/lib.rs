//! epflags - Compile Error Prone options into javac plugin flags
//!
//! This library models the configurable knobs of the Error Prone static
//! analyzer (global toggles, per-check severities, per-check string
//! options) and deterministically renders them into the exact `-Xep*`
//! flag syntax the compiler plugin expects, validating structured values
//! before the external tool's own argument parser ever sees them.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod options;
pub mod output;
