//! selfinc - checks that every header in a header-only C++ tree is
//! self-sufficient
//!
//! A header is self-sufficient when it compiles as the only library include
//! in a translation unit, i.e. it pulls in everything it depends on instead
//! of relying on an inclusion order imposed by its callers. This library
//! walks a header tree, generates a one-include probe translation unit per
//! header, and compiles each probe in isolation, halting at the first
//! failure.

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

pub mod checker;
pub mod compiler;
pub mod config;
pub mod discovery;
pub mod probe;
