//! secuchat-terms - Usage-agreement gate for Secuchat-CLI
//!
//! Shows the Secuchat-CLI usage agreement and records whether the operator
//! accepts it. The decision is reported through the process exit status.

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

pub mod decision;
pub mod output;
pub mod prompt;
pub mod screen;
pub mod terms;
