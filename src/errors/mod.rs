//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each recoverable parse failure
//! - Helpful tips attached to some of those failures

pub mod errors;
