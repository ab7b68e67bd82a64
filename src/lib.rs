//! deltae - CIEDE2000 color difference on the command line
//!
//! Configuration, error and report modules behind the `deltae` binary.
//! The numeric pipeline itself lives in the `ciede2000` crate.
//! This library exposes modules for integration testing.

pub mod config;
pub mod error;
pub mod report;
