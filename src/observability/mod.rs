//! Observability.
//!
//! Logging setup for the CLI. All output goes to stderr so rendered
//! pages and JSON reports on stdout stay clean.

pub mod logging;

pub use logging::{LogFormat, init_logging, verbosity_to_directive};
