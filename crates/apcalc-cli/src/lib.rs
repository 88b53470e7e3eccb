//! apcalc command-line front end
//!
//! Parses `apcalc call|list|config`, loads the calculator configuration and
//! renders results as text or JSON.

pub mod cli;
pub mod tracing_setup;

pub use cli::{Cli, Command, LogFormat, OutputFormat};
