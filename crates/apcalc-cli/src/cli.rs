//! Command-line interface
//!
//! Each subcommand renders its output to a string so callers decide where it
//! goes.

use anyhow::{Context, Result};
use apcalc_calculator::{Arity, Calculator, CalculatorConfig};
use apcalc_types::{Number, Representation};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// apcalc command-line tool
#[derive(Parser, Debug)]
#[command(name = "apcalc")]
#[command(about = "Call apcalc functions by name")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Calculator configuration file (defaults to $APCALC_CONFIG_PATH or apcalc.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Call a function with literal arguments
    Call {
        /// Registered function name, e.g. `gamma` or `n`
        name: String,

        /// Argument literals: `42`, `3/4`, `1.5`, `2-1i`
        #[arg(allow_hyphen_values = true)]
        arguments: Vec<String>,
    },

    /// List registered functions with their arity windows
    List,

    /// Show the effective calculator configuration
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct CallOutput<'a> {
    function: &'a str,
    result: &'a Number,
    representation: Representation,
}

#[derive(Serialize)]
struct SignatureOutput<'a> {
    name: &'a str,
    min_arguments: usize,
    max_arguments: usize,
}

impl Cli {
    /// Load the configuration selected by `--config`, or the default lookup.
    pub fn load_config(&self) -> Result<CalculatorConfig> {
        let config = match &self.config {
            Some(path) => CalculatorConfig::load_from(&path.to_string_lossy()),
            None => CalculatorConfig::load(),
        };
        config.context("Failed to load calculator configuration")
    }

    /// Run the selected subcommand against `calculator`.
    pub fn execute(&self, calculator: &Calculator) -> Result<String> {
        match &self.command {
            Command::Call { name, arguments } => self.call(calculator, name, arguments),
            Command::List => self.list(calculator),
            Command::Config => self.show_config(calculator.config()),
        }
    }

    fn call(&self, calculator: &Calculator, name: &str, arguments: &[String]) -> Result<String> {
        let arguments = arguments
            .iter()
            .map(|literal| {
                literal
                    .parse::<Number>()
                    .with_context(|| format!("Invalid argument '{literal}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        let result = calculator.function(name, &arguments)?;
        info!(function = name, representation = %result.representation(), "Function evaluated");

        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&CallOutput {
                function: name,
                result: &result,
                representation: result.representation(),
            })?,
            OutputFormat::Text => result.to_string(),
        })
    }

    fn list(&self, calculator: &Calculator) -> Result<String> {
        let signatures = calculator.signatures();
        Ok(match self.format {
            OutputFormat::Json => {
                let rows: Vec<SignatureOutput> = signatures
                    .iter()
                    .map(|(name, arity)| SignatureOutput {
                        name,
                        min_arguments: arity.min(),
                        max_arguments: arity.max(),
                    })
                    .collect();
                serde_json::to_string_pretty(&rows)?
            }
            OutputFormat::Text => signatures
                .iter()
                .map(|(name, arity)| format_signature(name, *arity))
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    fn show_config(&self, config: &CalculatorConfig) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(config)?,
            OutputFormat::Text => toml::to_string_pretty(config)?,
        })
    }
}

fn format_signature(name: &str, arity: Arity) -> String {
    format!("{name}/{arity}")
}
