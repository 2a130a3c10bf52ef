// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clap::{Args, Parser, Subcommand};

use crate::temperature::TemperatureUnit;

/// pocketkit - Small everyday command-line helpers.
///
/// Generates and rates passwords, converts temperatures and summarizes lists of numbers.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))] // Require at least one subcommand
#[command(propagate_version = true)] // Display version in subcommand help
pub(crate) struct CliArgs {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[clap(short, long, global = true)]
    pub(crate) verbose: bool,

    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Generate random passwords and rate their strength.
    ///
    /// Every enabled character class is guaranteed to appear at least once in each password.
    Generate(GenerateArgs),

    /// Rate the strength of an existing password.
    Rate(RateArgs),

    /// Convert a temperature between Celsius and Fahrenheit.
    Convert(ConvertArgs),

    /// Analyze a list of numbers.
    ///
    /// Numbers are taken from the command line, or read from stdin one per line until 'done'.
    Analyze(AnalyzeArgs),
}

/// Arguments specific to the `generate` subcommand.
#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Path to an optional YAML file with password defaults
    #[clap(short, long)]
    pub(crate) config_path: Option<std::path::PathBuf>,

    /// The length of the generated password [default: 12]
    #[clap(short, long)]
    pub(crate) length: Option<usize>,

    /// Number of alternative passwords to print [default: 3]
    #[clap(short, long)]
    pub(crate) alternatives: Option<usize>,

    /// Exclude lowercase letters
    #[clap(long)]
    pub(crate) no_lowercase: bool,

    /// Exclude uppercase letters
    #[clap(long)]
    pub(crate) no_uppercase: bool,

    /// Exclude digits
    #[clap(long)]
    pub(crate) no_digits: bool,

    /// Exclude special characters
    #[clap(long)]
    pub(crate) no_special: bool,
}

/// Arguments specific to the `rate` subcommand.
#[derive(Args, Debug)]
pub(crate) struct RateArgs {
    /// The password to rate
    #[clap(allow_hyphen_values = true)]
    pub(crate) password: String,
}

/// Arguments specific to the `convert` subcommand.
#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// The temperature to convert
    #[clap(allow_negative_numbers = true)]
    pub(crate) value: f64,

    /// The unit of the given temperature
    #[clap(short, long, value_enum, ignore_case = true)]
    pub(crate) unit: TemperatureUnit,

    /// Decimal places of the converted temperature
    #[clap(short, long, default_value = "0")]
    pub(crate) decimals: usize,
}

/// Arguments specific to the `analyze` subcommand.
#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Numbers to analyze; read from stdin when omitted
    #[clap(allow_negative_numbers = true)]
    pub(crate) numbers: Vec<f64>,

    /// Print the analysis as JSON
    #[clap(long)]
    pub(crate) json: bool,
}
