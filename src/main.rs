// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::io;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::trace;

use crate::cli::{CliArgs, Command};
use crate::workflow::{analyze_numbers, convert_temperature, generate_passwords, rate_password};

mod analysis;
mod cli;
mod config;
mod password;
mod strength;
mod temperature;
mod workflow;

fn main() {
    let args: CliArgs = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    trace!("Parsed arguments: {args:?}");

    if let Err(e) = run(args.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Generate(generate_args) => {
            generate_passwords(&generate_args, &mut rand::rng(), &mut out)?
        }
        Command::Rate(rate_args) => rate_password(&rate_args, &mut out)?,
        Command::Convert(convert_args) => convert_temperature(&convert_args, &mut out)?,
        Command::Analyze(analyze_args) => analyze_numbers(
            &analyze_args,
            io::stdin().lock(),
            &mut out,
            &mut io::stderr(),
        )?,
    }

    Ok(())
}
