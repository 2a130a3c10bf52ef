// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::error::Error;
use std::io::{self, BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::analysis::{analyze, read_numbers};
use crate::cli::{AnalyzeArgs, ConvertArgs, GenerateArgs, RateArgs};
use crate::config::{load_config, PasswordConfig};
use crate::password::{generate, GenerationRequest};
use crate::strength::{rate, score};
use crate::temperature::convert;

pub(crate) fn generate_passwords<R, W>(
    generate_args: &GenerateArgs,
    rng: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    R: Rng + ?Sized,
    W: Write,
{
    debug!("Starting 'generate' workflow");

    let config = load_config(generate_args.config_path.as_deref())?;
    let password_config = apply_overrides(config.password, generate_args);
    let request = GenerationRequest::new(password_config.length, password_config.classes());

    let password = generate(&request, rng)?;
    writeln!(out, "Generated Password: {password}")?;
    writeln!(out, "Strength: {}", rate(&password))?;

    if password_config.alternatives > 0 {
        writeln!(out)?;
        writeln!(out, "Alternative passwords:")?;
        for i in 1..=password_config.alternatives {
            let alternative = generate(&request, rng)?;
            writeln!(out, "{i}. {alternative} ({})", rate(&alternative))?;
        }
    }

    info!(
        "Generated {} password(s)",
        password_config.alternatives + 1
    );
    Ok(())
}

fn apply_overrides(mut config: PasswordConfig, generate_args: &GenerateArgs) -> PasswordConfig {
    if let Some(length) = generate_args.length {
        config.length = length;
    }
    if let Some(alternatives) = generate_args.alternatives {
        config.alternatives = alternatives;
    }
    config.lowercase &= !generate_args.no_lowercase;
    config.uppercase &= !generate_args.no_uppercase;
    config.digits &= !generate_args.no_digits;
    config.special &= !generate_args.no_special;
    config
}

pub(crate) fn rate_password<W: Write>(rate_args: &RateArgs, out: &mut W) -> io::Result<()> {
    debug!("Starting 'rate' workflow");

    let password = rate_args.password.as_str();
    writeln!(out, "Strength: {} ({}/5)", rate(password), score(password))
}

pub(crate) fn convert_temperature<W: Write>(
    convert_args: &ConvertArgs,
    out: &mut W,
) -> io::Result<()> {
    debug!("Starting 'convert' workflow");

    let (converted, unit) = convert(convert_args.value, convert_args.unit);
    writeln!(
        out,
        "{}{} is {:.*}{}",
        convert_args.value, convert_args.unit, convert_args.decimals, converted, unit
    )
}

pub(crate) fn analyze_numbers<I, W, E>(
    analyze_args: &AnalyzeArgs,
    input: I,
    out: &mut W,
    errors: &mut E,
) -> Result<(), Box<dyn Error>>
where
    I: BufRead,
    W: Write,
    E: Write,
{
    debug!("Starting 'analyze' workflow");

    let numbers = if analyze_args.numbers.is_empty() {
        read_numbers(input, errors)?
    } else {
        analyze_args.numbers.clone()
    };

    match analyze(&numbers) {
        None => writeln!(out, "No numbers entered!")?,
        Some(analysis) if analyze_args.json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?
        }
        Some(analysis) => writeln!(out, "{analysis}")?,
    }

    Ok(())
}
