// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt;
use std::io::{self, BufRead};

use log::debug;
use serde::Serialize;

const END_OF_INPUT: &str = "done";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Analysis {
    pub(crate) count: usize,
    pub(crate) sum: f64,
    pub(crate) average: f64,
    pub(crate) minimum: f64,
    pub(crate) maximum: f64,
    pub(crate) even_count: usize,
    pub(crate) odd_count: usize,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Results:")?;
        writeln!(f, "{}", "-".repeat(20))?;
        writeln!(f, "Count: {:.2}", self.count as f64)?;
        writeln!(f, "Sum: {:.2}", self.sum)?;
        writeln!(f, "Average: {:.2}", self.average)?;
        writeln!(f, "Minimum: {:.2}", self.minimum)?;
        writeln!(f, "Maximum: {:.2}", self.maximum)?;
        writeln!(f, "Even numbers: {:.2}", self.even_count as f64)?;
        write!(f, "Odd numbers: {:.2}", self.odd_count as f64)
    }
}

/// Summarizes `numbers`, or returns `None` when there is nothing to summarize.
///
/// Anything that is not a multiple of two, fractions included, counts as odd.
pub(crate) fn analyze(numbers: &[f64]) -> Option<Analysis> {
    if numbers.is_empty() {
        return None;
    }

    let count = numbers.len();
    let sum: f64 = numbers.iter().sum();
    let minimum = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let maximum = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let even_count = numbers.iter().filter(|n| *n % 2.0 == 0.0).count();

    Some(Analysis {
        count,
        sum,
        average: sum / count as f64,
        minimum,
        maximum,
        even_count,
        odd_count: count - even_count,
    })
}

/// Reads one number per line until a `done` line or the end of input.
///
/// Lines that do not parse are reported on `errors` and skipped.
pub(crate) fn read_numbers<R, W>(reader: R, errors: &mut W) -> io::Result<Vec<f64>>
where
    R: BufRead,
    W: io::Write,
{
    let mut numbers = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();

        if entry.eq_ignore_ascii_case(END_OF_INPUT) {
            debug!("End of input marker received");
            break;
        }
        if entry.is_empty() {
            continue;
        }

        match entry.parse::<f64>() {
            Ok(number) => numbers.push(number),
            Err(e) => {
                debug!("Skipping '{entry}': {e}");
                writeln!(errors, "Please provide a number, '{entry}' is not one!")?;
            }
        }
    }

    debug!("Read {} numbers", numbers.len());
    Ok(numbers)
}
