// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum TemperatureUnit {
    /// Degrees Celsius
    #[value(alias = "c")]
    Celsius,
    /// Degrees Fahrenheit
    #[value(alias = "f")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub(crate) fn other(self) -> TemperatureUnit {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub(crate) fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub(crate) fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Converts `value` from `unit` into the other unit of the pair.
pub(crate) fn convert(value: f64, unit: TemperatureUnit) -> (f64, TemperatureUnit) {
    let converted = match unit {
        TemperatureUnit::Celsius => celsius_to_fahrenheit(value),
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
    };
    (converted, unit.other())
}
