// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use thiserror::Error;

use crate::password::CharacterClass;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Default, Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) password: PasswordConfig,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PasswordConfig {
    pub(crate) length: usize,
    pub(crate) lowercase: bool,
    pub(crate) uppercase: bool,
    pub(crate) digits: bool,
    pub(crate) special: bool,
    pub(crate) alternatives: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        PasswordConfig {
            length: 12,
            lowercase: true,
            uppercase: true,
            digits: true,
            special: true,
            alternatives: 3,
        }
    }
}

impl PasswordConfig {
    pub(crate) fn classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| match class {
                CharacterClass::Lowercase => self.lowercase,
                CharacterClass::Uppercase => self.uppercase,
                CharacterClass::Digit => self.digits,
                CharacterClass::Special => self.special,
            })
            .collect()
    }
}

pub(crate) fn read_config(config_path: &Path) -> Result<Config, ConfigError> {
    let path_string = config_path.display().to_string();
    debug!("Reading config at: {path_string}");

    let mut config_data: String = String::new();
    File::open(config_path)
        .and_then(|mut config_file| config_file.read_to_string(&mut config_data))
        .map_err(|source| ConfigError::Read {
            path: path_string,
            source,
        })?;

    Ok(serde_yaml::from_str(&config_data)?)
}

/// Reads `config_path` when given, falls back to the built-in defaults otherwise.
pub(crate) fn load_config(config_path: Option<&Path>) -> Result<Config, ConfigError> {
    match config_path {
        Some(path) => read_config(path),
        None => {
            debug!("No configuration file given, using defaults");
            Ok(Config::default())
        }
    }
}
