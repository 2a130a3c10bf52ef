// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Longest password `generate` will build.
pub(crate) const MAX_LENGTH: usize = 4096;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub(crate) const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub(crate) fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum PasswordError {
    #[error("Invalid configuration: at least one character class must be enabled")]
    InvalidConfiguration,
    #[error("Invalid length {length}: at least {required} characters are needed to cover every enabled character class")]
    InvalidLength { length: usize, required: usize },
    #[error("Invalid length {length}: at most {maximum} characters are supported")]
    LengthTooLong { length: usize, maximum: usize },
}

/// Parameters of a single password generation.
///
/// Classes are kept deduplicated and in [`CharacterClass::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GenerationRequest {
    length: usize,
    classes: Vec<CharacterClass>,
}

impl GenerationRequest {
    pub(crate) fn new(length: usize, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        let mut classes: Vec<CharacterClass> = classes.into_iter().collect();
        classes.sort();
        classes.dedup();

        GenerationRequest { length, classes }
    }

    pub(crate) fn length(&self) -> usize {
        self.length
    }

    pub(crate) fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }
}

/// Generates a password that contains at least one character of every class in `request`.
///
/// One character is drawn per enabled class, the rest come from the union of all enabled
/// alphabets, and the buffer is shuffled in place before it is returned.
pub(crate) fn generate<R>(request: &GenerationRequest, rng: &mut R) -> Result<String, PasswordError>
where
    R: Rng + ?Sized,
{
    trace!("Generating random password");

    let classes = request.classes();
    if classes.is_empty() {
        return Err(PasswordError::InvalidConfiguration);
    }

    let length = request.length();
    if length == 0 || length < classes.len() {
        return Err(PasswordError::InvalidLength {
            length,
            required: classes.len().max(1),
        });
    }
    if length > MAX_LENGTH {
        return Err(PasswordError::LengthTooLong {
            length,
            maximum: MAX_LENGTH,
        });
    }

    debug!(
        "Password of length {length} using classes: {}",
        classes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let alphabet: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.alphabet().iter().copied())
        .collect();

    let mut buffer: Vec<u8> = Vec::with_capacity(length);
    for class in classes {
        buffer.push(pick(class.alphabet(), rng));
    }
    while buffer.len() < length {
        buffer.push(pick(&alphabet, rng));
    }

    buffer.shuffle(rng);

    Ok(buffer.into_iter().map(char::from).collect())
}

fn pick<R>(alphabet: &[u8], rng: &mut R) -> u8
where
    R: Rng + ?Sized,
{
    alphabet[rng.random_range(0..alphabet.len())]
}
