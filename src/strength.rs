// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt;

const MAX_SCORE: u8 = 5;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) enum StrengthRating {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthRating {
    const SCALE: [StrengthRating; 6] = [
        StrengthRating::VeryWeak,
        StrengthRating::Weak,
        StrengthRating::Fair,
        StrengthRating::Good,
        StrengthRating::Strong,
        StrengthRating::VeryStrong,
    ];

    fn from_score(score: u8) -> StrengthRating {
        StrengthRating::SCALE[usize::from(score.min(MAX_SCORE))]
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthRating::VeryWeak => "Very Weak",
            StrengthRating::Weak => "Weak",
            StrengthRating::Fair => "Fair",
            StrengthRating::Good => "Good",
            StrengthRating::Strong => "Strong",
            StrengthRating::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Points for length (8+, 12+) and for containing lowercase, uppercase and digit characters.
///
/// Symbols do not add to the score.
pub(crate) fn score(password: &str) -> u8 {
    let length = password.chars().count();

    let criteria = [
        length >= 8,
        length >= 12,
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_numeric),
    ];

    let points = criteria.iter().filter(|met| **met).count() as u8;
    points.min(MAX_SCORE)
}

pub(crate) fn rate(password: &str) -> StrengthRating {
    StrengthRating::from_score(score(password))
}
