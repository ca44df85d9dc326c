//! Character classes shared by the evaluator and the generator.
//!
//! Detection and generation read the same pools, so a generated password
//! always satisfies the checks it is later evaluated against.

use std::fmt;
use std::str::FromStr;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*";

/// A class of characters a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The fixed, non-empty ASCII pool for this class.
    pub const fn pool(self) -> &'static [u8] {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Returns `true` if `c` belongs to this class's pool.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.pool().contains(&(c as u8))
    }

    /// Returns `true` if any character of `text` belongs to this class.
    pub fn any_in(self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Lower => "lower",
            CharacterClass::Upper => "upper",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" => Ok(CharacterClass::Lower),
            "upper" => Ok(CharacterClass::Upper),
            "digit" => Ok(CharacterClass::Digit),
            "special" => Ok(CharacterClass::Special),
            other => Err(format!("unknown character class: {}", other)),
        }
    }
}
