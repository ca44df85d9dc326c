//! Strong password generation
//!
//! Generates random passwords that contain at least one character from each
//! requested [`CharacterClass`].

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::CharacterClass;

/// Default length of a generated password.
pub const DEFAULT_LENGTH: usize = 14;

const LENGTH_ENV: &str = "PWD_GENERATOR_LENGTH";
const CLASSES_ENV: &str = "PWD_GENERATOR_CLASSES";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {length} is shorter than the {required} mandatory character classes")]
    InvalidLength { length: usize, required: usize },
    #[error("At least one character class must be requested")]
    NoCharacterClasses,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Length and character classes for a generated password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolicy {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharacterClass::ALL.into_iter().collect(),
        }
    }
}

impl GeneratorPolicy {
    /// All four classes with a custom length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn new(length: usize, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        Self {
            length,
            classes: classes.into_iter().collect(),
        }
    }

    /// Builds a policy from the environment.
    ///
    /// Priority for each field:
    /// 1. Environment variable (`PWD_GENERATOR_LENGTH`, `PWD_GENERATOR_CLASSES`)
    /// 2. Default (14 characters, all classes)
    ///
    /// `PWD_GENERATOR_CLASSES` is a comma-separated list of
    /// `lower`, `upper`, `digit`, `special`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but cannot be
    /// parsed. The policy itself is validated when generating.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut policy = Self::default();

        if let Ok(raw) = std::env::var(LENGTH_ENV) {
            policy.length = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: LENGTH_ENV,
                value: raw.clone(),
            })?;
        }

        if let Ok(raw) = std::env::var(CLASSES_ENV) {
            policy.classes = raw
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(str::parse::<CharacterClass>)
                .collect::<Result<_, _>>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: CLASSES_ENV,
                    value: raw.clone(),
                })?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Generator policy loaded: length {}, classes {:?}",
            policy.length,
            policy.classes
        );

        Ok(policy)
    }

    /// Checks that every requested class can be represented.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.classes.is_empty() {
            return Err(GeneratorError::NoCharacterClasses);
        }
        if self.length < self.classes.len() {
            return Err(GeneratorError::InvalidLength {
                length: self.length,
                required: self.classes.len(),
            });
        }
        Ok(())
    }

    /// Union of the pools of every requested class.
    fn pool(&self) -> Vec<u8> {
        self.classes
            .iter()
            .flat_map(|class| class.pool().iter().copied())
            .collect()
    }
}

/// Generates a password using the thread-local CSPRNG.
///
/// # Errors
///
/// See [`generate_password_with_rng`].
pub fn generate_password(policy: &GeneratorPolicy) -> Result<SecretString, GeneratorError> {
    generate_password_with_rng(policy, &mut rand::rng())
}

/// Generates a password drawing randomness from `rng`.
///
/// One character is drawn from each requested class, the remaining positions
/// are filled from the union of all requested pools, and the result is
/// shuffled so the guaranteed characters have no fixed position.
///
/// # Errors
///
/// - [`GeneratorError::InvalidLength`] if `policy.length` is smaller than the
///   number of requested classes
/// - [`GeneratorError::NoCharacterClasses`] if no class is requested
pub fn generate_password_with_rng<R: Rng + ?Sized>(
    policy: &GeneratorPolicy,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    if let Err(e) = policy.validate() {
        #[cfg(feature = "tracing")]
        tracing::error!("Password generation rejected: {}", e);
        return Err(e);
    }

    let pool = policy.pool();
    let mut password: Vec<u8> = Vec::with_capacity(policy.length);

    for class in &policy.classes {
        password.extend(class.pool().choose(rng));
    }

    while password.len() < policy.length {
        password.extend(pool.choose(rng));
    }

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password of {} characters from {} classes",
        password.len(),
        policy.classes.len()
    );

    // Every pool is ASCII, so each byte is one char.
    let password: String = password.into_iter().map(char::from).collect();
    Ok(SecretString::new(password.into()))
}
