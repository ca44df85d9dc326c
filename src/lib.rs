//! Password strength meter core
//!
//! This library evaluates password strength against a fixed checklist,
//! flags well-known common passwords and generates strong random passwords.
//! A rendering adapter turns each assessment into display-ready data.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation and the clipboard
//!   copy acknowledgment
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GENERATOR_LENGTH`: Default generated password length (default: 14)
//! - `PWD_GENERATOR_CLASSES`: Comma-separated character classes to generate
//!   from (default: `lower,upper,digit,special`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, generate_password, GeneratorPolicy, StrengthLabel};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let assessment = evaluate_password_strength(&password);
//!
//! assert_eq!(assessment.score.value(), 5);
//! assert_eq!(assessment.label, StrengthLabel::VeryStrong);
//!
//! let generated = generate_password(&GeneratorPolicy::default()).unwrap();
//! assert_eq!(generated.expose_secret().len(), 14);
//! ```

// Internal modules
mod blacklist;
mod charset;
mod evaluator;
mod generator;
mod render;
mod sections;
mod types;

#[cfg(feature = "async")]
mod clipboard;

#[cfg(test)]
mod proptests;

// Public API
pub use blacklist::{COMMON_PASSWORDS, get_blacklist, is_common};
pub use charset::CharacterClass;
pub use evaluator::{TIP_ALL_MET, TIP_EMPTY, evaluate_password_strength};
pub use generator::{
    ConfigError, DEFAULT_LENGTH, GeneratorError, GeneratorPolicy, generate_password,
    generate_password_with_rng,
};
pub use sections::{
    TIP_LONG_LENGTH, TIP_LOWER, TIP_MIN_LENGTH, TIP_NO_SPACES, TIP_NUMBER, TIP_SPECIAL, TIP_UPPER,
};
pub use render::{
    AssessmentView, COMMON_WARNING, FieldVisibility, Requirement, RequirementItem, StrengthMeter,
};
pub use types::{
    CrackTimeCategory, LONG_LENGTH, MIN_LENGTH, PasswordAssessment, PasswordScore, Requirements,
    StrengthLabel,
};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};

#[cfg(feature = "async")]
pub use clipboard::{
    COPY_ACK_DELAY, Clipboard, ClipboardError, CopyLabel, CopyOutcome, acknowledge_copy,
    copy_password,
};
