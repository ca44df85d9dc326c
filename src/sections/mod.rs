//! Password evaluation sections
//!
//! Each section inspects one group of requirement flags and returns the
//! tips for whatever it finds unmet. Sections run in a fixed order, which
//! is the order tips are shown in.

mod length;
mod variety;
mod whitespace;

pub use length::{TIP_LONG_LENGTH, TIP_MIN_LENGTH, length_section};
pub use variety::{TIP_LOWER, TIP_NUMBER, TIP_SPECIAL, TIP_UPPER, character_variety_section};
pub use whitespace::{TIP_NO_SPACES, whitespace_section};

use crate::types::Requirements;

/// Tips produced by a section.
/// - empty - section passed
/// - non-empty - one advisory string per unmet condition, in display order
pub type SectionTips = Vec<&'static str>;

/// A section is a pure function of the detected requirement flags.
pub type Section = fn(&Requirements) -> SectionTips;

/// Sections in tip order.
pub const SECTIONS: [(&str, Section); 3] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("whitespace", whitespace_section),
];
