//! Character variety section - checks for lowercase, uppercase, numbers, special chars.

use super::SectionTips;
use crate::types::Requirements;

pub const TIP_LOWER: &str = "Add at least one lowercase letter (a–z).";
pub const TIP_UPPER: &str = "Add at least one uppercase letter (A–Z).";
pub const TIP_NUMBER: &str = "Include at least one number (0–9).";
pub const TIP_SPECIAL: &str = "Include at least one special character (! @ # $ % ^ & *).";

/// Checks if the password contains every character class.
///
/// # Returns
/// One tip per missing class, in the order lowercase, uppercase, number, special.
pub fn character_variety_section(req: &Requirements) -> SectionTips {
    [
        (req.has_lower, TIP_LOWER),
        (req.has_upper, TIP_UPPER),
        (req.has_number, TIP_NUMBER),
        (req.has_special, TIP_SPECIAL),
    ]
    .into_iter()
    .filter_map(|(met, tip)| (!met).then_some(tip))
    .collect()
}
