//! Length section - checks the minimum and recommended password length.

use super::SectionTips;
use crate::types::Requirements;

pub const TIP_MIN_LENGTH: &str = "Use at least 8 characters.";
pub const TIP_LONG_LENGTH: &str = "Use 12 or more characters for extra strength.";

/// Checks the password length.
///
/// The two length tips are mutually exclusive: a password shorter than the
/// minimum only gets the minimum tip.
pub fn length_section(req: &Requirements) -> SectionTips {
    if !req.has_min_length {
        vec![TIP_MIN_LENGTH]
    } else if !req.has_long_bonus {
        vec![TIP_LONG_LENGTH]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let req = Requirements::detect("Short1!");
        assert_eq!(length_section(&req), vec![TIP_MIN_LENGTH]);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let req = Requirements::detect("12345678");
        assert_eq!(length_section(&req), vec![TIP_LONG_LENGTH]);
    }

    #[test]
    fn test_length_section_exactly_long() {
        let req = Requirements::detect("123456789012");
        assert!(length_section(&req).is_empty());
    }

    #[test]
    fn test_length_section_valid() {
        let req = Requirements::detect("LongEnough123!");
        assert!(length_section(&req).is_empty());
    }
}
