//! Assessment types returned by the evaluator.

use std::fmt;

use crate::charset::CharacterClass;

/// Minimum length for the base length requirement.
pub const MIN_LENGTH: usize = 8;

/// Length that earns the extra length point.
pub const LONG_LENGTH: usize = 12;

/// Numeric strength score in `[0, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 6;

    /// Creates a score, saturating at [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Discrete strength category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Empty,
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

/// Label for each score, indexed by score value.
const LABEL_BY_SCORE: [StrengthLabel; PasswordScore::MAX as usize + 1] = [
    StrengthLabel::VeryWeak,
    StrengthLabel::VeryWeak,
    StrengthLabel::Weak,
    StrengthLabel::Fair,
    StrengthLabel::Strong,
    StrengthLabel::VeryStrong,
    StrengthLabel::VeryStrong,
];

/// Crack-time category for each label, indexed by label discriminant.
const CRACK_TIME_BY_LABEL: [CrackTimeCategory; 6] = [
    CrackTimeCategory::NotApplicable,
    CrackTimeCategory::Instant,
    CrackTimeCategory::Seconds,
    CrackTimeCategory::MinutesToHours,
    CrackTimeCategory::DaysToYears,
    CrackTimeCategory::CenturiesOrLonger,
];

impl StrengthLabel {
    /// Maps a score to its label. Emptiness takes priority over the score.
    pub fn from_score(score: PasswordScore, is_empty: bool) -> Self {
        if is_empty {
            return StrengthLabel::Empty;
        }
        LABEL_BY_SCORE[score.value() as usize]
    }

    pub fn crack_time(self) -> CrackTimeCategory {
        CRACK_TIME_BY_LABEL[self as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Empty => "-",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory crack-time estimate.
///
/// Derived from the strength label only. It is flavor text for the user and
/// not an entropy computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrackTimeCategory {
    NotApplicable,
    Instant,
    Seconds,
    MinutesToHours,
    DaysToYears,
    CenturiesOrLonger,
}

impl CrackTimeCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            CrackTimeCategory::NotApplicable => "N/A",
            CrackTimeCategory::Instant => "Instantly",
            CrackTimeCategory::Seconds => "A few seconds",
            CrackTimeCategory::MinutesToHours => "Minutes to hours",
            CrackTimeCategory::DaysToYears => "Days to years",
            CrackTimeCategory::CenturiesOrLonger => "Centuries or longer (in theory)",
        }
    }
}

impl fmt::Display for CrackTimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement flags detected in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirements {
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub has_space: bool,
    pub has_min_length: bool,
    pub has_long_bonus: bool,
}

impl Requirements {
    pub fn detect(password: &str) -> Self {
        let length = password.chars().count();
        Self {
            length,
            has_lower: CharacterClass::Lower.any_in(password),
            has_upper: CharacterClass::Upper.any_in(password),
            has_number: CharacterClass::Digit.any_in(password),
            has_special: CharacterClass::Special.any_in(password),
            has_space: password.chars().any(char::is_whitespace),
            has_min_length: length >= MIN_LENGTH,
            has_long_bonus: length >= LONG_LENGTH,
        }
    }

    /// One point per satisfied criterion. Whitespace is advisory and never scored.
    pub fn score(&self) -> PasswordScore {
        let points = [
            self.has_min_length,
            self.has_long_bonus,
            self.has_lower,
            self.has_upper,
            self.has_number,
            self.has_special,
        ]
        .iter()
        .filter(|&&met| met)
        .count();
        PasswordScore::new(points as u8)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Full assessment of a single password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub has_space: bool,
    pub has_min_length: bool,
    pub has_long_bonus: bool,
    pub score: PasswordScore,
    pub label: StrengthLabel,
    pub crack_time: CrackTimeCategory,
    pub is_common: bool,
    pub tips: Vec<&'static str>,
}

impl PasswordAssessment {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
