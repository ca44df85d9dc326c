//! Rendering adapter
//!
//! Turns a [`PasswordAssessment`] into display-ready data: meter width and
//! color, requirement checklist, crack-time line, tips line and the common
//! password warning. Nothing here touches a display surface; a UI layer
//! copies these values onto its widgets.

use std::fmt;

use crate::evaluator::{TIP_ALL_MET, TIP_EMPTY};
use crate::types::{PasswordAssessment, StrengthLabel};

pub const COMMON_WARNING: &str =
    "This password is very common and easy to guess. Please choose something more unique.";

const MET_ICON: char = '✔';
const UNMET_ICON: char = '✖';

/// Width and color of the strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeter {
    pub width_percent: u8,
    pub color: &'static str,
}

/// Meter for each label, indexed by label discriminant.
const METER_BY_LABEL: [StrengthMeter; 6] = [
    StrengthMeter { width_percent: 0, color: "#374151" },
    StrengthMeter { width_percent: 20, color: "#ef4444" },
    StrengthMeter { width_percent: 40, color: "#f97316" },
    StrengthMeter { width_percent: 60, color: "#eab308" },
    StrengthMeter { width_percent: 80, color: "#4ade80" },
    StrengthMeter { width_percent: 100, color: "#22c55e" },
];

impl StrengthLabel {
    pub fn meter(self) -> StrengthMeter {
        METER_BY_LABEL[self as usize]
    }
}

/// One line of the requirement checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    MinLength,
    Lowercase,
    Uppercase,
    Number,
    Special,
    NoSpaces,
    LongLength,
}

impl Requirement {
    /// Checklist order.
    pub const ALL: [Requirement; 7] = [
        Requirement::MinLength,
        Requirement::Lowercase,
        Requirement::Uppercase,
        Requirement::Number,
        Requirement::Special,
        Requirement::NoSpaces,
        Requirement::LongLength,
    ];

    pub fn is_met(self, assessment: &PasswordAssessment) -> bool {
        match self {
            Requirement::MinLength => assessment.has_min_length,
            Requirement::Lowercase => assessment.has_lower,
            Requirement::Uppercase => assessment.has_upper,
            Requirement::Number => assessment.has_number,
            Requirement::Special => assessment.has_special,
            Requirement::NoSpaces => !assessment.has_space,
            Requirement::LongLength => assessment.has_long_bonus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementItem {
    pub requirement: Requirement,
    pub met: bool,
}

impl RequirementItem {
    pub fn icon(&self) -> char {
        if self.met { MET_ICON } else { UNMET_ICON }
    }
}

/// Everything a UI needs to show for one assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentView {
    pub strength_text: String,
    pub meter: StrengthMeter,
    pub checklist: Vec<RequirementItem>,
    pub crack_time_text: String,
    pub tips_text: String,
    pub common_warning: Option<&'static str>,
}

impl From<&PasswordAssessment> for AssessmentView {
    fn from(assessment: &PasswordAssessment) -> Self {
        let checklist = Requirement::ALL
            .into_iter()
            .map(|requirement| RequirementItem {
                requirement,
                met: requirement.is_met(assessment),
            })
            .collect();

        Self {
            strength_text: format!("Strength: {}", assessment.label),
            meter: assessment.label.meter(),
            checklist,
            crack_time_text: format!("Estimated crack time: {}", assessment.crack_time),
            tips_text: tips_text(assessment),
            common_warning: assessment.is_common.then_some(COMMON_WARNING),
        }
    }
}

fn tips_text(assessment: &PasswordAssessment) -> String {
    if assessment.is_empty() {
        return format!("Tip: {}", TIP_EMPTY);
    }
    match assessment.tips.as_slice() {
        [TIP_ALL_MET] => TIP_ALL_MET.to_string(),
        tips => format!("Tips: {}", tips.join(" ")),
    }
}

/// Whether the password field shows its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVisibility {
    #[default]
    Hidden,
    Visible,
}

impl FieldVisibility {
    pub fn toggle(self) -> Self {
        match self {
            FieldVisibility::Hidden => FieldVisibility::Visible,
            FieldVisibility::Visible => FieldVisibility::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == FieldVisibility::Visible
    }
}

impl fmt::Display for FieldVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Button text: the action, not the state.
        match self {
            FieldVisibility::Hidden => f.write_str("Show"),
            FieldVisibility::Visible => f.write_str("Hide"),
        }
    }
}
