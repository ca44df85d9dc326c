//! Whitespace section - advises removing spaces.

use super::SectionTips;
use crate::types::Requirements;

pub const TIP_NO_SPACES: &str = "Remove spaces from your password.";

/// Flags any Unicode whitespace. Advisory only, the score is unaffected.
pub fn whitespace_section(req: &Requirements) -> SectionTips {
    if req.has_space {
        vec![TIP_NO_SPACES]
    } else {
        Vec::new()
    }
}
