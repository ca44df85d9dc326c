//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::is_common;
use crate::sections::SECTIONS;
use crate::types::{PasswordAssessment, Requirements, StrengthLabel};

/// Shown instead of specific tips while the password is empty.
pub const TIP_EMPTY: &str =
    "Use at least 12 characters with a mix of upper and lowercase letters, numbers, and special symbols.";

/// Shown when no section produced a tip.
pub const TIP_ALL_MET: &str = "Nice! Your password meets all recommended criteria.";

/// Quiet period before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength and returns a detailed assessment.
///
/// Total and deterministic: any string, including the empty one, produces an
/// assessment and the same input always produces the same output.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordAssessment {
    let pwd = password.expose_secret();
    let req = Requirements::detect(pwd);
    let score = req.score();
    let label = StrengthLabel::from_score(score, req.is_empty());

    PasswordAssessment {
        length: req.length,
        has_lower: req.has_lower,
        has_upper: req.has_upper,
        has_number: req.has_number,
        has_special: req.has_special,
        has_space: req.has_space,
        has_min_length: req.has_min_length,
        has_long_bonus: req.has_long_bonus,
        score,
        label,
        crack_time: label.crack_time(),
        is_common: is_common(pwd),
        tips: collect_tips(&req),
    }
}

/// Runs every section in order and gathers their tips.
fn collect_tips(req: &Requirements) -> Vec<&'static str> {
    if req.is_empty() {
        return vec![TIP_EMPTY];
    }

    let mut tips = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        let section_tips = section_fn(req);

        #[cfg(feature = "tracing")]
        {
            if !section_tips.is_empty() {
                tracing::trace!("section {} produced {} tip(s)", _section_name, section_tips.len());
            }
        }

        tips.extend(section_tips);
    }

    if tips.is_empty() {
        tips.push(TIP_ALL_MET);
    }
    tips
}

/// Debounced version that sends the assessment via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first. If `token` is cancelled during the
/// wait (the user kept typing), nothing is evaluated or sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAssessment>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let assessment = evaluate_password_strength(password);

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", _e);
    }
}
