//! Copy-to-clipboard with fallback and a transient acknowledgment.
//!
//! The actual clipboard is supplied by the UI layer through [`Clipboard`].
//! A failed copy is logged and otherwise ignored; it never surfaces as an
//! evaluation error.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// How long the "Copied!" acknowledgment stays before reverting.
pub const COPY_ACK_DELAY: Duration = Duration::from_millis(1800);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// A platform clipboard able to receive text.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    CopiedWithFallback,
    Failed,
}

impl CopyOutcome {
    pub fn is_copied(self) -> bool {
        self != CopyOutcome::Failed
    }
}

/// Text shown on the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyLabel {
    Idle,
    Copied,
}

impl CopyLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            CopyLabel::Idle => "Copy",
            CopyLabel::Copied => "Copied!",
        }
    }
}

/// Copies the password, trying `primary` first and `fallback` second.
///
/// Empty passwords are not copied.
pub fn copy_password(
    primary: &dyn Clipboard,
    fallback: &dyn Clipboard,
    password: &SecretString,
) -> CopyOutcome {
    let text = password.expose_secret();
    if text.is_empty() {
        return CopyOutcome::Failed;
    }

    match primary.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(_primary_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Clipboard write failed, trying fallback: {}", _primary_err);

            match fallback.write_text(text) {
                Ok(()) => CopyOutcome::CopiedWithFallback,
                Err(_fallback_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Fallback copy failed: {}", _fallback_err);
                    CopyOutcome::Failed
                }
            }
        }
    }
}

/// Shows the "Copied!" acknowledgment, then reverts after [`COPY_ACK_DELAY`].
///
/// Cancelling `token` cuts the wait short; the label is still reverted.
pub async fn acknowledge_copy(tx: mpsc::Sender<CopyLabel>, token: CancellationToken) {
    if tx.send(CopyLabel::Copied).await.is_err() {
        return;
    }

    tokio::select! {
        _ = token.cancelled() => {}
        _ = tokio::time::sleep(COPY_ACK_DELAY) => {}
    }

    if let Err(_e) = tx.send(CopyLabel::Idle).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to revert copy label: {}", _e);
    }
}
