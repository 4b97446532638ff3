//! UI collaborators used by the deletion flow, plus terminal versions.
//!
//! The flow only calls into these traits; rendering, modals and toasts
//! belong to whatever front end implements them.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::intent::PendingDeletion;

/// The confirmation step shown before a delete is sent.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// `true` when the user confirms deleting `intent`.
    async fn confirm(&self, intent: &PendingDeletion) -> bool;
}

/// The notification surface.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Asks on stderr and reads the answer from stdin.
pub struct TerminalDialog {
    assume_yes: bool,
}

impl TerminalDialog {
    /// With `assume_yes`, every deletion is confirmed without prompting.
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

/// Accepts `s`, `sim`, `y` and `yes`, case-insensitively.
fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

#[async_trait]
impl ConfirmDialog for TerminalDialog {
    async fn confirm(&self, intent: &PendingDeletion) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!(
            "Excluir o produto \"{}\" (ID {})? [s/N] ",
            intent.nome, intent.id
        );

        let mut line = String::new();
        match BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
            Ok(_) => is_affirmative(&line),
            Err(err) => {
                tracing::warn!(error = %err, "Could not read confirmation, treating as cancel");
                false
            }
        }
    }
}

/// Prints notifications to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("✔ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✘ {message}");
    }
}
