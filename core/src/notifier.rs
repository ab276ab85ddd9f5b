//! User-facing acknowledgements and confirmations.
//!
//! The host supplies its toast and alert widgets through `Notifier`; the
//! controller only ever calls these two methods.

pub trait Notifier {
    /// Show a transient acknowledgement.
    fn notify(&self, message: &str);

    /// Block until the user confirms (`true`) or cancels (`false`).
    fn confirm(&self, message: &str) -> bool;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Headless notifier: logs acknowledgements and answers every confirmation
/// with the same fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct TracingNotifier {
    answer: bool,
}

impl TracingNotifier {
    pub fn confirming() -> Self {
        Self { answer: true }
    }

    pub fn declining() -> Self {
        Self { answer: false }
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(text = message, "notification");
    }

    fn confirm(&self, message: &str) -> bool {
        tracing::info!(text = message, answer = self.answer, "confirmation");
        self.answer
    }
}
