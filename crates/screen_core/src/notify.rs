//! Notification boundary: the core hands `(message, severity)` pairs to an
//! opaque collaborator; what happens to them (toast, log, test buffer) is the
//! presentation layer's business.

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Routes notifications into the tracing log stream.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => info!("{message}"),
            Severity::Error => warn!("{message}"),
        }
    }
}

/// Buffers notifications for inspection; used by tests and the console
/// harness to echo what the core emitted.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Vec<(String, Severity)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[(String, Severity)] {
        &self.messages
    }

    pub fn drain(&mut self) -> Vec<(String, Severity)> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.messages.push((message.to_string(), severity));
    }
}
