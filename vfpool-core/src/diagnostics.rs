//! Diagnostic emission for non-fatal selector configuration problems.
//!
//! Malformed selector entries never abort a filtering pass: the selector
//! reports them to an injectable sink and continues with the remaining
//! entries and devices. The default sink forwards to `tracing`; tests and
//! interactive tooling inject a [`MemorySink`] to inspect what was emitted
//! without capturing process-wide log output.

use std::sync::Mutex;
use tracing::warn;

/// Receiver for non-fatal selector diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic message.
    fn emit(&self, message: &str);
}

/// Default sink: forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Sink that collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock still holds a usable Vec; recover it rather than panic.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
