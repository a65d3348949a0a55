use thiserror::Error;

/// A recoverable problem found in the input. Reporting one never stops the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("Error decoding JSON from {origin}: {reason}")]
    DocumentDecode { origin: String, reason: String },
    #[error("Error parsing timestamp {}: {reason}", .raw.as_deref().unwrap_or("<none>"))]
    TimestampParse { raw: Option<String>, reason: String },
}

impl Diagnostic {
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::DocumentDecode { .. } => "malformed_json",
            Diagnostic::TimestampParse { .. } => "bad_timestamp",
        }
    }
}

/// Receives diagnostics as the pipeline produces them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects everything, in order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::DocumentDecode { .. } => {
                tracing::error!(kind = diagnostic.kind(), "{diagnostic}")
            }
            Diagnostic::TimestampParse { .. } => {
                tracing::warn!(kind = diagnostic.kind(), "{diagnostic}")
            }
        }
    }
}
