use crate::diagnostics::{Diagnostic, DiagnosticSink};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a whole chat export and decodes it as JSON.
///
/// I/O failures are returned as errors. Malformed JSON is reported to `sink`
/// and yields `Ok(None)`.
pub fn load_document(
    path: &Path,
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<Value>, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read chat export");
    let text = decode_utf8_dropping_invalid(&bytes);
    Ok(parse_document(&text, &path.display().to_string(), sink))
}

/// Same as [`load_document`] for text already in memory.
pub fn parse_document(text: &str, origin: &str, sink: &mut dyn DiagnosticSink) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(v) => Some(v),
        Err(e) => {
            sink.report(Diagnostic::DocumentDecode {
                origin: origin.to_string(),
                reason: e.to_string(),
            });
            None
        }
    }
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
pub fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
