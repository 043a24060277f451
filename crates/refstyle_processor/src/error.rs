/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors raised while turning a raw reference into formatted entries.
///
/// Free-text parsing never fails: missing delimiters degrade to empty
/// fields instead of producing an error.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The lookup adapter could not resolve the identifier, or returned a
    /// record that failed its self-consistency check.
    #[error("lookup failed for {identifier}: {cause}")]
    LookupFailure { identifier: String, cause: String },

    /// A fault while composing one of the styles.
    #[error("formatting failed: {0}")]
    FormattingFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl ProcessorError {
    pub fn lookup(identifier: impl Into<String>, cause: impl Into<String>) -> Self {
        ProcessorError::LookupFailure {
            identifier: identifier.into(),
            cause: cause.into(),
        }
    }

    /// Short label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessorError::LookupFailure { .. } => "lookup-failure",
            ProcessorError::FormattingFailure(_) => "formatting-failure",
            ProcessorError::Io(_) => "io",
            ProcessorError::ParseError(..) => "parse-error",
        }
    }
}

impl From<serde_json::Error> for ProcessorError {
    fn from(e: serde_json::Error) -> Self {
        ProcessorError::ParseError("JSON".to_string(), e.to_string())
    }
}
