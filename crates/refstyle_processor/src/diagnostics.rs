/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Append-only failure log.

use crate::error::ProcessorError;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The step a reference was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DoiLookup,
    IsbnLookup,
    /// Free-text extraction. It cannot fail, so no diagnostic carries it;
    /// it only labels the dispatch event.
    LocalParse,
    Formatting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::DoiLookup => write!(f, "doi-lookup"),
            Stage::IsbnLookup => write!(f, "isbn-lookup"),
            Stage::LocalParse => write!(f, "local-parse"),
            Stage::Formatting => write!(f, "formatting"),
        }
    }
}

/// One failed reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The input line, as given.
    pub reference: String,
    pub stage: Stage,
    /// Error kind label, see [`ProcessorError::kind`].
    pub kind: &'static str,
    pub cause: String,
}

impl Diagnostic {
    pub fn new(reference: &str, stage: Stage, error: &ProcessorError) -> Self {
        Self {
            reference: reference.to_string(),
            stage,
            kind: error.kind(),
            cause: error.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to process reference: {}. Error: {}",
            self.reference, self.cause
        )
    }
}

/// Receives one message per failure. Implementations serialize concurrent
/// appends themselves.
pub trait DiagnosticSink: Send + Sync {
    fn append(&self, diagnostic: &Diagnostic) -> Result<(), ProcessorError>;
}

/// Keeps diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything appended so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn append(&self, diagnostic: &Diagnostic) -> Result<(), ProcessorError> {
        let mut guard = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(diagnostic.clone());
        Ok(())
    }
}

/// Appends one line per diagnostic to a text file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticSink for FileSink {
    fn append(&self, diagnostic: &Diagnostic) -> Result<(), ProcessorError> {
        let _guard = match self.lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", diagnostic)?;
        Ok(())
    }
}
