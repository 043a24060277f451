/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Batch processing of reference files.

use crate::engine::ReferenceEngine;
use crate::error::ProcessorError;
use crate::render::DocumentWriter;
use refstyle_core::{CitationStyle, FormattedReference, RawReference};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Read one reference per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_references(reader: impl BufRead) -> Result<Vec<RawReference>, ProcessorError> {
    let mut references = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        references.push(RawReference::classify(trimmed));
    }
    Ok(references)
}

/// Read references from a file on disk.
pub fn load_references(path: &Path) -> Result<Vec<RawReference>, ProcessorError> {
    let file = File::open(path)?;
    read_references(BufReader::new(file))
}

/// Entries of a batch run, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub standard: Vec<FormattedReference>,
    pub author_date: Vec<FormattedReference>,
    pub processed: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn entries(&self, style: CitationStyle) -> &[FormattedReference] {
        match style {
            CitationStyle::Standard => &self.standard,
            CitationStyle::AuthorDate => &self.author_date,
        }
    }
}

impl ReferenceEngine {
    /// Process references in order. Failed references are left out of
    /// both lists.
    pub fn process_batch(&self, references: &[RawReference]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for raw in references {
            match self.process(raw) {
                Some(processed) => {
                    outcome.standard.push(processed.standard);
                    outcome.author_date.push(processed.author_date);
                    outcome.processed += 1;
                }
                None => outcome.failed += 1,
            }
        }
        outcome
    }
}

/// Process the file at `input` and hand both documents to `writer`.
pub fn run_batch(
    engine: &ReferenceEngine,
    input: &Path,
    writer: &mut dyn DocumentWriter,
) -> Result<BatchOutcome, ProcessorError> {
    let references = load_references(input)?;
    let outcome = engine.process_batch(&references);
    for style in CitationStyle::ALL {
        writer.write(style, outcome.entries(style))?;
    }
    info!(
        input = %input.display(),
        processed = outcome.processed,
        failed = outcome.failed,
        "batch finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refstyle_core::SourceKind;
    use std::io::Cursor;

    #[test]
    fn skips_blank_and_comment_lines() {
        let input = "# sources\n\n  10.1/abc  \nSilva Joao. Teoria. Atlas, 2020.\n   \n9788535914849\n";
        let refs = read_references(Cursor::new(input)).unwrap();
        let kinds: Vec<SourceKind> = refs.iter().map(|r| r.source_kind()).collect();
        assert_eq!(
            kinds,
            vec![SourceKind::Doi, SourceKind::FreeText, SourceKind::Isbn]
        );
        assert_eq!(refs[0].text(), "10.1/abc");
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let err = load_references(Path::new("/nonexistent/refs.txt")).unwrap_err();
        assert!(matches!(err, ProcessorError::Io(_)));
    }

    #[test]
    fn failures_are_dropped_from_both_styles() {
        let engine = ReferenceEngine::default();
        let refs = vec![
            RawReference::classify("Silva Joao. Teoria Geral. Atlas, 2020."),
            RawReference::classify("10.1/offline"),
            RawReference::classify("Lima Ana. Outro Livro. Forense, 2018."),
        ];
        let outcome = engine.process_batch(&refs);
        assert_eq!(outcome.processed, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.standard.len(), 2);
        assert_eq!(outcome.author_date.len(), 2);
        assert!(outcome.standard[0].plain_text().starts_with("SILVA"));
        assert!(outcome.standard[1].plain_text().starts_with("LIMA"));
    }
}
