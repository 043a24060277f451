/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The reference engine.
//!
//! Each reference moves through
//! `Pending -> {DoiLookup | IsbnLookup | LocalParse} -> Extracted -> Formatted`,
//! or fails at any step. Failures are recorded in the diagnostic sink and
//! reported to the caller as a single `None`: either both styles are
//! produced or neither is.

use crate::authors::{format_authors_abnt, format_authors_apa};
use crate::diagnostics::{Diagnostic, DiagnosticSink, MemorySink, Stage};
use crate::error::ProcessorError;
use crate::extract::{extract_fields, split_location};
use crate::lookup::{DoiLookup, IsbnLookup, Offline};
use crate::render::{compose_abnt, compose_apa, RenderContext};
use chrono::NaiveDate;
use refstyle_core::{
    CitationStyle, Config, ExtractedFields, FormattedReference, RawReference, SourceKind,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// A successfully processed reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedReference {
    pub source: SourceKind,
    pub fields: ExtractedFields,
    pub standard: FormattedReference,
    pub author_date: FormattedReference,
}

impl ProcessedReference {
    pub fn style(&self, style: CitationStyle) -> &FormattedReference {
        match style {
            CitationStyle::Standard => &self.standard,
            CitationStyle::AuthorDate => &self.author_date,
        }
    }
}

/// Turns raw references into formatted ABNT and APA entries.
pub struct ReferenceEngine {
    doi: Box<dyn DoiLookup + Send + Sync>,
    isbn: Box<dyn IsbnLookup + Send + Sync>,
    sink: Arc<dyn DiagnosticSink>,
    standard: RenderContext,
    author_date: RenderContext,
}

impl Default for ReferenceEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ReferenceEngine {
    /// An engine with offline lookups and an in-memory diagnostic sink.
    pub fn new(config: &Config) -> Self {
        Self {
            doi: Box::new(Offline),
            isbn: Box::new(Offline),
            sink: Arc::new(MemorySink::new()),
            standard: RenderContext::new(config.locale_for(CitationStyle::Standard)),
            author_date: RenderContext::new(config.locale_for(CitationStyle::AuthorDate)),
        }
    }

    pub fn with_doi_lookup(mut self, lookup: impl DoiLookup + Send + Sync + 'static) -> Self {
        self.doi = Box::new(lookup);
        self
    }

    pub fn with_isbn_lookup(mut self, lookup: impl IsbnLookup + Send + Sync + 'static) -> Self {
        self.isbn = Box::new(lookup);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Pin the access date printed for online sources.
    pub fn with_access_date(mut self, date: NaiveDate) -> Self {
        self.standard.access_date = date;
        self.author_date.access_date = date;
        self
    }

    pub fn context(&self, style: CitationStyle) -> &RenderContext {
        match style {
            CitationStyle::Standard => &self.standard,
            CitationStyle::AuthorDate => &self.author_date,
        }
    }

    /// Process one reference, recording any failure in the diagnostic sink.
    pub fn process(&self, raw: &RawReference) -> Option<ProcessedReference> {
        match self.try_process(raw) {
            Ok(processed) => Some(processed),
            Err((stage, err)) => {
                warn!(reference = raw.text(), %stage, error = %err, "reference failed");
                let diagnostic = Diagnostic::new(raw.text(), stage, &err);
                if let Err(sink_err) = self.sink.append(&diagnostic) {
                    warn!(error = %sink_err, "could not record diagnostic");
                }
                None
            }
        }
    }

    /// Process one reference, returning the failing stage on error.
    pub fn try_process(
        &self,
        raw: &RawReference,
    ) -> Result<ProcessedReference, (Stage, ProcessorError)> {
        let kind = raw.source_kind();
        let (stage, extracted) = match kind {
            SourceKind::Doi => (Stage::DoiLookup, self.resolve_doi(&raw.identifier())),
            SourceKind::Isbn => (Stage::IsbnLookup, self.resolve_isbn(&raw.identifier())),
            SourceKind::FreeText => (Stage::LocalParse, Ok(extract_fields(raw.text()))),
        };
        debug!(reference = raw.text(), %stage, "dispatched");
        let fields = extracted.map_err(|e| (stage, e))?;
        debug!(?fields, "extracted");

        self.format(kind, fields).map_err(|e| (Stage::Formatting, e))
    }

    /// Format already extracted fields in both styles.
    ///
    /// Empty fields are skipped by the composers; only an entry with no text
    /// at all is a failure.
    pub fn format(
        &self,
        kind: SourceKind,
        fields: ExtractedFields,
    ) -> Result<ProcessedReference, ProcessorError> {
        let standard = compose_abnt(
            &format_authors_abnt(&fields.authors, kind),
            &fields,
            &self.standard,
        );
        let author_date = compose_apa(
            &format_authors_apa(&fields.authors, kind),
            &fields,
            &self.author_date,
        );

        for entry in [&standard, &author_date] {
            if entry.fragments.is_empty() {
                return Err(ProcessorError::FormattingFailure(format!(
                    "{} entry is empty",
                    entry.style
                )));
            }
        }

        Ok(ProcessedReference {
            source: kind,
            fields,
            standard,
            author_date,
        })
    }

    fn resolve_doi(&self, doi: &str) -> Result<ExtractedFields, ProcessorError> {
        let record = self.doi.lookup_doi(doi)?;
        if record.title().is_empty() {
            return Err(ProcessorError::lookup(doi, "record has no title"));
        }

        Ok(ExtractedFields {
            authors: record.authors(),
            year: record.year(),
            title: record.title().to_string(),
            container_title: record.container_title().map(str::to_string),
            volume: record.volume.clone(),
            issue: record.issue.clone(),
            pages: record.page.clone(),
            doi: Some(doi.to_string()),
            url: record.url.clone(),
            ..Default::default()
        })
    }

    fn resolve_isbn(&self, isbn: &str) -> Result<ExtractedFields, ProcessorError> {
        let record = self.isbn.lookup_isbn(isbn)?;
        if !record.matches(isbn) {
            return Err(ProcessorError::lookup(
                isbn,
                format!(
                    "isbn request != isbn response ({} not in {:?})",
                    isbn, record.isbn
                ),
            ));
        }
        if record.title.trim().is_empty() {
            return Err(ProcessorError::lookup(isbn, "record has no title"));
        }

        let location = split_location(&record.publisher, record.year.as_deref());
        Ok(ExtractedFields {
            authors: record.authors.join("; "),
            year: location.year,
            title: record.title.trim().to_string(),
            city: location.city,
            publisher: location.publisher,
            ..Default::default()
        })
    }
}
