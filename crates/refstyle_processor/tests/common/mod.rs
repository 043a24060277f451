/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use chrono::NaiveDate;
use refstyle_core::{CitationStyle, FormattedReference};
use refstyle_processor::lookup::{CrossrefAuthor, CrossrefDate};
use refstyle_processor::{
    DocumentWriter, DoiLookup, DoiRecord, IsbnLookup, IsbnRecord, MemorySink, ProcessorError,
    ReferenceEngine,
};
use std::collections::HashMap;
use std::sync::Arc;

// --- Stub adapters ---

/// DOI lookup backed by a fixed table.
#[derive(Default)]
pub struct StubDoi(pub HashMap<String, DoiRecord>);

impl StubDoi {
    pub fn with(mut self, doi: &str, record: DoiRecord) -> Self {
        self.0.insert(doi.to_string(), record);
        self
    }
}

impl DoiLookup for StubDoi {
    fn lookup_doi(&self, doi: &str) -> Result<DoiRecord, ProcessorError> {
        self.0
            .get(doi)
            .cloned()
            .ok_or_else(|| ProcessorError::lookup(doi, "404 Not Found"))
    }
}

/// ISBN lookup backed by a fixed table.
#[derive(Default)]
pub struct StubIsbn(pub HashMap<String, IsbnRecord>);

impl StubIsbn {
    pub fn with(mut self, isbn: &str, record: IsbnRecord) -> Self {
        self.0.insert(isbn.to_string(), record);
        self
    }
}

impl IsbnLookup for StubIsbn {
    fn lookup_isbn(&self, isbn: &str) -> Result<IsbnRecord, ProcessorError> {
        self.0
            .get(isbn)
            .cloned()
            .ok_or_else(|| ProcessorError::lookup(isbn, "404 Not Found"))
    }
}

/// Collects written documents in memory.
#[derive(Default)]
pub struct CollectingWriter {
    pub documents: Vec<(CitationStyle, Vec<FormattedReference>)>,
}

impl DocumentWriter for CollectingWriter {
    fn write(
        &mut self,
        style: CitationStyle,
        entries: &[FormattedReference],
    ) -> Result<(), ProcessorError> {
        self.documents.push((style, entries.to_vec()));
        Ok(())
    }
}

// --- Fixtures ---

pub fn access_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

/// The Crossref work for `10.1/xyz`.
pub fn study_record() -> DoiRecord {
    DoiRecord {
        doi: Some("10.1/xyz".into()),
        author: vec![CrossrefAuthor {
            family: Some("Doe".into()),
            given: Some("Jane".into()),
            name: None,
        }],
        title: vec!["A Study".into()],
        issued: Some(CrossrefDate {
            date_parts: vec![vec![Some(2019)]],
        }),
        volume: Some("5".into()),
        issue: Some("2".into()),
        page: Some("10-20".into()),
        url: Some("https://doi.org/10.1/xyz".into()),
        ..Default::default()
    }
}

pub fn dom_casmurro() -> IsbnRecord {
    IsbnRecord {
        isbn: vec!["9788535914849".into(), "8535914846".into()],
        title: "Dom Casmurro".into(),
        authors: vec!["Machado de Assis".into()],
        year: Some("2016".into()),
        publisher: "São Paulo: Penguin".into(),
    }
}

/// An engine wired to the stub adapters, with a pinned access date.
pub fn engine(sink: Arc<MemorySink>) -> ReferenceEngine {
    ReferenceEngine::default()
        .with_doi_lookup(StubDoi::default().with("10.1/xyz", study_record()))
        .with_isbn_lookup(
            StubIsbn::default()
                .with("9788535914849", dom_casmurro())
                // Catalogue answers with a different edition.
                .with("9780000000002", dom_casmurro()),
        )
        .with_sink(sink)
        .with_access_date(access_date())
}
